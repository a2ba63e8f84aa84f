//! Output serialization.
//!
//! One sink exists: delimited CSV with a header row, one row per record.

pub mod csv;
