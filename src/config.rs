//! Per-site run configuration.
//!
//! The original per-site scripts kept URL, User-Agent, wait time, and output
//! path as module-level constants. Here they live in one immutable
//! [`SourceConfig`] value built once at startup and passed into the pipeline,
//! so both sites share a single pipeline implementation and tests can supply
//! their own configuration.

use std::path::PathBuf;
use std::time::Duration;

/// User-Agent sent with static HTTP fetches.
pub const STATIC_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// User-Agent presented by the headless browser session.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Bounded timeout for one static HTTP GET.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// How a rendered page is allowed to settle before extraction.
#[derive(Debug, Clone)]
pub enum WaitPolicy {
    /// Sleep for a fixed duration. Reproduces the historical behavior of the
    /// original scripts; fragile, but faithful.
    Delay(Duration),
    /// Poll for a CSS selector to appear, falling back to proceeding anyway
    /// once `timeout` elapses.
    ForElement { selector: String, timeout: Duration },
}

/// Immutable configuration for one scrape run.
///
/// Created once at pipeline start; never mutated.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Target listing URL.
    pub url: String,
    /// User-Agent header (static fetch) or browser UA (rendered fetch).
    pub user_agent: String,
    /// Request timeout for the static variant.
    pub timeout: Duration,
    /// Settle policy for the rendered variant.
    pub wait: WaitPolicy,
    /// Button texts treated as a cookie-consent "accept" control. Empty for
    /// sites without a consent overlay.
    pub consent_phrases: Vec<String>,
    /// CSV output path. Parent directories are created as needed.
    pub output_path: PathBuf,
}

impl SourceConfig {
    /// Configuration for the Marketing Dive news feed (static HTML).
    pub fn marketing_dive(output_dir: &str, user_agent: Option<&str>) -> Self {
        Self {
            url: "https://www.marketingdive.com/news/".to_string(),
            user_agent: user_agent.unwrap_or(STATIC_USER_AGENT).to_string(),
            timeout: HTTP_TIMEOUT,
            wait: WaitPolicy::Delay(Duration::ZERO),
            consent_phrases: Vec::new(),
            output_path: PathBuf::from(output_dir).join("marketing_dive_news.csv"),
        }
    }

    /// Configuration for the Google News Spanish-edition topic page
    /// (client-side rendered).
    pub fn google_news(output_dir: &str, wait: WaitPolicy, user_agent: Option<&str>) -> Self {
        Self {
            url: "https://news.google.com/topics/CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx1YlY4U0FtVnpHZ0pGVXlnQVAB?hl=es&gl=ES&ceid=ES%3Aes"
                .to_string(),
            user_agent: user_agent.unwrap_or(BROWSER_USER_AGENT).to_string(),
            timeout: HTTP_TIMEOUT,
            wait,
            consent_phrases: vec![
                "Aceptar todo".to_string(),
                "Aceptar".to_string(),
                "Accept all".to_string(),
            ],
            output_path: PathBuf::from(output_dir).join("google_news.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketing_dive_defaults() {
        let config = SourceConfig::marketing_dive("./output", None);
        assert_eq!(config.user_agent, STATIC_USER_AGENT);
        assert_eq!(config.timeout, HTTP_TIMEOUT);
        assert!(config.consent_phrases.is_empty());
        assert!(
            config
                .output_path
                .ends_with("marketing_dive_news.csv")
        );
    }

    #[test]
    fn test_google_news_carries_consent_phrases() {
        let wait = WaitPolicy::Delay(Duration::from_secs(5));
        let config = SourceConfig::google_news("./output", wait, None);
        assert!(config.consent_phrases.iter().any(|p| p == "Aceptar"));
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
    }

    #[test]
    fn test_user_agent_override() {
        let config = SourceConfig::marketing_dive("./out", Some("test-agent/1.0"));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
