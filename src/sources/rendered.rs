//! Browser-rendered content source.
//!
//! Drives a headless Chromium instance over CDP via `chromiumoxide`. The
//! session navigates to the target URL, lets the page settle per the
//! configured [`WaitPolicy`], dismisses a cookie-consent overlay when one
//! shows up, and returns the serialized DOM. The browser process is closed on
//! every exit path, including errors raised mid-navigation.
//!
//! The historical behavior is a fixed-delay settle; [`WaitPolicy::ForElement`]
//! is the sturdier alternative that polls for a selector and falls back to
//! proceeding once its timeout elapses.

use crate::config::{SourceConfig, WaitPolicy};
use crate::error::ScrapeError;
use crate::sources::ContentSource;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Pause after clicking a consent control, so the overlay can clear.
const CONSENT_SETTLE: Duration = Duration::from_secs(2);
/// Polling interval for [`WaitPolicy::ForElement`].
const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Upper bound on waiting for the initial navigation to commit.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches client-side-rendered pages through a headless Chromium session.
#[derive(Debug, Default)]
pub struct RenderedSource;

impl ContentSource for RenderedSource {
    #[instrument(level = "info", skip_all, fields(url = %config.url))]
    async fn fetch(&self, config: &SourceConfig) -> Result<String, ScrapeError> {
        let browser_config = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-dev-tools")
            .arg("--no-zygote")
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--exclude-switches=enable-automation")
            .arg("--disable-infobars")
            .arg(format!("--user-agent={}", config.user_agent))
            .build()
            .map_err(ScrapeError::Browser)?;

        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Browser(e.to_string()))?;

        // The handler stream must be pumped for the CDP connection to make
        // progress; it ends once the browser closes.
        let driver = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "Browser handler event error");
                }
            }
        });

        let result = render(&browser, config).await;

        if let Err(e) = browser.close().await {
            warn!(error = %e, "Failed to close browser cleanly");
        }
        driver.abort();

        result
    }
}

async fn render(browser: &Browser, config: &SourceConfig) -> Result<String, ScrapeError> {
    info!("Navigating");
    let page = browser
        .new_page(config.url.as_str())
        .await
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;

    // Committing the navigation can outlast slow ad/analytics loads; proceed
    // either way, the settle policy below is what we actually rely on.
    match tokio::time::timeout(NAVIGATION_TIMEOUT, page.wait_for_navigation()).await {
        Ok(Ok(_)) => debug!("Navigation committed"),
        Ok(Err(e)) => debug!(error = %e, "Navigation wait error; continuing"),
        Err(_) => debug!("Navigation wait timed out; continuing"),
    }

    settle(&page, &config.wait).await?;
    dismiss_consent(&page, &config.consent_phrases).await;

    let html = page
        .content()
        .await
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;
    info!(bytes = html.len(), "Captured rendered document");
    Ok(html)
}

/// Let client-side rendering settle per the configured policy.
async fn settle(page: &Page, wait: &WaitPolicy) -> Result<(), ScrapeError> {
    match wait {
        WaitPolicy::Delay(delay) => {
            info!(secs = delay.as_secs(), "Waiting fixed settle delay");
            sleep(*delay).await;
            Ok(())
        }
        WaitPolicy::ForElement { selector, timeout } => {
            info!(%selector, timeout_secs = timeout.as_secs(), "Waiting for element");
            let script = format!(
                "() => document.querySelector({}) !== null",
                serde_json::to_string(selector).unwrap_or_default()
            );
            let deadline = tokio::time::Instant::now() + *timeout;
            loop {
                let present = page
                    .evaluate(script.as_str())
                    .await
                    .ok()
                    .and_then(|result| result.into_value::<bool>().ok())
                    .unwrap_or(false);
                if present {
                    debug!(%selector, "Element appeared");
                    return Ok(());
                }
                if tokio::time::Instant::now() >= deadline {
                    warn!(%selector, "Element never appeared; extracting anyway");
                    return Ok(());
                }
                sleep(POLL_INTERVAL).await;
            }
        }
    }
}

/// Click the first button whose text matches one of the accept phrases.
///
/// Consent overlays come and go; their absence is tolerated silently.
async fn dismiss_consent(page: &Page, phrases: &[String]) {
    if phrases.is_empty() {
        return;
    }
    let phrase_list = phrases
        .iter()
        .filter_map(|p| serde_json::to_string(p).ok())
        .collect::<Vec<_>>()
        .join(",");
    let script = format!(
        r#"() => {{
            const phrases = [{phrase_list}];
            const buttons = Array.from(document.querySelectorAll('button'));
            const target = buttons.find(b => phrases.some(p => (b.textContent || '').includes(p)));
            if (target) {{ target.click(); return true; }}
            return false;
        }}"#
    );

    match page.evaluate(script.as_str()).await {
        Ok(result) => {
            if result.into_value::<bool>().unwrap_or(false) {
                info!("Accepted cookie-consent overlay");
                sleep(CONSENT_SETTLE).await;
            } else {
                debug!("No consent overlay to accept");
            }
        }
        Err(e) => debug!(error = %e, "Consent check failed; continuing"),
    }
}
