//! Harness configuration.
//!
//! One `HarnessConfig` per scenario run. Defaults target the hosted
//! production page; the env overrides exist so the same scenarios can be
//! pointed at a local fixture copy of the form.

use std::time::Duration;

/// Production URL of the contact form under test
pub const TARGET_URL: &str = "https://techshop.wuaze.com/resources/views/RafaelFrassettoPereira-JoaoGabrielRosso-JoaoAcordi-LuizMiguel-Apresentacao-A3.html?i=1";

/// Document title the target page is expected to carry
pub const EXPECTED_TITLE: &str = "Formulário de Contato";

/// Default bound on the submission-effect race (milliseconds)
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 10_000;

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// URL of the page under test
    pub target_url: String,
    /// Expected document title after navigation
    pub expected_title: String,
    /// Bound on the request/navigation race after a submit
    pub submit_timeout_ms: u64,
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            target_url: TARGET_URL.to_string(),
            expected_title: EXPECTED_TITLE.to_string(),
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl HarnessConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with env overrides applied on top of the defaults.
    ///
    /// Recognized variables: `CONTATO_E2E_URL`, `CONTATO_E2E_TIMEOUT_MS`,
    /// `CONTATO_E2E_HEADFUL`, `CHROMIUM_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CONTATO_E2E_URL") {
            if !url.is_empty() {
                config.target_url = url;
            }
        }
        if let Some(ms) = std::env::var("CONTATO_E2E_TIMEOUT_MS")
            .ok()
            .and_then(|v| parse_millis(&v))
        {
            config.submit_timeout_ms = ms;
        }
        if let Ok(v) = std::env::var("CONTATO_E2E_HEADFUL") {
            config.headless = !parse_flag(&v);
        }
        if let Ok(path) = std::env::var("CHROMIUM_PATH") {
            if !path.is_empty() {
                config.chromium_path = Some(path);
            }
        }
        config
    }

    /// Set the target URL
    #[must_use]
    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }

    /// Set the expected document title
    #[must_use]
    pub fn with_expected_title(mut self, title: impl Into<String>) -> Self {
        self.expected_title = title.into();
        self
    }

    /// Set the submission race timeout
    #[must_use]
    pub const fn with_submit_timeout(mut self, ms: u64) -> Self {
        self.submit_timeout_ms = ms;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Get the submission race timeout as a Duration
    #[must_use]
    pub const fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

fn parse_millis(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|ms| *ms > 0)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
