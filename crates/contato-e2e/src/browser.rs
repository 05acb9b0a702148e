//! Headless browser control over the Chrome DevTools Protocol.
//!
//! One browser per scenario; pages are never shared across scenarios.

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;

use crate::config::HarnessConfig;
use crate::result::{ContatoError, ContatoResult};

/// A running browser instance
#[derive(Debug)]
pub struct Browser {
    inner: CdpBrowser,
    #[allow(dead_code)]
    handle: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launch a browser configured by the harness
    pub async fn launch(config: &HarnessConfig) -> ContatoResult<Self> {
        let mut builder = CdpConfig::builder()
            .window_size(config.viewport_width, config.viewport_height);

        if !config.headless {
            builder = builder.with_head();
        }

        if !config.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(ref path) = config.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder
            .build()
            .map_err(|message| ContatoError::BrowserLaunch { message })?;

        let (browser, mut handler) =
            CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| map_launch_error(&e.to_string()))?;

        // The handler stream must be polled for the connection to make progress.
        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            inner: browser,
            handle,
        })
    }

    /// Create a fresh blank page
    pub async fn new_page(&self) -> ContatoResult<PageHandle> {
        let page = self
            .inner
            .new_page("about:blank")
            .await
            .map_err(|e| ContatoError::Page {
                message: e.to_string(),
            })?;
        Ok(PageHandle { inner: page })
    }

    /// Close the browser
    pub async fn close(mut self) -> ContatoResult<()> {
        self.inner
            .close()
            .await
            .map_err(|e| ContatoError::BrowserLaunch {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

fn map_launch_error(message: &str) -> ContatoError {
    if message.contains("auto detect") {
        ContatoError::BrowserNotFound
    } else {
        ContatoError::BrowserLaunch {
            message: message.to_string(),
        }
    }
}

/// Handle to one live page
#[derive(Debug)]
pub struct PageHandle {
    inner: CdpPage,
}

impl PageHandle {
    /// Raw CDP page, for event listeners and protocol commands
    pub(crate) fn cdp(&self) -> &CdpPage {
        &self.inner
    }

    /// Navigate to a URL and wait for the load to complete
    pub async fn goto(&self, url: &str) -> ContatoResult<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| ContatoError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        self.inner
            .wait_for_navigation()
            .await
            .map_err(|e| ContatoError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Poll until the current document reaches `readyState === "complete"`.
    ///
    /// Evaluation errors while an execution context is being swapped out
    /// mid-navigation are retried, not surfaced.
    pub async fn wait_until_ready(&self, timeout: std::time::Duration) -> ContatoResult<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Ok(state) = self.eval::<String>("document.readyState").await {
                if state == "complete" {
                    return Ok(());
                }
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(ContatoError::Page {
                    message: format!(
                        "document not ready within {}ms",
                        timeout.as_millis()
                    ),
                });
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
    }

    /// Current document title
    pub async fn title(&self) -> ContatoResult<String> {
        let title = self
            .inner
            .get_title()
            .await
            .map_err(|e| ContatoError::Page {
                message: e.to_string(),
            })?;
        Ok(title.unwrap_or_default())
    }

    /// Current page URL
    pub async fn current_url(&self) -> ContatoResult<String> {
        let url = self.inner.url().await.map_err(|e| ContatoError::Page {
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_default())
    }

    /// Evaluate a JavaScript expression and deserialize its result
    pub async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> ContatoResult<T> {
        let result = self
            .inner
            .evaluate(expr)
            .await
            .map_err(|e| ContatoError::Script {
                message: e.to_string(),
            })?;
        result.into_value().map_err(|e| ContatoError::Script {
            message: e.to_string(),
        })
    }
}
