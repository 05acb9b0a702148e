//! Scenario orchestration: fill → submit → observe → assert.
//!
//! The runner owns the submission-detection protocol and the assertions;
//! how the form gets filled is delegated to a `FormDriver`, so every
//! assertion here is written once for both interaction modes.

use tracing::{debug, info};

use crate::browser::Browser;
use crate::config::HarnessConfig;
use crate::driver::FormDriver;
use crate::form::{FormField, FormFields};
use crate::observer::SubmissionObserver;
use crate::page::ContactPage;
use crate::result::{ContatoError, ContatoResult};
use crate::submission::{CapturedPost, SubmissionObservation};

/// Runs one scenario against one freshly opened page
#[derive(Debug)]
pub struct ScenarioRunner {
    config: HarnessConfig,
}

impl ScenarioRunner {
    /// Build a runner
    #[must_use]
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Open the target page and check the document title
    pub async fn open_page(&self, browser: &Browser) -> ContatoResult<ContactPage> {
        let page = ContactPage::open(browser, &self.config).await?;
        let title = page.title().await?;
        if title != self.config.expected_title {
            return Err(ContatoError::Navigation {
                url: self.config.target_url.clone(),
                message: format!(
                    "document title {title:?}, expected {:?}",
                    self.config.expected_title
                ),
            });
        }
        Ok(page)
    }

    /// Fill the form, submit, and assert on whichever submission effect
    /// actually occurs. Returns the observation so callers can assert on
    /// the branch taken.
    pub async fn run_submission<D: FormDriver + ?Sized>(
        &self,
        page: &ContactPage,
        driver: &D,
        fields: &FormFields,
    ) -> ContatoResult<SubmissionObservation> {
        info!(mode = driver.mode(), "filling contact form");
        driver.fill(page, fields).await?;
        self.verify_fill(page, fields).await?;

        // Observers must be armed before the submit so no signal is missed.
        let observer = SubmissionObserver::arm(page.handle()).await?;
        driver.submit(page).await?;
        let observation = observer
            .wait(page.handle(), self.config.submit_timeout())
            .await?;
        info!(mode = driver.mode(), observation = %observation, "submission observed");

        match &observation {
            SubmissionObservation::PostRequest(captured) => {
                assert_post_payload(captured, fields)?;
            }
            SubmissionObservation::Navigation(event) => {
                debug!(url = %event.url, "asserting fields reset after reload");
                self.assert_fields_reset(page).await?;
            }
            SubmissionObservation::Quiescent => {
                return Err(ContatoError::SubmissionTimeout {
                    ms: self.config.submit_timeout_ms,
                });
            }
        }
        Ok(observation)
    }

    /// Submit with every required field empty and assert the page rejects
    /// it: no qualifying request, no navigation, the name field invalid per
    /// native constraint validation, and the URL unchanged.
    pub async fn run_validation<D: FormDriver + ?Sized>(
        &self,
        page: &ContactPage,
        driver: &D,
    ) -> ContatoResult<()> {
        let url_before = page.current_url().await?;

        let observer = SubmissionObserver::arm(page.handle()).await?;
        driver.submit(page).await?;
        let observation = observer
            .wait(page.handle(), self.config.submit_timeout())
            .await?;
        info!(mode = driver.mode(), observation = %observation, "validation submit observed");

        if !observation.is_quiescent() {
            return Err(ContatoError::AssertionFailed {
                message: format!(
                    "expected no submission effect with empty required fields, observed {observation}"
                ),
            });
        }

        let name_valid = page.field_validity(FormField::Name).await?;
        if name_valid {
            return Err(ContatoError::AssertionFailed {
                message: format!(
                    "field {} reports valid despite being empty and required",
                    FormField::Name.selector()
                ),
            });
        }

        let url_after = page.current_url().await?;
        if url_after != url_before {
            return Err(ContatoError::AssertionFailed {
                message: format!("URL changed across rejected submit: {url_before:?} -> {url_after:?}"),
            });
        }
        Ok(())
    }

    /// Field values observed after a fill must exactly equal the values
    /// written; the form performs no input transformation.
    async fn verify_fill(&self, page: &ContactPage, fields: &FormFields) -> ContatoResult<()> {
        for (field, expected) in fields.as_pairs() {
            let actual = page.field_value(field).await?;
            if actual != expected {
                return Err(ContatoError::AssertionFailed {
                    message: format!(
                        "field {} read back {actual:?} after writing {expected:?}",
                        field.selector()
                    ),
                });
            }
        }
        Ok(())
    }

    /// After a full reload, every field must read back empty, the
    /// indirect confirmation that the submission round-trip occurred.
    async fn assert_fields_reset(&self, page: &ContactPage) -> ContatoResult<()> {
        page.handle()
            .wait_until_ready(std::time::Duration::from_secs(5))
            .await?;
        for field in FormField::ALL {
            let value = page.field_value(field).await?;
            if !value.is_empty() {
                return Err(ContatoError::AssertionFailed {
                    message: format!(
                        "field {} still holds {value:?} after reload",
                        field.selector()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Assert the captured request is a POST whose decoded body echoes the
/// filled values field by field
fn assert_post_payload(captured: &CapturedPost, fields: &FormFields) -> ContatoResult<()> {
    if captured.method != "POST" {
        return Err(ContatoError::AssertionFailed {
            message: format!("captured request method {:?}, expected \"POST\"", captured.method),
        });
    }
    let decoded = captured.form_fields()?;
    for (field, expected) in fields.as_pairs() {
        match decoded.get(field.payload_key()) {
            Some(actual) if actual == expected => {}
            Some(actual) => {
                return Err(ContatoError::AssertionFailed {
                    message: format!(
                        "payload field {:?} is {actual:?}, expected {expected:?}",
                        field.payload_key()
                    ),
                });
            }
            None => {
                return Err(ContatoError::AssertionFailed {
                    message: format!(
                        "payload field {:?} missing from decoded body of {}",
                        field.payload_key(),
                        captured.url
                    ),
                });
            }
        }
    }
    Ok(())
}
