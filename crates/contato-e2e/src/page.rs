//! Page abstraction over the contact form.
//!
//! Locators are resolved once at construction and assumed stable for the
//! page's lifetime. Operations mutate the live DOM and nothing else;
//! interpreting what a submit did belongs to the scenario runner.

use crate::browser::{Browser, PageHandle};
use crate::config::HarnessConfig;
use crate::form::{FormField, FormFields, SUBMIT_SELECTOR};
use crate::result::{ContatoError, ContatoResult};

/// Stable handle over the contact form's interactive elements
#[derive(Debug)]
pub struct ContactPage {
    page: PageHandle,
    url: String,
}

impl ContactPage {
    /// Create a page handle and load the target URL
    pub async fn open(browser: &Browser, config: &HarnessConfig) -> ContatoResult<Self> {
        let page = browser.new_page().await?;
        let contact = Self {
            page,
            url: config.target_url.clone(),
        };
        contact.visit().await?;
        contact
            .page
            .wait_until_ready(std::time::Duration::from_secs(10))
            .await?;
        Ok(contact)
    }

    /// Navigate to the target URL
    pub async fn visit(&self) -> ContatoResult<()> {
        self.page.goto(&self.url).await
    }

    /// The underlying page handle (for observers and AI executors)
    #[must_use]
    pub fn handle(&self) -> &PageHandle {
        &self.page
    }

    /// Document title
    pub async fn title(&self) -> ContatoResult<String> {
        self.page.title().await
    }

    /// Current URL
    pub async fn current_url(&self) -> ContatoResult<String> {
        self.page.current_url().await
    }

    /// Write every value into its field by id-based lookup.
    ///
    /// Values are written verbatim; the form is expected not to transform
    /// input. Fails with `ElementNotFound` when a field is absent, which
    /// signals markup drift against the fixture assumptions.
    pub async fn fill_form(&self, fields: &FormFields) -> ContatoResult<()> {
        for (field, value) in fields.as_pairs() {
            self.fill_field(field, value).await?;
        }
        Ok(())
    }

    /// Write one field's value
    pub async fn fill_field(&self, field: FormField, value: &str) -> ContatoResult<()> {
        set_element_value(&self.page, field.selector(), value).await
    }

    /// Read a field's current value
    pub async fn field_value(&self, field: FormField) -> ContatoResult<String> {
        read_element_value(&self.page, field.selector()).await
    }

    /// Native constraint-validation state of a field
    pub async fn field_validity(&self, field: FormField) -> ContatoResult<bool> {
        read_element_validity(&self.page, field.selector()).await
    }

    /// Click the form's submit control.
    ///
    /// Does not wait for or interpret the result; the outcome type is not
    /// guaranteed by this layer.
    pub async fn submit(&self) -> ContatoResult<()> {
        click_element(&self.page, SUBMIT_SELECTOR).await
    }
}

/// Set an input's value and dispatch the input/change events the page's
/// own scripts listen for
pub(crate) async fn set_element_value(
    page: &PageHandle,
    selector: &str,
    value: &str,
) -> ContatoResult<()> {
    let expr = format!(
        r"(() => {{
            const el = document.querySelector({sel});
            if (!el) return false;
            el.focus();
            el.value = {val};
            el.dispatchEvent(new Event('input', {{ bubbles: true }}));
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));
            return true;
        }})()",
        sel = js_str(selector),
        val = js_str(value),
    );
    let found: bool = page.eval(&expr).await?;
    if !found {
        return Err(ContatoError::ElementNotFound {
            selector: selector.to_string(),
        });
    }
    Ok(())
}

/// Click an element by selector
pub(crate) async fn click_element(page: &PageHandle, selector: &str) -> ContatoResult<()> {
    let expr = format!(
        r"(() => {{
            const el = document.querySelector({sel});
            if (!el) return false;
            el.click();
            return true;
        }})()",
        sel = js_str(selector),
    );
    let found: bool = page.eval(&expr).await?;
    if !found {
        return Err(ContatoError::ElementNotFound {
            selector: selector.to_string(),
        });
    }
    Ok(())
}

/// Read an input's current value
pub(crate) async fn read_element_value(
    page: &PageHandle,
    selector: &str,
) -> ContatoResult<String> {
    let expr = format!(
        r"(() => {{
            const el = document.querySelector({sel});
            return el ? el.value : null;
        }})()",
        sel = js_str(selector),
    );
    let value: Option<String> = page.eval(&expr).await?;
    value.ok_or_else(|| ContatoError::ElementNotFound {
        selector: selector.to_string(),
    })
}

/// Read an input's native constraint-validation state
pub(crate) async fn read_element_validity(
    page: &PageHandle,
    selector: &str,
) -> ContatoResult<bool> {
    let expr = format!(
        r"(() => {{
            const el = document.querySelector({sel});
            return el ? el.validity.valid : null;
        }})()",
        sel = js_str(selector),
    );
    let valid: Option<bool> = page.eval(&expr).await?;
    valid.ok_or_else(|| ContatoError::ElementNotFound {
        selector: selector.to_string(),
    })
}

/// Render a Rust string as a JS string literal
fn js_str(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
