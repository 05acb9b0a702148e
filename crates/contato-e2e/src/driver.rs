//! Fill/submit capability, polymorphic over interaction mode.
//!
//! Scenario assertions are written once against `FormDriver`; whether the
//! form was driven by direct DOM manipulation or by natural-language
//! instructions handed to an AI executor is invisible to them. Both modes
//! must produce an equivalent end state.

use async_trait::async_trait;

use crate::ai::{AiContext, AiExecutor};
use crate::form::FormFields;
use crate::instruction::{fill_instruction, submit_instruction};
use crate::page::ContactPage;
use crate::result::ContatoResult;

/// One way of driving the contact form
#[async_trait]
pub trait FormDriver: Send + Sync {
    /// Write the field set into the form
    async fn fill(&self, page: &ContactPage, fields: &FormFields) -> ContatoResult<()>;

    /// Trigger the form's submit control
    async fn submit(&self, page: &ContactPage) -> ContatoResult<()>;

    /// Mode tag for logging
    fn mode(&self) -> &'static str;
}

/// Direct DOM manipulation through the page abstraction
#[derive(Debug, Default)]
pub struct DirectDriver;

impl DirectDriver {
    /// Build the driver
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FormDriver for DirectDriver {
    async fn fill(&self, page: &ContactPage, fields: &FormFields) -> ContatoResult<()> {
        page.fill_form(fields).await
    }

    async fn submit(&self, page: &ContactPage) -> ContatoResult<()> {
        page.submit().await
    }

    fn mode(&self) -> &'static str {
        "direct"
    }
}

/// Natural-language instructions handed to an AI executor, one per field
/// fill plus one for the submit click
#[derive(Debug)]
pub struct InstructionDriver<E> {
    executor: E,
    scenario: String,
}

impl<E: AiExecutor> InstructionDriver<E> {
    /// Build the driver around an executor
    pub fn new(executor: E, scenario: impl Into<String>) -> Self {
        Self {
            executor,
            scenario: scenario.into(),
        }
    }
}

#[async_trait]
impl<E: AiExecutor> FormDriver for InstructionDriver<E> {
    async fn fill(&self, page: &ContactPage, fields: &FormFields) -> ContatoResult<()> {
        let cx = AiContext {
            page: page.handle(),
            scenario: &self.scenario,
        };
        for (field, value) in fields.as_pairs() {
            let instruction = fill_instruction(field, value);
            self.executor.execute(&instruction, &cx).await?;
        }
        Ok(())
    }

    async fn submit(&self, page: &ContactPage) -> ContatoResult<()> {
        let cx = AiContext {
            page: page.handle(),
            scenario: &self.scenario,
        };
        self.executor.execute(&submit_instruction(), &cx).await
    }

    fn mode(&self) -> &'static str {
        "instruction"
    }
}
