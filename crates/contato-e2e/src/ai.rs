//! AI action executor seam.
//!
//! The harness hands the executor an instruction string plus the live page
//! and scenario context; how the executor resolves elements is opaque. The
//! only contract is "instruction performed or failed". `ScriptedExecutor`
//! is the in-repo deterministic executor: it parses the instruction
//! grammar and resolves visible labels to the page's stable ids, standing
//! in for the external AI interpreter in offline runs.

use async_trait::async_trait;

use crate::browser::PageHandle;
use crate::form::{SUBMIT_LABEL, SUBMIT_SELECTOR};
use crate::instruction::{InstructionParser, ParsedInstruction};
use crate::page;
use crate::result::{ContatoError, ContatoResult};

/// Context handed to the executor alongside each instruction
#[derive(Debug)]
pub struct AiContext<'a> {
    /// Live page the instruction targets
    pub page: &'a PageHandle,
    /// Name of the scenario issuing the instruction
    pub scenario: &'a str,
}

/// An external component that interprets natural-language instructions
/// into page interactions
#[async_trait]
pub trait AiExecutor: Send + Sync {
    /// Perform one instruction against the live page
    async fn execute(&self, instruction: &str, cx: &AiContext<'_>) -> ContatoResult<()>;
}

/// Deterministic reference executor for the instruction grammar
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    parser: InstructionParser,
}

impl ScriptedExecutor {
    /// Build the executor
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: InstructionParser::new(),
        }
    }
}

#[async_trait]
impl AiExecutor for ScriptedExecutor {
    async fn execute(&self, instruction: &str, cx: &AiContext<'_>) -> ContatoResult<()> {
        let parsed =
            self.parser
                .parse(instruction)
                .ok_or_else(|| ContatoError::Executor {
                    instruction: instruction.to_string(),
                    message: "instruction not understood".to_string(),
                })?;
        tracing::debug!(scenario = cx.scenario, %instruction, "executing instruction");
        match parsed {
            ParsedInstruction::Fill { field, value } => {
                page::set_element_value(cx.page, field.selector(), &value).await
            }
            ParsedInstruction::Click { label } => {
                if label != SUBMIT_LABEL {
                    return Err(ContatoError::Executor {
                        instruction: instruction.to_string(),
                        message: format!("no button labelled {label:?} on this page"),
                    });
                }
                page::click_element(cx.page, SUBMIT_SELECTOR).await
            }
        }
    }
}
