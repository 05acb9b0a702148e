//! Natural-language instruction grammar for the AI action layer.
//!
//! Instructions are rendered in the same Portuguese phrasing the page's
//! labels use, one instruction per field fill plus one for the submit
//! click. The parser is the inverse used by the scripted reference
//! executor; the external AI executor is free to interpret instructions
//! however it wants.

use regex::Regex;

use crate::form::{FormField, SUBMIT_LABEL};

/// Render the fill instruction for one field
#[must_use]
pub fn fill_instruction(field: FormField, value: &str) -> String {
    format!("Preencha o campo \"{}\" com \"{}\"", field.label(), value)
}

/// Render the submit-click instruction
#[must_use]
pub fn submit_instruction() -> String {
    format!("Clique no botão \"{SUBMIT_LABEL}\"")
}

/// An instruction recovered from its rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInstruction {
    /// Fill a field with a value
    Fill {
        /// Target field
        field: FormField,
        /// Value to write
        value: String,
    },
    /// Click a button by its visible label
    Click {
        /// Button label
        label: String,
    },
}

/// Parser for the instruction grammar
#[derive(Debug)]
pub struct InstructionParser {
    fill: Regex,
    click: Regex,
}

impl Default for InstructionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionParser {
    /// Build the parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            fill: Regex::new(r#"^Preencha o campo "(?P<label>[^"]+)" com "(?P<value>[^"]*)"$"#)
                .expect("fill grammar regex"),
            click: Regex::new(r#"^Clique no botão "(?P<label>[^"]+)"$"#)
                .expect("click grammar regex"),
        }
    }

    /// Parse a rendered instruction. Returns `None` when the instruction
    /// does not belong to the grammar or names an unknown field.
    #[must_use]
    pub fn parse(&self, instruction: &str) -> Option<ParsedInstruction> {
        if let Some(caps) = self.fill.captures(instruction) {
            let field = FormField::from_label(&caps["label"])?;
            return Some(ParsedInstruction::Fill {
                field,
                value: caps["value"].to_string(),
            });
        }
        if let Some(caps) = self.click.captures(instruction) {
            return Some(ParsedInstruction::Click {
                label: caps["label"].to_string(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_instruction_rendering() {
        assert_eq!(
            fill_instruction(FormField::Name, "Maria Silva"),
            "Preencha o campo \"Nome Completo\" com \"Maria Silva\""
        );
        assert_eq!(
            fill_instruction(FormField::Email, "maria@example.com"),
            "Preencha o campo \"Seu Melhor Email\" com \"maria@example.com\""
        );
    }

    #[test]
    fn test_submit_instruction_rendering() {
        assert_eq!(submit_instruction(), "Clique no botão \"Enviar\"");
    }

    #[test]
    fn test_parse_fill_round_trip() {
        let parser = InstructionParser::new();
        for field in FormField::ALL {
            let rendered = fill_instruction(field, "algum valor");
            let parsed = parser.parse(&rendered).unwrap();
            assert_eq!(
                parsed,
                ParsedInstruction::Fill {
                    field,
                    value: "algum valor".to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_empty_value() {
        let parser = InstructionParser::new();
        let parsed = parser.parse(&fill_instruction(FormField::Subject, "")).unwrap();
        assert_eq!(
            parsed,
            ParsedInstruction::Fill {
                field: FormField::Subject,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_click_round_trip() {
        let parser = InstructionParser::new();
        let parsed = parser.parse(&submit_instruction()).unwrap();
        assert_eq!(
            parsed,
            ParsedInstruction::Click {
                label: "Enviar".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_grammar() {
        let parser = InstructionParser::new();
        assert!(parser.parse("Feche a página").is_none());
        assert!(parser
            .parse("Preencha o campo \"Telefone\" com \"123\"")
            .is_none());
    }
}
