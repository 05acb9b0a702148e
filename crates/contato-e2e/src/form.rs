//! Contact-form schema: the four fields and the submit control, addressed
//! by the stable identities the page guarantees.
//!
//! Field lookup is id-based (`#nome`, `#email`, `#assunto`, `#mensagem`);
//! the submit control is class-based (`.submit-button`). The visible labels
//! are what the AI instruction grammar refers to.

use serde::{Deserialize, Serialize};

/// CSS selector of the form's submit control
pub const SUBMIT_SELECTOR: &str = ".submit-button";

/// Visible label of the submit control
pub const SUBMIT_LABEL: &str = "Enviar";

/// A form field, by stable identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Full name (required)
    Name,
    /// Email address (required)
    Email,
    /// Subject line
    Subject,
    /// Message body
    Message,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// DOM id of the field's input element
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Email => "email",
            Self::Subject => "assunto",
            Self::Message => "mensagem",
        }
    }

    /// CSS selector for the field's input element
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Name => "#nome",
            Self::Email => "#email",
            Self::Subject => "#assunto",
            Self::Message => "#mensagem",
        }
    }

    /// Visible label the page renders next to the field
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome Completo",
            Self::Email => "Seu Melhor Email",
            Self::Subject => "Assunto",
            Self::Message => "Mensagem",
        }
    }

    /// Key the field is submitted under in the request payload
    #[must_use]
    pub const fn payload_key(&self) -> &'static str {
        self.id()
    }

    /// Resolve a field from its visible label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One set of values for the contact form, generated per test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

impl FormFields {
    /// Create a field set from explicit values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// A field set with every value empty (the negative scenario input)
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", "", "", "")
    }

    /// Value for a given field
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// (field, value) pairs in form order
    #[must_use]
    pub fn as_pairs(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.value(field)))
            .collect()
    }

    /// Whether every value is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_field_tests {
        use super::*;

        #[test]
        fn test_ids_and_selectors() {
            assert_eq!(FormField::Name.id(), "nome");
            assert_eq!(FormField::Email.id(), "email");
            assert_eq!(FormField::Subject.id(), "assunto");
            assert_eq!(FormField::Message.id(), "mensagem");
            for field in FormField::ALL {
                assert_eq!(field.selector(), format!("#{}", field.id()));
            }
        }

        #[test]
        fn test_payload_keys_match_ids() {
            for field in FormField::ALL {
                assert_eq!(field.payload_key(), field.id());
            }
        }

        #[test]
        fn test_from_label() {
            assert_eq!(FormField::from_label("Nome Completo"), Some(FormField::Name));
            assert_eq!(
                FormField::from_label("Seu Melhor Email"),
                Some(FormField::Email)
            );
            assert_eq!(FormField::from_label("Assunto"), Some(FormField::Subject));
            assert_eq!(FormField::from_label("Mensagem"), Some(FormField::Message));
            assert_eq!(FormField::from_label("Nome"), None);
        }

        #[test]
        fn test_display() {
            assert_eq!(FormField::Name.to_string(), "nome");
        }
    }

    mod form_fields_tests {
        use super::*;

        #[test]
        fn test_value_lookup() {
            let fields = FormFields::new("Maria Silva", "maria@example.com", "Teste", "Olá");
            assert_eq!(fields.value(FormField::Name), "Maria Silva");
            assert_eq!(fields.value(FormField::Email), "maria@example.com");
            assert_eq!(fields.value(FormField::Subject), "Teste");
            assert_eq!(fields.value(FormField::Message), "Olá");
        }

        #[test]
        fn test_as_pairs_in_form_order() {
            let fields = FormFields::new("a", "b", "c", "d");
            let pairs = fields.as_pairs();
            assert_eq!(pairs.len(), 4);
            assert_eq!(pairs[0], (FormField::Name, "a"));
            assert_eq!(pairs[3], (FormField::Message, "d"));
        }

        #[test]
        fn test_empty() {
            let fields = FormFields::empty();
            assert!(fields.is_empty());
            let filled = FormFields::new("x", "", "", "");
            assert!(!filled.is_empty());
        }

        #[test]
        fn test_serde_round_trip() {
            let fields = FormFields::new("Maria Silva", "maria@example.com", "Teste", "Olá");
            let json = serde_json::to_string(&fields).unwrap();
            let parsed: FormFields = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, fields);
        }
    }
}
