//! Random test data for the contact form.
//!
//! Produces syntactically plausible values; scenarios always assert against
//! the values actually generated for the run, never against literals.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::form::FormFields;

const FIRST_NAMES: &[&str] = &[
    "Maria", "Joao", "Ana", "Carlos", "Beatriz", "Rafael", "Camila", "Lucas", "Fernanda",
    "Gabriel", "Juliana", "Pedro", "Larissa", "Gustavo", "Patricia", "Bruno",
];

const SURNAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Almeida", "Ferreira", "Rodrigues",
    "Gomes", "Martins", "Barbosa",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

const WORDS: &[&str] = &[
    "pedido", "produto", "entrega", "suporte", "garantia", "troca", "pagamento", "cadastro",
    "promocao", "estoque", "loja", "atendimento", "prazo", "frete", "nota", "fatura", "desconto",
    "cupom", "devolucao", "orcamento",
];

/// Random full name ("First Surname")
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Maria");
    let last = SURNAMES.choose(rng).copied().unwrap_or("Silva");
    format!("{first} {last}")
}

/// Random email derived from a name
pub fn email_for<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let local: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .to_ascii_lowercase()
        .replace(' ', ".");
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let suffix: u16 = rng.gen_range(1..=999);
    format!("{local}{suffix}@{domain}")
}

/// Random sentence of `words` words, capitalized
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let mut out = String::new();
    for i in 0..words.max(1) {
        let word = WORDS.choose(rng).copied().unwrap_or("pedido");
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out
}

/// Random paragraph of 2..=4 sentences
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(2..=4);
    let mut out = String::new();
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        let words = rng.gen_range(4..=9);
        out.push_str(&sentence(rng, words));
        out.push('.');
    }
    out
}

impl FormFields {
    /// Generate a plausible random field set
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate from a caller-supplied RNG (seedable in tests)
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = full_name(rng);
        let email = email_for(rng, &name);
        let subject = sentence(rng, 5);
        let message = paragraph(rng);
        Self::new(name, email, subject, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = full_name(&mut rng);
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let email = email_for(&mut rng, "Maria Silva");
        assert!(email.starts_with("maria.silva"));
        let (local, domain) = email.split_once('@').unwrap();
        assert!(!local.is_empty());
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_sentence_word_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = sentence(&mut rng, 5);
        assert_eq!(s.split(' ').count(), 5);
        assert!(s.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn test_paragraph_ends_with_period() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = paragraph(&mut rng);
        assert!(p.ends_with('.'));
        assert!(p.len() > 20);
    }

    #[test]
    fn test_generate_is_plausible() {
        let mut rng = StdRng::seed_from_u64(99);
        let fields = FormFields::generate_with(&mut rng);
        assert!(fields.name.contains(' '));
        assert!(fields.email.contains('@'));
        assert!(!fields.subject.is_empty());
        assert!(!fields.message.is_empty());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = FormFields::generate_with(&mut StdRng::seed_from_u64(5));
        let b = FormFields::generate_with(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = FormFields::generate_with(&mut StdRng::seed_from_u64(1));
        let b = FormFields::generate_with(&mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }
}
