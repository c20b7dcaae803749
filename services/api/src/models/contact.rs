//! Public contact form

use common::validation::{require_fields, validate_email};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub email: String,
    pub nome: String,
    pub celular: String,
    pub cidade: String,
    pub mensagem: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), String> {
        require_fields(&[
            ("email", self.email.as_str()),
            ("nome", self.nome.as_str()),
            ("celular", self.celular.as_str()),
            ("cidade", self.cidade.as_str()),
            ("mensagem", self.mensagem.as_str()),
        ])?;
        validate_email(self.email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation() {
        let form = ContactForm {
            email: "ana@example.com".to_string(),
            nome: "Ana".to_string(),
            celular: "44999990000".to_string(),
            cidade: "Maringá".to_string(),
            mensagem: "Quero participar".to_string(),
        };
        assert!(form.validate().is_ok());

        let no_message = ContactForm {
            mensagem: "   ".to_string(),
            ..form.clone()
        };
        assert_eq!(no_message.validate(), Err("missing required fields".to_string()));

        let bad_email = ContactForm {
            email: "ana@".to_string(),
            ..form
        };
        assert_eq!(bad_email.validate(), Err("invalid email".to_string()));
    }
}
