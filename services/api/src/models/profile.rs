//! Profile update form

use common::{
    users::{Profile, ProfileUpdate},
    validation::{min_length, parse_date, validate_email},
};
use serde::Deserialize;

/// Profile form; keys match the stored column names
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub estado_civil: String,
    pub profissao: String,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub tamanho_camiseta: String,
}

fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, String> {
        required(&self.nome, "Nome é obrigatório")?;
        validate_email(self.email.trim()).map_err(|_| "Email inválido".to_string())?;
        min_length("cpf", &self.cpf, 11).map_err(|_| "CPF inválido".to_string())?;
        required(&self.data_nascimento, "Data de nascimento é obrigatória")?;
        required(&self.estado_civil, "Estado civil é obrigatório")?;
        required(&self.profissao, "Profissão é obrigatória")?;
        min_length("telefone_contato", &self.telefone_contato, 11)
            .map_err(|_| "Telefone inválido".to_string())?;
        required(&self.contato_emergencia, "Contato de emergência é obrigatório")?;
        min_length(
            "telefone_contato_emergencia",
            &self.telefone_contato_emergencia,
            11,
        )
        .map_err(|_| "Telefone de emergência inválido".to_string())?;
        required(&self.tamanho_camiseta, "Tamanho da camiseta é obrigatório")?;

        Ok(ProfileUpdate {
            email: self.email.trim().to_string(),
            profile: Profile {
                nome: self.nome.trim().to_string(),
                data_nascimento: parse_date("data_nascimento", &self.data_nascimento)?,
                profissao: self.profissao.trim().to_string(),
                telefone_contato: self.telefone_contato.trim().to_string(),
                contato_emergencia: self.contato_emergencia.trim().to_string(),
                telefone_contato_emergencia: self.telefone_contato_emergencia.trim().to_string(),
                cpf: self.cpf.trim().to_string(),
                estado_civil: self.estado_civil.trim().to_string(),
                tamanho_camiseta: self.tamanho_camiseta.trim().to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> ProfileForm {
        ProfileForm {
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            cpf: "12345678901".to_string(),
            data_nascimento: "2000-01-01T00:00:00.000Z".to_string(),
            estado_civil: "Solteira".to_string(),
            profissao: "Enfermeira".to_string(),
            telefone_contato: "44999990000".to_string(),
            contato_emergencia: "Maria".to_string(),
            telefone_contato_emergencia: "44999991111".to_string(),
            tamanho_camiseta: "M".to_string(),
        }
    }

    #[test]
    fn test_valid_profile() {
        let update = form().validate().unwrap();
        assert_eq!(update.email, "ana@example.com");
        assert_eq!(
            update.profile.data_nascimento,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_field_messages() {
        let short_cpf = ProfileForm {
            cpf: "123".to_string(),
            ..form()
        };
        assert_eq!(short_cpf.validate().unwrap_err(), "CPF inválido");

        let bad_email = ProfileForm {
            email: "ana".to_string(),
            ..form()
        };
        assert_eq!(bad_email.validate().unwrap_err(), "Email inválido");

        let short_phone = ProfileForm {
            telefone_contato: "4499".to_string(),
            ..form()
        };
        assert_eq!(short_phone.validate().unwrap_err(), "Telefone inválido");

        let no_size = ProfileForm {
            tamanho_camiseta: String::new(),
            ..form()
        };
        assert_eq!(no_size.validate().unwrap_err(), "Tamanho da camiseta é obrigatório");
    }
}
