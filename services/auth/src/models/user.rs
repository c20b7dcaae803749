//! Registration and login payloads

use common::{
    users::Profile,
    validation::{parse_date, require_fields, validate_email, validate_password},
};
use serde::{Deserialize, Serialize};

/// Registration form
///
/// Missing keys deserialize as empty strings so they are reported as
/// missing fields rather than as malformed JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub nome: String,
    pub data_nascimento: String,
    pub profissao: String,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub cpf: String,
    pub estado_civil: String,
    pub tamanho_camiseta: String,
    pub password: String,
    pub password2: String,
}

impl RegisterRequest {
    /// Validate the form and extract the profile attributes
    ///
    /// Checks run in order: required fields, email format, password rules.
    pub fn validate(&self) -> Result<Profile, String> {
        require_fields(&[
            ("email", self.email.as_str()),
            ("nome", self.nome.as_str()),
            ("dataNascimento", self.data_nascimento.as_str()),
            ("profissao", self.profissao.as_str()),
            ("telefoneContato", self.telefone_contato.as_str()),
            ("contatoEmergencia", self.contato_emergencia.as_str()),
            ("telefoneContatoEmergencia", self.telefone_contato_emergencia.as_str()),
            ("cpf", self.cpf.as_str()),
            ("estadoCivil", self.estado_civil.as_str()),
            ("tamanhoCamiseta", self.tamanho_camiseta.as_str()),
            ("password", self.password.as_str()),
            ("password2", self.password2.as_str()),
        ])?;
        validate_email(&self.email)?;
        validate_password(&self.password, &self.password2)?;

        Ok(Profile {
            nome: self.nome.trim().to_string(),
            data_nascimento: parse_date("dataNascimento", self.data_nascimento.as_str())?,
            profissao: self.profissao.trim().to_string(),
            telefone_contato: self.telefone_contato.trim().to_string(),
            contato_emergencia: self.contato_emergencia.trim().to_string(),
            telefone_contato_emergencia: self.telefone_contato_emergencia.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            estado_civil: self.estado_civil.trim().to_string(),
            tamanho_camiseta: self.tamanho_camiseta.trim().to_string(),
        })
    }
}

/// Request for user login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub session: String,
}
