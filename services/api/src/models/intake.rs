//! Camp intake forms and their stored records
//!
//! Each campaign has a fixed schema. The form is both the request payload
//! and the column set of the campaign table; the stored record adds the
//! generated identifier and timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use common::validation::{non_blank, require_fields, validate_email};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{flexible_date, tidy};

const RESPONSIBILITY_REQUIRED: &str = "É necessário aceitar o termo de responsabilidade";

/// Camper waitlist, Carnaval 2025
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistForm {
    pub email: String,
    pub nome_completo: String,
    #[serde(deserialize_with = "flexible_date")]
    pub data_nascimento: NaiveDate,
    pub estado_civil: String,
    pub profissao: String,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub portador_doenca: bool,
    #[serde(default)]
    pub doencas: Option<String>,
    pub alergias: bool,
    #[serde(default)]
    pub alergias_detalhe: Option<String>,
    pub medicacao: bool,
    #[serde(default)]
    pub medicamentos: Option<String>,
    pub plano_saude: bool,
    #[serde(default)]
    pub operadora_plano: Option<String>,
    #[serde(default)]
    pub numero_inscricao_plano: Option<String>,
    pub cpf: String,
    pub tamanho_camiseta: String,
}

impl WaitlistForm {
    pub fn validate(mut self) -> Result<Self, String> {
        for field in [
            &mut self.email,
            &mut self.nome_completo,
            &mut self.estado_civil,
            &mut self.profissao,
            &mut self.telefone_contato,
            &mut self.contato_emergencia,
            &mut self.telefone_contato_emergencia,
            &mut self.cpf,
            &mut self.tamanho_camiseta,
        ] {
            tidy(field);
        }

        require_fields(&[
            ("email", self.email.as_str()),
            ("nomeCompleto", self.nome_completo.as_str()),
            ("estadoCivil", self.estado_civil.as_str()),
            ("profissao", self.profissao.as_str()),
            ("telefoneContato", self.telefone_contato.as_str()),
            ("contatoEmergencia", self.contato_emergencia.as_str()),
            ("telefoneContatoEmergencia", self.telefone_contato_emergencia.as_str()),
            ("cpf", self.cpf.as_str()),
            ("tamanhoCamiseta", self.tamanho_camiseta.as_str()),
        ])?;
        validate_email(&self.email)?;

        Ok(Self {
            doencas: non_blank(self.doencas),
            alergias_detalhe: non_blank(self.alergias_detalhe),
            medicamentos: non_blank(self.medicamentos),
            operadora_plano: non_blank(self.operadora_plano),
            numero_inscricao_plano: non_blank(self.numero_inscricao_plano),
            ..self
        })
    }
}

/// Stored waitlist entry
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub ficha: WaitlistForm,
    pub created_at: DateTime<Utc>,
}

/// Staff volunteer ("servo"), Carnaval 2025
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerForm {
    pub email: String,
    /// Payment receipt reference
    pub comprovante: String,
    pub nome_completo: String,
    #[serde(deserialize_with = "flexible_date")]
    pub data_nascimento: NaiveDate,
    pub telefone_contato: String,
    pub contato_emergencia: String,
    pub telefone_contato_emergencia: String,
    pub rg: String,
    pub cpf: String,
    pub paroquia: String,
    /// Someone the volunteer knows in the project
    #[serde(default)]
    pub conhecido: Option<String>,
    pub portador_doenca: bool,
    #[serde(default)]
    pub doencas: Option<String>,
    #[serde(rename = "aptidoAtividades", alias = "aptoAtividades")]
    pub apto_atividades: bool,
    pub alergias: bool,
    #[serde(default)]
    pub alergias_detalhe: Option<String>,
    pub medicacao: bool,
    #[serde(default)]
    pub medicamentos: Option<String>,
    pub restricao_alimentar: bool,
    #[serde(default)]
    pub restricao_alimentar_detalhe: Option<String>,
    pub plano_saude: bool,
    #[serde(default)]
    pub operadora_plano: Option<String>,
    #[serde(default)]
    pub numero_inscricao_plano: Option<String>,
    pub responsabilidade: bool,
    pub autorizacao_imagem: bool,
}

impl VolunteerForm {
    pub fn validate(mut self) -> Result<Self, String> {
        for field in [
            &mut self.email,
            &mut self.comprovante,
            &mut self.nome_completo,
            &mut self.telefone_contato,
            &mut self.contato_emergencia,
            &mut self.telefone_contato_emergencia,
            &mut self.rg,
            &mut self.cpf,
            &mut self.paroquia,
        ] {
            tidy(field);
        }

        require_fields(&[
            ("email", self.email.as_str()),
            ("comprovante", self.comprovante.as_str()),
            ("nomeCompleto", self.nome_completo.as_str()),
            ("telefoneContato", self.telefone_contato.as_str()),
            ("contatoEmergencia", self.contato_emergencia.as_str()),
            ("telefoneContatoEmergencia", self.telefone_contato_emergencia.as_str()),
            ("rg", self.rg.as_str()),
            ("cpf", self.cpf.as_str()),
            ("paroquia", self.paroquia.as_str()),
        ])?;
        validate_email(&self.email)?;
        if !self.responsabilidade {
            return Err(RESPONSIBILITY_REQUIRED.to_string());
        }

        Ok(Self {
            conhecido: non_blank(self.conhecido),
            doencas: non_blank(self.doencas),
            alergias_detalhe: non_blank(self.alergias_detalhe),
            medicamentos: non_blank(self.medicamentos),
            restricao_alimentar_detalhe: non_blank(self.restricao_alimentar_detalhe),
            operadora_plano: non_blank(self.operadora_plano),
            numero_inscricao_plano: non_blank(self.numero_inscricao_plano),
            ..self
        })
    }
}

/// Stored volunteer registration
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEntry {
    pub id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub ficha: VolunteerForm,
    pub created_at: DateTime<Utc>,
}

/// Camper registration, Corpus Christi 2025
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CorpusChristiForm {
    pub nome: String,
    pub email: String,
    pub comprovante_url: String,
    pub cpf: String,
    #[serde(deserialize_with = "flexible_date")]
    pub nascimento: NaiveDate,
    pub estado_civil: String,
    pub camiseta: String,
    pub profissao: String,
    pub telefone: String,
    pub contato_emergencia: String,
    pub telefone_emergencia: String,
    pub cidade: String,
    pub doenca: bool,
    #[serde(default)]
    pub especificar_doenca: Option<String>,
    pub apto_atividades: bool,
    pub alergia: bool,
    #[serde(default)]
    pub especificar_alergia: Option<String>,
    pub medicacao_continua: bool,
    #[serde(default)]
    pub quais_medicamentos: Option<String>,
    pub restricao_alimentar: bool,
    #[serde(default)]
    pub especificar_restricao: Option<String>,
    pub plano_saude: bool,
    #[serde(default)]
    pub operadora_plano: Option<String>,
    #[serde(default)]
    pub numero_plano: Option<String>,
    pub responsabilidade: bool,
    pub autorizo: bool,
}

impl CorpusChristiForm {
    pub fn validate(mut self) -> Result<Self, String> {
        for field in [
            &mut self.nome,
            &mut self.email,
            &mut self.comprovante_url,
            &mut self.cpf,
            &mut self.estado_civil,
            &mut self.camiseta,
            &mut self.profissao,
            &mut self.telefone,
            &mut self.contato_emergencia,
            &mut self.telefone_emergencia,
            &mut self.cidade,
        ] {
            tidy(field);
        }

        require_fields(&[
            ("nome", self.nome.as_str()),
            ("email", self.email.as_str()),
            ("comprovanteUrl", self.comprovante_url.as_str()),
            ("cpf", self.cpf.as_str()),
            ("estadoCivil", self.estado_civil.as_str()),
            ("camiseta", self.camiseta.as_str()),
            ("profissao", self.profissao.as_str()),
            ("telefone", self.telefone.as_str()),
            ("contatoEmergencia", self.contato_emergencia.as_str()),
            ("telefoneEmergencia", self.telefone_emergencia.as_str()),
            ("cidade", self.cidade.as_str()),
        ])?;
        validate_email(&self.email)?;
        if !self.responsabilidade {
            return Err(RESPONSIBILITY_REQUIRED.to_string());
        }

        Ok(Self {
            especificar_doenca: non_blank(self.especificar_doenca),
            especificar_alergia: non_blank(self.especificar_alergia),
            quais_medicamentos: non_blank(self.quais_medicamentos),
            especificar_restricao: non_blank(self.especificar_restricao),
            operadora_plano: non_blank(self.operadora_plano),
            numero_plano: non_blank(self.numero_plano),
            ..self
        })
    }
}

/// Stored Corpus Christi registration
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CorpusChristiEntry {
    pub id: Uuid,
    /// Inactive registrations stay listed but get no roster number
    pub ativo: bool,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub ficha: CorpusChristiForm,
    pub created_at: DateTime<Utc>,
}

/// Roster line: a registration and its position among active campers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(flatten)]
    pub campista: CorpusChristiEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_inscricao: Option<u32>,
}

/// Query of the roster listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterQuery {
    pub refresh: bool,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_waitlist_form_validates() {
        let form: WaitlistForm = serde_json::from_value(waitlist_json()).unwrap();
        let form = form.validate().unwrap();
        assert_eq!(form.nome_completo, "Ana Souza");
        assert_eq!(form.alergias_detalhe.as_deref(), Some("Dipirona"));
        assert_eq!(form.doencas, None);
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut payload = waitlist_json();
        payload["cpf"] = json!("  ");
        let form: WaitlistForm = serde_json::from_value(payload).unwrap();
        assert_eq!(form.validate().unwrap_err(), "missing required fields");
    }

    #[test]
    fn test_absent_required_field_fails_to_parse() {
        let mut payload = waitlist_json();
        payload.as_object_mut().unwrap().remove("tamanhoCamiseta");
        assert!(serde_json::from_value::<WaitlistForm>(payload).is_err());
    }

    #[test]
    fn test_volunteer_accepts_both_aptitude_spellings() {
        let form: VolunteerForm = serde_json::from_value(volunteer_json()).unwrap();
        assert!(form.apto_atividades);

        let mut payload = volunteer_json();
        let object = payload.as_object_mut().unwrap();
        object.remove("aptidoAtividades");
        object.insert("aptoAtividades".to_string(), json!(false));
        let form: VolunteerForm = serde_json::from_value(payload).unwrap();
        assert!(!form.apto_atividades);
    }

    #[test]
    fn test_volunteer_must_accept_responsibility() {
        let mut payload = volunteer_json();
        payload["responsabilidade"] = json!(false);
        let form: VolunteerForm = serde_json::from_value(payload).unwrap();
        assert_eq!(form.validate().unwrap_err(), RESPONSIBILITY_REQUIRED);
    }

    #[test]
    fn test_volunteer_blank_acquaintance_is_null() {
        let form: VolunteerForm = serde_json::from_value(volunteer_json()).unwrap();
        let form = form.validate().unwrap();
        assert_eq!(form.conhecido, None);
        assert_eq!(
            form.data_nascimento,
            NaiveDate::from_ymd_opt(1995, 5, 10).unwrap()
        );
    }

    #[test]
    fn test_corpus_christi_invalid_email() {
        let mut payload = corpus_christi_json();
        payload["email"] = json!("clara");
        let form: CorpusChristiForm = serde_json::from_value(payload).unwrap();
        assert_eq!(form.validate().unwrap_err(), "invalid email");
    }

    #[test]
    fn test_corpus_christi_entry_round_trips_through_cache_format() {
        let entry = corpus_christi_entry(true, Utc::now());
        let cached = serde_json::to_string(&entry).unwrap();
        let restored: CorpusChristiEntry = serde_json::from_str(&cached).unwrap();

        assert_eq!(restored.id, entry.id);
        assert_eq!(restored.ficha.nascimento, entry.ficha.nascimento);
        assert!(cached.contains("\"comprovanteUrl\""));
    }
}
