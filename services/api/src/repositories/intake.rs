//! Camp intake repository

use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;

use crate::models::intake::{
    CorpusChristiEntry, CorpusChristiForm, VolunteerEntry, VolunteerForm, WaitlistEntry,
    WaitlistForm,
};

const WAITLIST_TABLE: &str = "acampa1_campista_ficha_espera_carnaval2025";
const VOLUNTEER_TABLE: &str = "acampa1_servos_carnaval2025";
const CORPUS_CHRISTI_TABLE: &str = "acampa1_campista_corpus_christi2025";

const CORPUS_CHRISTI_COLUMNS: &str = "id, ativo, nome, email, comprovante_url, cpf, nascimento, \
     estado_civil, camiseta, profissao, telefone, contato_emergencia, telefone_emergencia, cidade, \
     doenca, especificar_doenca, apto_atividades, alergia, especificar_alergia, \
     medicacao_continua, quais_medicamentos, restricao_alimentar, especificar_restricao, \
     plano_saude, operadora_plano, numero_plano, responsabilidade, autorizo, created_at";

/// Intake repository for database operations
#[derive(Clone)]
pub struct IntakeRepository {
    pool: PgPool,
}

impl IntakeRepository {
    /// Create a new intake repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a camper waitlist entry
    pub async fn insert_waitlist(&self, form: &WaitlistForm) -> DatabaseResult<WaitlistEntry> {
        let entry = sqlx::query_as::<_, WaitlistEntry>(&format!(
            r#"
            INSERT INTO {WAITLIST_TABLE} (email, nome_completo, data_nascimento, estado_civil,
                profissao, telefone_contato, contato_emergencia, telefone_contato_emergencia,
                portador_doenca, doencas, alergias, alergias_detalhe, medicacao, medicamentos,
                plano_saude, operadora_plano, numero_inscricao_plano, cpf, tamanho_camiseta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#
        ))
        .bind(&form.email)
        .bind(&form.nome_completo)
        .bind(form.data_nascimento)
        .bind(&form.estado_civil)
        .bind(&form.profissao)
        .bind(&form.telefone_contato)
        .bind(&form.contato_emergencia)
        .bind(&form.telefone_contato_emergencia)
        .bind(form.portador_doenca)
        .bind(&form.doencas)
        .bind(form.alergias)
        .bind(&form.alergias_detalhe)
        .bind(form.medicacao)
        .bind(&form.medicamentos)
        .bind(form.plano_saude)
        .bind(&form.operadora_plano)
        .bind(&form.numero_inscricao_plano)
        .bind(&form.cpf)
        .bind(&form.tamanho_camiseta)
        .fetch_one(&self.pool)
        .await?;

        info!(id = %entry.id, "Stored waitlist entry");
        Ok(entry)
    }

    /// Store a volunteer registration
    pub async fn insert_volunteer(&self, form: &VolunteerForm) -> DatabaseResult<VolunteerEntry> {
        let entry = sqlx::query_as::<_, VolunteerEntry>(&format!(
            r#"
            INSERT INTO {VOLUNTEER_TABLE} (email, comprovante, nome_completo, data_nascimento,
                telefone_contato, contato_emergencia, telefone_contato_emergencia, rg, cpf,
                paroquia, conhecido, portador_doenca, doencas, apto_atividades, alergias,
                alergias_detalhe, medicacao, medicamentos, restricao_alimentar,
                restricao_alimentar_detalhe, plano_saude, operadora_plano,
                numero_inscricao_plano, responsabilidade, autorizacao_imagem)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19, $20, $21, $22, $23, $24, $25)
            RETURNING *
            "#
        ))
        .bind(&form.email)
        .bind(&form.comprovante)
        .bind(&form.nome_completo)
        .bind(form.data_nascimento)
        .bind(&form.telefone_contato)
        .bind(&form.contato_emergencia)
        .bind(&form.telefone_contato_emergencia)
        .bind(&form.rg)
        .bind(&form.cpf)
        .bind(&form.paroquia)
        .bind(&form.conhecido)
        .bind(form.portador_doenca)
        .bind(&form.doencas)
        .bind(form.apto_atividades)
        .bind(form.alergias)
        .bind(&form.alergias_detalhe)
        .bind(form.medicacao)
        .bind(&form.medicamentos)
        .bind(form.restricao_alimentar)
        .bind(&form.restricao_alimentar_detalhe)
        .bind(form.plano_saude)
        .bind(&form.operadora_plano)
        .bind(&form.numero_inscricao_plano)
        .bind(form.responsabilidade)
        .bind(form.autorizacao_imagem)
        .fetch_one(&self.pool)
        .await?;

        info!(id = %entry.id, "Stored volunteer registration");
        Ok(entry)
    }

    /// Store a Corpus Christi camper registration
    pub async fn insert_corpus_christi(
        &self,
        form: &CorpusChristiForm,
    ) -> DatabaseResult<CorpusChristiEntry> {
        let entry = sqlx::query_as::<_, CorpusChristiEntry>(&format!(
            r#"
            INSERT INTO {CORPUS_CHRISTI_TABLE} (nome, email, comprovante_url, cpf, nascimento,
                estado_civil, camiseta, profissao, telefone, contato_emergencia,
                telefone_emergencia, cidade, doenca, especificar_doenca, apto_atividades, alergia,
                especificar_alergia, medicacao_continua, quais_medicamentos, restricao_alimentar,
                especificar_restricao, plano_saude, operadora_plano, numero_plano,
                responsabilidade, autorizo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19, $20, $21, $22, $23, $24, $25, $26)
            RETURNING {CORPUS_CHRISTI_COLUMNS}
            "#
        ))
        .bind(&form.nome)
        .bind(&form.email)
        .bind(&form.comprovante_url)
        .bind(&form.cpf)
        .bind(form.nascimento)
        .bind(&form.estado_civil)
        .bind(&form.camiseta)
        .bind(&form.profissao)
        .bind(&form.telefone)
        .bind(&form.contato_emergencia)
        .bind(&form.telefone_emergencia)
        .bind(&form.cidade)
        .bind(form.doenca)
        .bind(&form.especificar_doenca)
        .bind(form.apto_atividades)
        .bind(form.alergia)
        .bind(&form.especificar_alergia)
        .bind(form.medicacao_continua)
        .bind(&form.quais_medicamentos)
        .bind(form.restricao_alimentar)
        .bind(&form.especificar_restricao)
        .bind(form.plano_saude)
        .bind(&form.operadora_plano)
        .bind(&form.numero_plano)
        .bind(form.responsabilidade)
        .bind(form.autorizo)
        .fetch_one(&self.pool)
        .await?;

        info!(id = %entry.id, "Stored Corpus Christi registration");
        Ok(entry)
    }

    /// All Corpus Christi registrations, oldest first
    pub async fn list_corpus_christi(&self) -> DatabaseResult<Vec<CorpusChristiEntry>> {
        let entries = sqlx::query_as::<_, CorpusChristiEntry>(&format!(
            "SELECT {CORPUS_CHRISTI_COLUMNS} FROM {CORPUS_CHRISTI_TABLE} ORDER BY created_at ASC, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
