//! Plain-text email templates
//!
//! Staff notifications list every submitted field; confirmations greet the
//! submitter and repeat the essentials. All timestamps are pre-formatted by
//! the caller in the configured offset.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    models::{
        contact::ContactForm,
        intake::{CorpusChristiForm, VolunteerForm, WaitlistForm},
    },
    timezone::format_date_br,
};

const SIGNATURE: &str = "Atenciosamente,\nEquipe Projeto Mais Vida";
const RULE: &str = "---------------------------------------------------------";
const WHATSAPP_CONTACT: &str = "Caso tenha alguma dúvida entre em contato com a Renata pelo \
     WhatsApp do Projeto Mais Vida 44 99137-2331.";

const CARNAVAL_SCHEDULE: &str = "Datas importantes\n\
     - Início: 01 de março de 2025 (sábado)\n\
     - Retorno: 04 de março de 2025 (terça-feira)\n\
     - Local de saída: estacionamento dos fundos da Catedral";

const PACKING_LIST: &str = "Materiais necessários\n\
     - Bíblia Sagrada\n\
     - Lanterna\n\
     - Repelente\n\
     - Protetor solar\n\
     - Materiais de higiene pessoal\n\
     - Roupa de cama, travesseiro e cobertor\n\
     - Capa de chuva\n\
     - Garrafinha d'água\n\
     - Boné\n\
     - Sacos plásticos\n\
     - Sapatos confortáveis e fechados\n\
     - Roupas de frio e roupas discretas\n\
     - Roupas de guerra (para atividades intensas)\n\
     - Protetor auricular";

/// A rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Labelled field lines
#[derive(Default)]
struct Details {
    lines: Vec<String>,
}

impl Details {
    fn text(mut self, label: &str, value: &str) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    fn optional(self, label: &str, value: &Option<String>) -> Self {
        self.text(label, value.as_deref().unwrap_or("-"))
    }

    fn flag(self, label: &str, value: bool) -> Self {
        self.text(label, if value { "Sim" } else { "Não" })
    }

    fn date(self, label: &str, value: NaiveDate) -> Self {
        self.text(label, &format_date_br(value))
    }

    fn render(&self) -> String {
        self.lines.join("\n")
    }
}

fn staff_body(intro: &str, details: Details, stamp_label: &str, submitted_at: &str) -> String {
    format!(
        "{intro}\n\n{RULE}\n{}\n{RULE}\n\n{stamp_label}: {submitted_at}\n\n{SIGNATURE}",
        details.render()
    )
}

/// Staff notification for a camper waitlist entry
pub fn waitlist_staff(id: Uuid, form: &WaitlistForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("ID do pedido", &id.to_string())
        .text("Nome", &form.nome_completo)
        .text("Telefone de contato", &form.telefone_contato)
        .text("E-mail", &form.email)
        .text("CPF", &form.cpf)
        .date("Data de nascimento", form.data_nascimento)
        .text("Estado civil", &form.estado_civil)
        .text("Camiseta", &form.tamanho_camiseta)
        .text("Profissão", &form.profissao)
        .text("Contato de emergência", &form.contato_emergencia)
        .text("Telefone de emergência", &form.telefone_contato_emergencia)
        .flag("Portador de doença", form.portador_doenca)
        .optional("Doenças", &form.doencas)
        .flag("Alergias", form.alergias)
        .optional("Detalhes de alergias", &form.alergias_detalhe)
        .flag("Medicação", form.medicacao)
        .optional("Medicamentos", &form.medicamentos)
        .flag("Plano de saúde", form.plano_saude)
        .optional("Operadora do plano", &form.operadora_plano)
        .optional("Número de inscrição do plano", &form.numero_inscricao_plano);

    EmailContent {
        subject: format!("Nova inscrição na ficha de espera de campista {}", id),
        body: staff_body(
            &format!(
                "Recebemos uma nova inscrição de {} em nosso site.",
                form.nome_completo
            ),
            details,
            "Data e hora da inscrição",
            submitted_at,
        ),
    }
}

/// Confirmation sent to a camper who joined the waitlist
pub fn waitlist_confirmation(form: &WaitlistForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("Nome completo", &form.nome_completo)
        .date("Data de nascimento", form.data_nascimento)
        .text("Telefone", &form.telefone_contato)
        .text("Camiseta", &form.tamanho_camiseta);

    EmailContent {
        subject: "Ficha de Espera de Inscrição - Carnaval 2025 | 1 à 4/03/25".to_string(),
        body: format!(
            "Bem-vindo ao Projeto Mais Vida!\n\n\
             Sua inscrição para a ficha de espera do Acampamento de Carnaval foi recebida!\n\n\
             Você receberá uma mensagem em seu WhatsApp ou e-mail assim que surgir uma vaga.\n\n\
             {WHATSAPP_CONTACT}\n\n{CARNAVAL_SCHEDULE}\n\n{PACKING_LIST}\n\n\
             Informações da inscrição\n{}\n\nRecebida em: {submitted_at}\n\n{SIGNATURE}",
            details.render()
        ),
    }
}

/// Staff notification for a volunteer registration
pub fn volunteer_staff(id: Uuid, form: &VolunteerForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("ID do pedido", &id.to_string())
        .text("Nome", &form.nome_completo)
        .text("Telefone de contato", &form.telefone_contato)
        .text("E-mail", &form.email)
        .text("Comprovante", &form.comprovante)
        .text("RG", &form.rg)
        .text("CPF", &form.cpf)
        .date("Data de nascimento", form.data_nascimento)
        .text("Paróquia", &form.paroquia)
        .optional("Conhecido no projeto", &form.conhecido)
        .text("Contato de emergência", &form.contato_emergencia)
        .text("Telefone de emergência", &form.telefone_contato_emergencia)
        .flag("Portador de doença", form.portador_doenca)
        .optional("Doenças", &form.doencas)
        .flag("Apto para atividades", form.apto_atividades)
        .flag("Alergias", form.alergias)
        .optional("Detalhes de alergias", &form.alergias_detalhe)
        .flag("Medicação", form.medicacao)
        .optional("Medicamentos", &form.medicamentos)
        .flag("Restrição alimentar", form.restricao_alimentar)
        .optional("Detalhes da restrição", &form.restricao_alimentar_detalhe)
        .flag("Plano de saúde", form.plano_saude)
        .optional("Operadora do plano", &form.operadora_plano)
        .optional("Número de inscrição do plano", &form.numero_inscricao_plano)
        .flag("Termo de responsabilidade", form.responsabilidade)
        .flag("Autorização de imagem", form.autorizacao_imagem);

    EmailContent {
        subject: format!("Nova inscrição de um servo {}", id),
        body: staff_body(
            &format!(
                "Recebemos uma nova inscrição de {} em nosso site.",
                form.nome_completo
            ),
            details,
            "Data e hora da inscrição",
            submitted_at,
        ),
    }
}

/// Confirmation sent to a volunteer
pub fn volunteer_confirmation(form: &VolunteerForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("Nome completo", &form.nome_completo)
        .date("Data de nascimento", form.data_nascimento)
        .text("Telefone", &form.telefone_contato)
        .text("Paróquia", &form.paroquia);

    EmailContent {
        subject: "Ficha de Inscrição Servo - Carnaval 2025 | 1 à 4/03/25".to_string(),
        body: format!(
            "Bem-vindo ao Projeto Mais Vida!\n\n\
             Sua inscrição para o Acampamento de Carnaval foi recebida!\n\n\
             Em breve você receberá em seu WhatsApp a confirmação da sua inscrição.\n\n\
             {WHATSAPP_CONTACT}\n\n{CARNAVAL_SCHEDULE}\n\n{PACKING_LIST}\n\n\
             Informações da inscrição\n{}\n\nRecebida em: {submitted_at}\n\n{SIGNATURE}",
            details.render()
        ),
    }
}

/// Staff notification for a Corpus Christi camper
pub fn corpus_christi_staff(id: Uuid, form: &CorpusChristiForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("ID do pedido", &id.to_string())
        .text("Nome", &form.nome)
        .text("Telefone", &form.telefone)
        .text("E-mail", &form.email)
        .text("Comprovante", &form.comprovante_url)
        .text("CPF", &form.cpf)
        .date("Data de nascimento", form.nascimento)
        .text("Estado civil", &form.estado_civil)
        .text("Camiseta", &form.camiseta)
        .text("Profissão", &form.profissao)
        .text("Cidade", &form.cidade)
        .text("Contato de emergência", &form.contato_emergencia)
        .text("Telefone de emergência", &form.telefone_emergencia)
        .flag("Portador de doença", form.doenca)
        .optional("Doenças", &form.especificar_doenca)
        .flag("Apto para atividades", form.apto_atividades)
        .flag("Alergias", form.alergia)
        .optional("Detalhes de alergias", &form.especificar_alergia)
        .flag("Medicação contínua", form.medicacao_continua)
        .optional("Medicamentos", &form.quais_medicamentos)
        .flag("Restrição alimentar", form.restricao_alimentar)
        .optional("Detalhes da restrição", &form.especificar_restricao)
        .flag("Plano de saúde", form.plano_saude)
        .optional("Operadora do plano", &form.operadora_plano)
        .optional("Número do plano", &form.numero_plano)
        .flag("Termo de responsabilidade", form.responsabilidade)
        .flag("Autorização de imagem", form.autorizo);

    EmailContent {
        subject: format!("Nova inscrição de campista Corpus Christi {}", id),
        body: staff_body(
            &format!("Recebemos uma nova inscrição de {} em nosso site.", form.nome),
            details,
            "Data e hora da inscrição",
            submitted_at,
        ),
    }
}

/// Confirmation sent to a Corpus Christi camper
pub fn corpus_christi_confirmation(form: &CorpusChristiForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("Nome completo", &form.nome)
        .date("Data de nascimento", form.nascimento)
        .text("Telefone", &form.telefone)
        .text("Cidade", &form.cidade)
        .text("Camiseta", &form.camiseta);

    EmailContent {
        subject: "Ficha de Inscrição - Acampa Corpus Christi 2025".to_string(),
        body: format!(
            "Bem-vindo ao Projeto Mais Vida!\n\n\
             Sua inscrição para o Acampamento de Corpus Christi foi recebida!\n\n\
             Em breve você receberá em seu WhatsApp a confirmação da sua inscrição.\n\n\
             {WHATSAPP_CONTACT}\n\n{PACKING_LIST}\n\n\
             Informações da inscrição\n{}\n\nRecebida em: {submitted_at}\n\n{SIGNATURE}",
            details.render()
        ),
    }
}

/// Staff notification for the public contact form
pub fn contact_staff(form: &ContactForm, submitted_at: &str) -> EmailContent {
    let details = Details::default()
        .text("Nome", form.nome.trim())
        .text("Celular de contato", form.celular.trim())
        .text("E-mail", form.email.trim())
        .text("Cidade", form.cidade.trim())
        .text("Mensagem", form.mensagem.trim());

    EmailContent {
        subject: "Um novo Contato".to_string(),
        body: staff_body(
            &format!(
                "Recebemos um novo contato de {} em nosso site.",
                form.nome.trim()
            ),
            details,
            "Data e hora do contato",
            submitted_at,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intake::fixtures::*;

    #[test]
    fn test_waitlist_staff_lists_fields() {
        let form: WaitlistForm = serde_json::from_value(waitlist_json()).unwrap();
        let form = form.validate().unwrap();
        let id = Uuid::new_v4();

        let email = waitlist_staff(id, &form, "01/03/2025, 08:00:00");
        assert!(email.subject.ends_with(&id.to_string()));
        assert!(email.body.contains("Nome: Ana Souza"));
        assert!(email.body.contains("Data de nascimento: 01/01/2000"));
        assert!(email.body.contains("Alergias: Sim"));
        assert!(email.body.contains("Detalhes de alergias: Dipirona"));
        assert!(email.body.contains("Doenças: -"));
        assert!(email.body.contains("Data e hora da inscrição: 01/03/2025, 08:00:00"));
    }

    #[test]
    fn test_volunteer_confirmation_greets_submitter() {
        let form: VolunteerForm = serde_json::from_value(volunteer_json()).unwrap();
        let email = volunteer_confirmation(&form, "01/03/2025, 08:00:00");

        assert!(email.subject.starts_with("Ficha de Inscrição Servo"));
        assert!(email.body.starts_with("Bem-vindo ao Projeto Mais Vida!"));
        assert!(email.body.contains("Nome completo: João Lima"));
        assert!(email.body.contains("Paróquia: Catedral"));
    }

    #[test]
    fn test_corpus_christi_staff_flags() {
        let form: CorpusChristiForm = serde_json::from_value(corpus_christi_json()).unwrap();
        let email = corpus_christi_staff(Uuid::nil(), &form, "now");

        assert!(email.body.contains("Apto para atividades: Sim"));
        assert!(email.body.contains("Medicação contínua: Não"));
        assert!(email.body.contains("Cidade: Maringá"));
    }

    #[test]
    fn test_contact_staff() {
        let form = ContactForm {
            email: " ana@example.com ".to_string(),
            nome: "Ana".to_string(),
            celular: "44999990000".to_string(),
            cidade: "Maringá".to_string(),
            mensagem: "Quero participar".to_string(),
        };

        let email = contact_staff(&form, "18/06/2025, 23:05:09");
        assert_eq!(email.subject, "Um novo Contato");
        assert!(email.body.starts_with("Recebemos um novo contato de Ana"));
        assert!(email.body.contains("E-mail: ana@example.com\n"));
        assert!(email.body.contains("Mensagem: Quero participar"));
        assert!(email.body.ends_with("Equipe Projeto Mais Vida"));
    }
}
