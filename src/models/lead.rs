// src/models/lead.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- NOTA ---

// Uma anotação do vendedor no lead. A sequência é append-only do ponto de
// vista do cliente: nunca apagamos nota daqui.
//
// O formato legado gravava a nota como string pura; o formato novo é um
// objeto com timestamp. A normalização acontece UMA vez, na fronteira de
// desserialização (`#[serde(from = "NoteWire")]`) — daqui para dentro
// ninguém mais pergunta "é string ou objeto?".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NoteWire")]
pub struct Note {
    pub text: String,
    // Época em milissegundos. Notas legadas (string pura) ficam com 0.
    pub timestamp: i64,
    #[serde(default)]
    pub is_attachment: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NoteWire {
    Legada(String),
    Completa {
        text: String,
        #[serde(default)]
        timestamp: i64,
        #[serde(default)]
        is_attachment: bool,
    },
}

impl From<NoteWire> for Note {
    fn from(wire: NoteWire) -> Self {
        match wire {
            NoteWire::Legada(text) => Note {
                text,
                timestamp: 0,
                is_attachment: false,
            },
            NoteWire::Completa {
                text,
                timestamp,
                is_attachment,
            } => Note {
                text,
                timestamp,
                is_attachment,
            },
        }
    }
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Note {
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
            is_attachment: false,
        }
    }

    // Marcador de anexo: o arquivo em si sobe por outro canal, aqui só
    // registramos que ele existe.
    pub fn attachment(filename: impl Into<String>) -> Self {
        Note {
            text: filename.into(),
            timestamp: Utc::now().timestamp_millis(),
            is_attachment: true,
        }
    }
}

// --- LEAD ---

// O registro de lead como vem da API. Convenção canônica: snake_case
// (a variante camelCase do board antigo está aposentada).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,

    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub document_number: Option<String>,
    pub address: Option<String>,

    // De onde o lead veio (indicação, site, porta-a-porta...).
    pub origin: Option<String>,

    // Dados da simulação solar.
    pub consumption_kwh: Option<f64>,
    pub estimated_savings: Option<f64>,

    // Campo livre de qualificação.
    pub qualifier: Option<String>,

    // Valor cru do status. O funil classifica via Stage::classify;
    // valores fora da enumeração caem em "Novo" só para exibição.
    pub status: String,

    pub owner_id: Uuid,

    // Ordem cronológica no armazenamento (mais antiga primeiro).
    #[serde(default)]
    pub notes: Vec<Note>,

    // Só urgência visual; nenhuma regra de negócio depende disso.
    #[serde(default)]
    pub next_contact: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
}

// --- PAYLOADS ---

// Corpo do PUT /leads/{id} quando o salvamento vem do modal de edição:
// o registro completo, já mesclado com as edições da sessão.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateLeadPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: String,

    pub phone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub document_number: Option<String>,
    pub address: Option<String>,
    pub origin: Option<String>,
    pub consumption_kwh: Option<f64>,
    pub estimated_savings: Option<f64>,
    pub qualifier: Option<String>,

    pub status: String,
    pub notes: Vec<Note>,
    pub next_contact: Option<NaiveDate>,

    // Só vai no corpo quando há transferência de dono (admin). Viaja na
    // MESMA escrita que o resto: transferência não tem transação própria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

impl From<&Lead> for UpdateLeadPayload {
    fn from(lead: &Lead) -> Self {
        UpdateLeadPayload {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            document_number: lead.document_number.clone(),
            address: lead.address.clone(),
            origin: lead.origin.clone(),
            consumption_kwh: lead.consumption_kwh,
            estimated_savings: lead.estimated_savings,
            qualifier: lead.qualifier.clone(),
            status: lead.status.clone(),
            notes: lead.notes.clone(),
            next_contact: lead.next_contact,
            owner_id: None,
        }
    }
}

// Corpo do POST /leads.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewLeadPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: String,

    pub phone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub document_number: Option<String>,
    pub address: Option<String>,
    pub origin: Option<String>,
    pub consumption_kwh: Option<f64>,
    pub estimated_savings: Option<f64>,
    pub qualifier: Option<String>,

    pub status: String,
    pub owner_id: Uuid,
    pub next_contact: Option<NaiveDate>,
}
