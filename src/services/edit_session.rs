// src/services/edit_session.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{Lead, Note, UpdateLeadPayload, User},
};

// A cópia de trabalho de um lead aberto no modal de edição. Tudo aqui é
// transiente: nem o cache nem o servidor são tocados até o salvamento via
// BoardService::save_edits. Fechar o modal sem salvar é simplesmente
// deixar a sessão cair.
#[derive(Debug, Clone)]
pub struct EditSession {
    lead_id: Uuid,
    editor_is_admin: bool,
    pub draft: UpdateLeadPayload,
}

impl EditSession {
    // Fotografa o lead do cache. As notas já chegam normalizadas (a
    // fronteira de desserialização cuidou do formato legado), então a
    // cópia é literal.
    pub fn open(lead: &Lead, editor: &User) -> Self {
        Self {
            lead_id: lead.id,
            editor_is_admin: editor.is_admin(),
            draft: UpdateLeadPayload::from(lead),
        }
    }

    pub fn lead_id(&self) -> Uuid {
        self.lead_id
    }

    // Acrescenta uma anotação com o timestamp de agora. Só na cópia de
    // trabalho — a sequência do lead em si só cresce quando o save confirma.
    pub fn append_note(&mut self, text: impl Into<String>) {
        self.draft.notes.push(Note::new(text));
    }

    // Registra que um anexo subiu (o arquivo vai por outro canal).
    pub fn append_attachment_marker(&mut self, filename: impl Into<String>) {
        self.draft.notes.push(Note::attachment(filename));
    }

    // Transferência de dono: pega carona na mesma escrita que o resto das
    // edições. Se o save combinado falhar, a transferência falha junto —
    // não existe sucesso parcial.
    pub fn transfer_owner(&mut self, new_owner: Uuid) -> Result<(), AppError> {
        if !self.editor_is_admin {
            return Err(AppError::Validation(
                "Somente administradores podem transferir leads.".to_string(),
            ));
        }
        self.draft.owner_id = Some(new_owner);
        Ok(())
    }

    // O corpo completo para o PUT. Clona, de propósito: um save que falhar
    // deixa a sessão aberta com o rascunho intacto para nova tentativa.
    pub fn payload(&self) -> UpdateLeadPayload {
        self.draft.clone()
    }
}
