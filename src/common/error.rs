// src/common/error.rs

use thiserror::Error;

// A taxonomia de falhas que chega na UI. Nenhuma delas é re-tentada
// automaticamente: quem repete a ação (re-arrastar o card, reenviar o
// formulário) é o usuário.
#[derive(Debug, Error)]
pub enum AppError {
    // Falha de transporte: o servidor nem chegou a responder.
    #[error("Falha de rede: sem resposta do servidor.")]
    Network(#[from] reqwest::Error),

    // 401/403: a sessão morreu. Tratado globalmente (teardown + tela de login),
    // nunca no ponto da ação que disparou a chamada.
    #[error("Sessão inválida ou expirada.")]
    Auth,

    // 4xx com mensagem do servidor (ou validação local antes do envio).
    #[error("{0}")]
    Validation(String),

    // 5xx ou qualquer coisa que não se encaixa acima.
    #[error("Erro inesperado do servidor ({status}): {message}")]
    Unknown { status: u16, message: String },
}

impl AppError {
    // Monta o erro a partir de um status HTTP + corpo `{"error": "..."}`.
    // O corpo é opcional: um 422 sem mensagem vira um texto genérico.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => AppError::Auth,
            400..=499 => AppError::Validation(
                message.unwrap_or_else(|| "Um ou mais campos são inválidos.".to_string()),
            ),
            _ => AppError::Unknown {
                status,
                message: message.unwrap_or_else(|| "Ocorreu um erro inesperado.".to_string()),
            },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth)
    }
}

// Achata os erros do `validator` em uma mensagem única, no formato
// "campo: mensagem; campo: mensagem".
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for e in field_errors.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                parts.push(format!("{}: {}", field, message));
            }
        }
        parts.sort();
        AppError::Validation(parts.join("; "))
    }
}
