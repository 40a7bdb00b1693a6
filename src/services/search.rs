// src/services/search.rs

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::services::board_service::{BoardService, Notification};

// Termo com menos caracteres que isso não dispara chamada remota.
pub const MIN_SEARCH_LEN: usize = 3;

// O que fazer com o que o usuário digitou.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    // Campo vazio: recarrega a visão sem filtro.
    Unfiltered,
    // Termo válido: busca no servidor.
    Term(String),
    // Curto demais: nenhuma chamada.
    TooShort,
}

pub fn interpret(raw: &str) -> SearchIntent {
    let term = raw.trim();
    if term.is_empty() {
        SearchIntent::Unfiltered
    } else if term.chars().count() < MIN_SEARCH_LEN {
        SearchIntent::TooShort
    } else {
        SearchIntent::Term(term.to_string())
    }
}

// Debounce de digitação: segura a recarga por um atraso fixo e descarta o
// tick pendente a cada tecla nova. O que já saiu pela rede NÃO é
// cancelado — uma resposta velha é inofensiva porque toda conclusão
// termina numa recarga idempotente (last-write-wins).
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    // Uma tecla digitada. Aborta o timer pendente e agenda a recarga.
    pub fn input(&mut self, raw: &str, board: BoardService) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let search = match interpret(raw) {
            SearchIntent::TooShort => return,
            SearchIntent::Unfiltered => None,
            SearchIntent::Term(term) => Some(term),
        };

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // load() propaga o erro; em background o destino é a
            // notificação, igual a qualquer outra ação do usuário.
            if let Err(e) = board.load(search.as_deref()).await {
                tracing::warn!("Busca falhou: {}", e);
                if e.is_auth() {
                    board.notify(Notification::SessionExpired);
                } else {
                    board.notify(Notification::Failure(e.to_string()));
                }
            }
        }));
    }

    // Espera o tick pendente concluir (para testes e para fechar o board
    // sem abandonar tarefa no ar).
    pub async fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vazio_recarrega_sem_filtro() {
        assert_eq!(interpret(""), SearchIntent::Unfiltered);
        assert_eq!(interpret("   "), SearchIntent::Unfiltered);
    }

    #[test]
    fn curto_demais_nao_dispara_nada() {
        assert_eq!(interpret("ma"), SearchIntent::TooShort);
        assert_eq!(interpret(" a "), SearchIntent::TooShort);
    }

    #[test]
    fn termo_valido_vai_aparado() {
        assert_eq!(
            interpret("  maria  "),
            SearchIntent::Term("maria".to_string())
        );
    }

    #[test]
    fn conta_caracteres_e_nao_bytes() {
        // "joã" tem 3 caracteres e 4 bytes.
        assert_eq!(interpret("joã"), SearchIntent::Term("joã".to_string()));
    }
}
