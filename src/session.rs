// src/session.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::User;

// A sessão autenticada, explícita e injetada onde for preciso — nada de
// token em estado global. O arquivo JSON faz o papel que o localStorage
// fazia no navegador: sobreviver entre execuções.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    // Restaura a sessão persistida. Arquivo ausente não é erro: significa
    // "ninguém logado". Arquivo corrompido também vira None (com aviso),
    // porque a alternativa seria travar o app por causa de lixo em disco.
    pub fn restore(path: &Path) -> anyhow::Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Sessão persistida ilegível ({}), descartando.", e);
                Ok(None)
            }
        }
    }

    pub fn persist(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    // Teardown único: derruba o que está em disco. Quem chama descarta a
    // cópia em memória junto. Invocado em qualquer AppError::Auth.
    pub fn clear(path: &Path) -> anyhow::Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
