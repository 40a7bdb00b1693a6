// src/config.rs

use std::{env, path::PathBuf, time::Duration};
use tokio::sync::mpsc;

use crate::{
    api::LeadsApi,
    services::{BoardService, Notification},
    session::Session,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    // O arquivo que faz as vezes do localStorage do navegador.
    pub session_file: PathBuf,
    pub search_debounce: Duration,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("API_BASE_URL").map_err(|_| anyhow::anyhow!("API_BASE_URL deve ser definida"))?;

        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".sessao.json"));

        let search_debounce = env::var("SEARCH_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(400));

        let http_timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Ok(Self {
            api_base_url,
            session_file,
            search_debounce,
            http_timeout,
        })
    }
}

// O estado montado da aplicação: a sessão restaurada mais o gráfico de
// dependências (API -> board), igual ao que a raiz da árvore de UI recebia.
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub board: BoardService,
    pub notifications: mpsc::UnboundedReceiver<Notification>,
}

impl AppState {
    pub fn new(config: AppConfig, session: Session) -> Self {
        let api = LeadsApi::new(&config.api_base_url, &session, config.http_timeout);
        let (board, notifications) = BoardService::new(api, session.user.clone());
        Self {
            config,
            session,
            board,
            notifications,
        }
    }
}
