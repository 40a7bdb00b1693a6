// src/api/leads_api.rs

use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{Lead, NewLeadPayload, Stage, UpdateLeadPayload, User},
    session::Session,
};

// Corpo de erro padrão da API: { "error": "mensagem" }.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// Corpo do PUT quando só a etapa muda (arrastar o card).
#[derive(serde::Serialize)]
struct StagePatch {
    status: Stage,
}

// O gateway para a coleção remota de leads. Toda requisição sai com o
// bearer token da sessão; a classificação de falhas em
// Network/Auth/Validation/Unknown acontece aqui e em nenhum outro lugar.
#[derive(Clone)]
pub struct LeadsApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

impl LeadsApi {
    pub fn new(base_url: impl Into<String>, session: &Session, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: session.token.clone(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // GET /leads?search=<termo>
    // O filtro de substring é aplicado pelo servidor.
    pub async fn list_leads(&self, search: Option<&str>) -> Result<Vec<Lead>, AppError> {
        let mut request = self
            .http
            .get(self.url("/leads"))
            .bearer_auth(&self.token)
            .timeout(self.timeout);
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }
        let response = request.send().await?;
        Self::parse(response).await
    }

    // GET /leads/{id}
    pub async fn get_lead(&self, id: Uuid) -> Result<Lead, AppError> {
        let response = self
            .http
            .get(self.url(&format!("/leads/{}", id)))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .send()
            .await?;
        Self::parse(response).await
    }

    // POST /leads
    pub async fn create_lead(&self, payload: &NewLeadPayload) -> Result<Lead, AppError> {
        let response = self
            .http
            .post(self.url("/leads"))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    // PUT /leads/{id} só com o status — o movimento de etapa do kanban.
    pub async fn update_stage(&self, id: Uuid, stage: Stage) -> Result<Lead, AppError> {
        let response = self
            .http
            .put(self.url(&format!("/leads/{}", id)))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(&StagePatch { status: stage })
            .send()
            .await?;
        Self::parse(response).await
    }

    // PUT /leads/{id} com o registro completo — o salvamento do modal.
    // Se o payload carrega owner_id, a transferência de dono vai junto.
    pub async fn update_lead(
        &self,
        id: Uuid,
        payload: &UpdateLeadPayload,
    ) -> Result<Lead, AppError> {
        let response = self
            .http
            .put(self.url(&format!("/leads/{}", id)))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    // GET /users — só faz sentido para sessão admin (transferência de lead).
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let response = self
            .http
            .get(self.url("/users"))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .send()
            .await?;
        Self::parse(response).await
    }

    // Converte a resposta no tipo esperado ou na taxonomia de erro.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        Err(AppError::from_status(status.as_u16(), message))
    }
}
