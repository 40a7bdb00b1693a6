// src/services/board_service.rs

use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::LeadsApi,
    common::error::AppError,
    models::{Lead, Stage, UpdateLeadPayload, User},
    services::funnel::{self, BoardColumns},
};

// Avisos transientes para a UI (os "toasts"). A sessão expirada tem
// variante própria porque o tratamento é global: teardown + login,
// não importa qual ação disparou a chamada.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Failure(String),
    SessionExpired,
}

// O dono do snapshot local da coleção remota, vivo enquanto o board está
// aberto. O cache é reconstruído por inteiro a cada load; mutações
// otimistas trocam uma entrada no lugar e a recarga posterior reconcilia
// com a verdade do servidor.
#[derive(Clone)]
pub struct BoardService {
    api: LeadsApi,
    viewer: User,
    cache: Arc<RwLock<Vec<Lead>>>,
    // Último termo de busca, para a recarga pós-mutação repetir a mesma
    // visão que o usuário está olhando.
    last_search: Arc<RwLock<Option<String>>>,
    notifier: mpsc::UnboundedSender<Notification>,
}

impl BoardService {
    pub fn new(api: LeadsApi, viewer: User) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            api,
            viewer,
            cache: Arc::new(RwLock::new(Vec::new())),
            last_search: Arc::new(RwLock::new(None)),
            notifier: tx,
        };
        (service, rx)
    }

    pub(crate) fn notify(&self, notification: Notification) {
        // Receiver derrubado = board fechado; aviso sem destino não é erro.
        let _ = self.notifier.send(notification);
    }

    // --- CACHE ---

    // Busca completa, reconstruindo o cache do zero. O filtro de permissão
    // é aplicado aqui: vendedor só fica com os próprios leads, admin fica
    // com tudo. AppError::Auth sobe para quem chamou fazer o teardown.
    pub async fn load(&self, search: Option<&str>) -> Result<(), AppError> {
        let fetched = self.api.list_leads(search).await?;

        let mut leads: Vec<Lead> = Vec::with_capacity(fetched.len());
        for lead in fetched {
            if !self.viewer.is_admin() && lead.owner_id != self.viewer.id {
                continue;
            }
            // Unicidade de id dentro do cache: a última ocorrência vence.
            if let Some(existing) = leads.iter_mut().find(|l| l.id == lead.id) {
                *existing = lead;
            } else {
                leads.push(lead);
            }
        }

        tracing::debug!("Cache recarregado: {} leads.", leads.len());
        *self.last_search.write().await = search.map(str::to_string);
        *self.cache.write().await = leads;
        Ok(())
    }

    // Recarrega com a mesma busca do último load. Toda mutação termina
    // aqui, com sucesso ou falha: a recarga é idempotente, então uma
    // resposta atrasada é simplesmente sobrescrita pela próxima.
    async fn reload(&self) -> Result<(), AppError> {
        let search = self.last_search.read().await.clone();
        self.load(search.as_deref()).await
    }

    // Snapshot atual, na ordem de inserção do último load.
    pub async fn all(&self) -> Vec<Lead> {
        self.cache.read().await.clone()
    }

    // Edição pontual de uma entrada; id ausente é no-op.
    pub async fn replace(&self, id: Uuid, updater: impl FnOnce(&mut Lead)) {
        let mut cache = self.cache.write().await;
        if let Some(lead) = cache.iter_mut().find(|l| l.id == id) {
            updater(lead);
        }
    }

    // Particiona o snapshot em colunas do kanban.
    pub async fn board(&self) -> BoardColumns {
        funnel::partition(&self.cache.read().await)
    }

    // --- MUTAÇÕES ---

    // Movimento de etapa (arrastar o card). Otimista: o cache muda ANTES
    // da chamada remota, para o card não "voltar" embaixo do mouse. Em
    // caso de falha, reverte para o valor anterior e recarrega — o estado
    // final converge para a verdade do servidor, nunca para o palpite.
    pub async fn move_stage(&self, id: Uuid, new_stage: Stage) -> Result<(), AppError> {
        let previous = {
            let mut cache = self.cache.write().await;
            let Some(lead) = cache.iter_mut().find(|l| l.id == id) else {
                return Ok(());
            };
            if lead.status == new_stage.as_str() {
                return Ok(());
            }
            std::mem::replace(&mut lead.status, new_stage.as_str().to_string())
        };

        match self.api.update_stage(id, new_stage).await {
            Ok(_) => {
                self.notify(Notification::Success(format!(
                    "Lead movido para {}.",
                    new_stage
                )));
                self.reload().await
            }
            Err(err) => {
                self.replace(id, |lead| lead.status = previous).await;
                if err.is_auth() {
                    self.notify(Notification::SessionExpired);
                    return Err(err);
                }
                self.notify(Notification::Failure(err.to_string()));
                // A recarga garante a convergência mesmo se o PUT falhou
                // depois de aplicado no servidor.
                self.reload().await?;
                Err(err)
            }
        }
    }

    // Salvamento do modal de edição. NÃO é otimista: são muitos campos, e
    // reverter uma escrita parcial com segurança é bem pior do que voltar
    // um status. O cache só muda depois da confirmação, via recarga.
    pub async fn save_edits(&self, id: Uuid, payload: UpdateLeadPayload) -> Result<(), AppError> {
        if let Err(e) = payload.validate() {
            let err = AppError::from(e);
            self.notify(Notification::Failure(err.to_string()));
            return Err(err);
        }

        match self.api.update_lead(id, &payload).await {
            Ok(_) => {
                self.notify(Notification::Success("Lead atualizado.".to_string()));
                self.reload().await?;
                Ok(())
            }
            Err(err) => {
                if err.is_auth() {
                    self.notify(Notification::SessionExpired);
                } else {
                    self.notify(Notification::Failure(err.to_string()));
                }
                // Cache intacto; a sessão de edição continua aberta com os
                // valores do usuário.
                Err(err)
            }
        }
    }

    // Usuários atribuíveis para transferência de dono (somente admin).
    pub async fn assignable_users(&self) -> Result<Vec<User>, AppError> {
        if !self.viewer.is_admin() {
            return Err(AppError::Validation(
                "Somente administradores podem transferir leads.".to_string(),
            ));
        }
        self.api.list_users().await
    }
}
