// src/lib.rs

// O núcleo cliente do CRM solar: cache local de leads, classificação em
// colunas do funil, mutação otimista com reconciliação e a sessão de
// edição do modal. A coleção remota de leads é um colaborador externo,
// acessado via REST com bearer token.

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod session;
