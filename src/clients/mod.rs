//! Frontière avec la capacité d'analyse externe.

pub mod llm_client;

pub use llm_client::LlmClient;

use crate::error::AppResult;

/// Capacité d'audit : un prompt système + un message utilisateur → un
/// verdict textuel, ou une erreur descriptive.
///
/// L'orchestrateur ne connaît que cette interface ; les tests lui
/// substituent une implémentation factice.
#[allow(async_fn_in_trait)]
pub trait AuditDispatcher {
    async fn dispatch(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}
