//! Client LLM.
//!
//! Envoie une requête d'audit à une API compatible OpenAI et renvoie le
//! verdict textuel. Tout échec (réseau, quota, réponse vide) est converti
//! en [`AppError`] ici : aucune erreur de la capacité ne traverse cette
//! frontière sous forme brute.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::clients::AuditDispatcher;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Client de la capacité d'analyse linguistique.
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    /// Crée un client à partir de la configuration.
    ///
    /// La clé est fournie séparément : son absence a déjà été traitée en
    /// amont comme un saut d'audit, jamais comme une erreur ici.
    pub fn new(config: &Config, api_key: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

impl AuditDispatcher for LlmClient {
    async fn dispatch(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        debug!("appel LLM, modèle : {}", self.model);
        debug!("message utilisateur : {} caractères", user_prompt.len());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_prompt)
            .build()
            .map_err(|e| AppError::llm_call_failed(&self.model, e))?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_prompt)
            .build()
            .map_err(|e| AppError::llm_call_failed(&self.model, e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| AppError::llm_call_failed(&self.model, e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("appel LLM échoué : {}", e);
            AppError::llm_call_failed(&self.model, e)
        })?;

        debug!("appel LLM réussi");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::LlmEmptyResponse {
                model: self.model.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}
