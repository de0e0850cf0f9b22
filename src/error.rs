//! Types d'erreur de l'application.
//!
//! Chaque classe d'échec est convertie en résultat enregistré à la frontière
//! où elle survient : l'échec d'une page n'interrompt jamais l'audit des
//! pages suivantes.

use thiserror::Error;

/// Erreur applicative.
#[derive(Debug, Error)]
pub enum AppError {
    /// Lecture d'un fichier HTML impossible (le fichier existe mais ne se
    /// lit pas ; l'absence du fichier est un simple saut, pas une erreur).
    #[error("lecture de {path} impossible : {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Appel à l'API LLM échoué (réseau, quota, réponse mal formée).
    #[error("appel LLM échoué (modèle : {model}) : {source}")]
    LlmCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// L'API a répondu mais sans contenu exploitable.
    #[error("réponse LLM vide (modèle : {model})")]
    LlmEmptyResponse { model: String },

    /// Racine du site introuvable : condition fatale, l'audit ne peut pas
    /// démarrer.
    #[error("racine du site introuvable : {path}")]
    SiteRootNotFound { path: String },
}

impl AppError {
    pub fn llm_call_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::LlmCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

/// Alias de résultat applicatif.
pub type AppResult<T> = Result<T, AppError>;
