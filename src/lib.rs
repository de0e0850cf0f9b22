//! # check-french
//!
//! Audit linguistique automatisé du site Inflexion : le texte visible de
//! chaque page HTML est extrait puis soumis à un LLM pour relecture
//! (anglicismes, devises, unités, typographie française, terminologie,
//! qualité rédactionnelle).
//!
//! ## Architecture
//!
//! Flux strictement descendant, une passe par exécution :
//!
//! ```text
//! extract (texte visible)
//!     ↓
//! prompt (politique fixe + message par page)
//!     ↓
//! clients::LlmClient (capacité d'analyse externe)
//!     ↓
//! orchestrator::AuditRunner (boucle séquentielle, rapport)
//!     ↓
//! report (JSON ou sections lisibles)
//! ```
//!
//! Aucun état partagé entre les pages hormis le mappage ordonné des
//! résultats, détenu par l'orchestrateur.

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod prompt;
pub mod report;
pub mod utils;

// Réexport des types courants
pub use clients::{AuditDispatcher, LlmClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use orchestrator::AuditRunner;
pub use report::{AuditOutcome, RunReport};
