//! Couche d'orchestration.
//!
//! Parcourt les pages configurées dans l'ordre, enchaîne pour chacune
//! extraction → construction du prompt → appel LLM, et accumule le
//! rapport. L'échec d'une page n'interrompt jamais les suivantes.

pub mod audit_runner;

pub use audit_runner::AuditRunner;
