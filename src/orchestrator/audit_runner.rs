//! Exécuteur d'audit — couche d'orchestration.
//!
//! Traitement strictement séquentiel, dans l'ordre de configuration :
//! une page à la fois, un seul mappage de résultats, aucun nouvel essai.
//!
//! Par page :
//! 1. fichier absent → saut (journalisé, aucune entrée au rapport) ;
//! 2. texte extrait vide → saut (journalisé, aucune entrée) ;
//! 3. sinon appel LLM, et enregistrement du verdict ou de l'erreur.

use std::fs;

use tracing::{error, info, warn};

use crate::clients::AuditDispatcher;
use crate::config::Config;
use crate::error::AppError;
use crate::extract;
use crate::prompt;
use crate::report::{AuditOutcome, RunReport};

/// Exécuteur d'un audit complet.
pub struct AuditRunner<'a, D: AuditDispatcher> {
    config: &'a Config,
    dispatcher: &'a D,
    fix_mode: bool,
}

impl<'a, D: AuditDispatcher> AuditRunner<'a, D> {
    pub fn new(config: &'a Config, dispatcher: &'a D, fix_mode: bool) -> Self {
        Self {
            config,
            dispatcher,
            fix_mode,
        }
    }

    /// Audite les pages dans l'ordre donné et produit le rapport.
    ///
    /// Invariant : chaque page réellement traitée (lue, texte non vide)
    /// produit exactement une entrée, succès ou erreur.
    pub async fn run(&self, files: &[String]) -> RunReport {
        let mut report = RunReport::new(files.len());

        for filename in files {
            let path = self.config.site_root.join(filename);
            if !path.exists() {
                warn!("⚠️ {} introuvable, ignoré.", filename);
                continue;
            }

            let html = match fs::read_to_string(&path) {
                Ok(html) => html,
                Err(e) => {
                    // Le fichier existe mais ne se lit pas : enregistré
                    // comme erreur de page, l'audit continue.
                    let err = AppError::ReadFailed {
                        path: path.display().to_string(),
                        source: e,
                    };
                    error!("❌ {} — {}", filename, err);
                    report.record(filename, AuditOutcome::Error(err.to_string()));
                    continue;
                }
            };

            let text = extract::extract_text(&html);
            if text.trim().is_empty() {
                warn!("⚠️ {} — aucun texte visible extrait.", filename);
                continue;
            }

            info!(
                "⏳ Analyse de {} ({} caractères)...",
                filename,
                text.chars().count()
            );

            let user_prompt = prompt::build_user_prompt(filename, &text, self.fix_mode);

            match self.dispatcher.dispatch(prompt::SYSTEM_PROMPT, &user_prompt).await {
                Ok(verdict) => {
                    report.record(filename, AuditOutcome::Verdict(verdict));
                }
                Err(e) => {
                    error!("❌ {} — erreur API : {}", filename, e);
                    report.record(filename, AuditOutcome::Error(format!("Erreur API : {e}")));
                }
            }
        }

        report
    }
}
