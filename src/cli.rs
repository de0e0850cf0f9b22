use std::path::PathBuf;

use clap::Parser;

/// Audit linguistique du site Inflexion via un LLM.
///
/// Vérifie que tout le contenu visible du site est rédigé en français
/// correct : anglicismes, devises, unités, typographie, terminologie.
#[derive(Parser, Debug)]
#[command(name = "check-french", version)]
pub struct Cli {
    /// Auditer un seul fichier (ex : index.html)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Afficher les suggestions de correction détaillées (AVANT / APRÈS)
    #[arg(long)]
    pub fix: bool,

    /// Sortie au format JSON (pour intégration CI)
    #[arg(long)]
    pub json: bool,

    /// Modèle LLM à utiliser
    #[arg(short, long)]
    pub model: Option<String>,

    /// Racine du site contenant les pages HTML
    #[arg(long)]
    pub root: Option<PathBuf>,
}
