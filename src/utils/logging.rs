//! Initialisation de la journalisation.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialise `tracing` sur stderr.
///
/// stdout est réservé au produit de l'audit (sections ou JSON) ; les
/// journaux ne doivent jamais s'y mélanger. Le niveau se règle via
/// `RUST_LOG` (défaut : info).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Journalise le démarrage d'une exécution.
pub fn log_startup(model: &str, fix_mode: bool, total: usize) {
    info!("{}", "═".repeat(60));
    info!("🚀 Audit linguistique — démarrage");
    info!(
        "Date : {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("Modèle : {}", model);
    info!(
        "Mode : {}",
        if fix_mode {
            "corrections détaillées"
        } else {
            "audit standard"
        }
    );
    info!("Fichiers : {}", total);
    info!("{}", "═".repeat(60));
}
