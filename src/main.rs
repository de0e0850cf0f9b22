use anyhow::Result;
use clap::Parser;

use check_french::cli::Cli;
use check_french::error::AppError;
use check_french::orchestrator::AuditRunner;
use check_french::utils::logging;
use check_french::{report, Config, LlmClient};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    // Configuration : environnement, puis surcharges de la ligne de commande
    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(root) = cli.root {
        config.site_root = root;
    }

    // Clé absente : saut informatif de toute l'exécution, code de sortie 0
    let Some(api_key) = config.api_key.clone() else {
        let msg = "LLM_API_KEY non définie — audit linguistique ignoré.";
        if cli.json {
            println!("{}", report::render_info_json(msg)?);
        } else {
            println!("⚠️  {msg}");
            println!("   Pour activer l'audit : export LLM_API_KEY=sk-...");
        }
        return Ok(());
    };

    // Racine illisible : seule condition fatale
    if !config.site_root.is_dir() {
        return Err(AppError::SiteRootNotFound {
            path: config.site_root.display().to_string(),
        }
        .into());
    }

    // Une seule page ou la liste complète
    let files: Vec<String> = match cli.file {
        Some(file) => vec![file],
        None => config.files.clone(),
    };

    logging::log_startup(&config.model, cli.fix, files.len());

    if !cli.json {
        report::print_header("Audit linguistique — Inflexion");
        println!("Modèle : {}", config.model);
        println!(
            "Mode : {}",
            if cli.fix {
                "corrections détaillées"
            } else {
                "audit standard"
            }
        );
        println!("Fichiers : {}", files.len());
    }

    let client = LlmClient::new(&config, &api_key);
    let runner = AuditRunner::new(&config, &client, cli.fix);
    let run_report = runner.run(&files).await;

    if cli.json {
        println!("{}", run_report.to_json()?);
    } else {
        report::print_human(&run_report);
    }

    Ok(())
}
