//! Rapport d'audit et rendu.
//!
//! Deux modes exclusifs : JSON (une seule structure sur stdout, ordre des
//! pages préservé, clé réservée `_info` pour les messages de niveau
//! exécution) ou texte lisible (en-tête, une section bordée par page,
//! pied de page avec les compteurs).

use indexmap::IndexMap;
use serde::Serialize;

/// Résultat d'audit d'une page : verdict du modèle ou description d'erreur.
///
/// Les deux variantes se sérialisent en chaîne nue, comme le verdict.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    Verdict(String),
    Error(String),
}

/// Rapport d'une exécution complète.
///
/// Invariant : une entrée par page effectivement auditée (verdict ou
/// erreur), dans l'ordre de la configuration ; les pages absentes ou sans
/// texte visible n'apparaissent pas.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: IndexMap<String, AuditOutcome>,
    /// Nombre de pages configurées (sert au pied de page, pas au JSON)
    pub configured: usize,
}

impl RunReport {
    pub fn new(configured: usize) -> Self {
        Self {
            results: IndexMap::new(),
            configured,
        }
    }

    pub fn record(&mut self, filename: &str, outcome: AuditOutcome) {
        self.results.insert(filename.to_string(), outcome);
    }

    pub fn processed(&self) -> usize {
        self.results.len()
    }

    /// Sérialise le mappage page → résultat, ordre d'insertion préservé.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.results)
    }
}

/// JSON minimal porté par la clé réservée `_info` (message d'exécution,
/// ex. « clé API absente »).
pub fn render_info_json(message: &str) -> serde_json::Result<String> {
    let mut map = IndexMap::new();
    map.insert("_info", message);
    serde_json::to_string_pretty(&map)
}

/// En-tête bordé (largeur minimale 60).
pub fn print_header(text: &str) {
    let width = 60.max(text.chars().count() + 4);
    println!("\n{}", "═".repeat(width));
    println!("  {text}");
    println!("{}", "═".repeat(width));
}

/// Section bordée d'une page.
pub fn print_section(filename: &str, verdict: &str) {
    println!("\n{}", "─".repeat(50));
    println!("📄  {filename}");
    println!("{}", "─".repeat(50));
    println!("{verdict}");
}

/// Rendu lisible complet d'un rapport : sections puis pied de page.
pub fn print_human(report: &RunReport) {
    for (filename, outcome) in &report.results {
        match outcome {
            AuditOutcome::Verdict(text) => print_section(filename, text),
            AuditOutcome::Error(text) => println!("\n❌ {filename} — {text}"),
        }
    }

    print_header("Audit terminé");
    println!(
        "Pages analysées : {}/{}",
        report.processed(),
        report.configured
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_preserve_l_ordre() {
        let mut report = RunReport::new(3);
        report.record("b.html", AuditOutcome::Verdict("ok".into()));
        report.record("a.html", AuditOutcome::Error("Erreur API : quota".into()));

        let json = report.to_json().unwrap();
        let b_pos = json.find("b.html").unwrap();
        let a_pos = json.find("a.html").unwrap();
        assert!(b_pos < a_pos, "l'ordre d'insertion doit être préservé");

        // Aller-retour : le document doit rester un objet JSON valide.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["b.html"], "ok");
        assert_eq!(value["a.html"], "Erreur API : quota");
    }

    #[test]
    fn test_info_json() {
        let json = render_info_json("clé absente").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_info"], "clé absente");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_compteurs() {
        let mut report = RunReport::new(10);
        report.record("index.html", AuditOutcome::Verdict("Aucun problème détecté.".into()));
        assert_eq!(report.processed(), 1);
        assert_eq!(report.configured, 10);
    }
}
