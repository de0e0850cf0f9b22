use std::path::PathBuf;

/// Configuration de l'audit.
#[derive(Clone, Debug)]
pub struct Config {
    /// Racine du site contenant les pages HTML
    pub site_root: PathBuf,
    /// Pages à auditer, dans l'ordre
    pub files: Vec<String>,
    /// Modèle LLM à utiliser
    pub model: String,
    /// Clé API (absente → audit ignoré, pas une erreur)
    pub api_key: Option<String>,
    /// URL de base d'une API compatible OpenAI
    pub api_base_url: String,
    /// Taille maximale de la réponse (tokens)
    pub max_tokens: u32,
}

/// Pages du site, dans l'ordre d'audit.
const HTML_FILES: &[&str] = &[
    "index.html",
    "markets.html",
    "crypto.html",
    "geopolitics.html",
    "commodities.html",
    "etf.html",
    "analysis.html",
    "mentions-legales.html",
    "confidentialite.html",
    "cgu.html",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            files: HTML_FILES.iter().map(|f| f.to_string()).collect(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            api_base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 2048,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            site_root: std::env::var("SITE_ROOT").map(PathBuf::from).unwrap_or(default.site_root),
            files: default.files,
            model: std::env::var("LLM_MODEL_NAME").unwrap_or(default.model),
            api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.api_base_url),
            max_tokens: std::env::var("LLM_MAX_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_tokens),
        }
    }
}
