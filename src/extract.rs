//! Extraction du texte visible d'un document HTML.
//!
//! Consomme le tokenizer de `html5ever` (permissif, jamais bloquant sur du
//! balisage mal formé) et reconstruit le texte tel qu'un lecteur le verrait :
//! sans balises, sans contenu de script/style, avec une ligne par bloc.

use std::cell::{Cell, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use phf::phf_set;

/// Balises dont le contenu n'est pas du texte visible.
static SKIP_TAGS: phf::Set<&'static str> = phf_set! {
    "script", "style", "noscript", "svg", "code", "pre",
};

/// Balises de bloc : leur ouverture force un saut de ligne dans le texte.
static BLOCK_TAGS: phf::Set<&'static str> = phf_set! {
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "div",
    "section", "article", "header", "footer", "nav", "td", "th",
};

/// Marqueur de saut de ligne inséré à l'ouverture d'une balise de bloc.
const LINE_BREAK: &str = "\n";

/// Collecteur de texte branché sur le flux de tokens HTML.
///
/// `skip_depth` est un simple compteur non négatif, pas une pile : seule
/// l'information « le contenu courant est-il visible ? » est nécessaire.
/// Les balises à ignorer imbriquées (même identiques) s'empilent via ce
/// compteur ; une fermeture orpheline ne le fait jamais passer sous zéro.
///
/// Le tokenizer émet le texte par morceaux (notamment autour des entités) ;
/// `current` accumule les morceaux d'un même nœud texte, vidé à chaque
/// balise rencontrée.
#[derive(Default)]
struct TextSink {
    parts: RefCell<Vec<String>>,
    current: RefCell<String>,
    skip_depth: Cell<usize>,
}

impl TextSink {
    /// Termine le nœud texte en cours : nettoyé, conservé s'il reste
    /// quelque chose.
    fn flush_current(&self) {
        let mut current = self.current.borrow_mut();
        let text = current.trim();
        if !text.is_empty() {
            self.parts.borrow_mut().push(text.to_string());
        }
        current.clear();
    }

    /// Assemble les fragments collectés en texte final : fragments joints
    /// par des espaces, lignes nettoyées, lignes vides supprimées.
    fn into_text(self) -> String {
        self.flush_current();
        let raw = self.parts.into_inner().join(" ");
        let lines: Vec<&str> = raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        lines.join("\n")
    }
}

impl TokenSink for TextSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                self.flush_current();
                let name = &*tag.name;
                match tag.kind {
                    TagKind::StartTag => {
                        if SKIP_TAGS.contains(name) && !tag.self_closing {
                            self.skip_depth.set(self.skip_depth.get() + 1);
                        }
                        // Un saut de ligne est émis même en zone ignorée :
                        // sans texte visible derrière, il sera éliminé au
                        // nettoyage final.
                        if BLOCK_TAGS.contains(name) {
                            self.parts.borrow_mut().push(LINE_BREAK.to_string());
                        }
                    }
                    TagKind::EndTag => {
                        if SKIP_TAGS.contains(name) {
                            // Plancher à zéro : une balise fermante sans
                            // ouvrante ne doit pas corrompre l'état.
                            self.skip_depth.set(self.skip_depth.get().saturating_sub(1));
                        }
                    }
                }
            }
            Token::CharacterTokens(data) => {
                if self.skip_depth.get() == 0 {
                    self.current.borrow_mut().push_str(&data);
                }
            }
            // Commentaires, doctype, erreurs de parse : rien à collecter.
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Extrait le texte visible d'un document HTML complet.
///
/// Un document vide (ou sans texte visible) produit une chaîne vide ;
/// l'appelant doit alors ignorer la page plutôt que d'envoyer une
/// requête d'audit vide.
pub fn extract_text(html: &str) -> String {
    let mut tokenizer = Tokenizer::new(TextSink::default(), TokenizerOpts::default());
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balises_et_script_supprimes() {
        let html = "<p>Le marché est <b>bullish</b> aujourd'hui.</p><script>var x=1;</script>";
        assert_eq!(extract_text(html), "Le marché est bullish aujourd'hui.");
    }

    #[test]
    fn test_document_vide() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("<div><script>let a;</script></div>"), "");
    }

    #[test]
    fn test_scripts_imbriques_via_compteur() {
        // style dans noscript : la profondeur doit redescendre à zéro
        // seulement après les deux fermetures.
        let html = "<div><noscript><style>.a{}</style>caché</noscript>visible</div>";
        assert_eq!(extract_text(html), "visible");
    }

    #[test]
    fn test_fermeture_orpheline_toleree() {
        // </script> sans ouverture : le compteur reste à zéro et le texte
        // qui suit est conservé.
        let html = "</script><p>texte</p></style><p>suite</p>";
        assert_eq!(extract_text(html), "texte\nsuite");
    }

    #[test]
    fn test_sauts_de_ligne_par_bloc() {
        let html = "<h1>Titre</h1><p>Premier.</p><p>Second.</p>";
        assert_eq!(extract_text(html), "Titre\nPremier.\nSecond.");
    }

    #[test]
    fn test_aucune_ligne_vide() {
        let html = "<div></div><div></div><p>  seul  </p><div>\n\n</div>";
        let text = extract_text(html);
        assert_eq!(text, "seul");
        assert!(text.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_bloc_dans_zone_ignoree_sans_ligne_parasite() {
        // Un <div> à l'intérieur d'un <svg> produit un saut de ligne qui
        // doit disparaître au nettoyage, faute de texte visible.
        let html = "<p>avant</p><svg><div>masqué</div></svg><p>après</p>";
        assert_eq!(extract_text(html), "avant\naprès");
    }

    #[test]
    fn test_entites_decodees() {
        let html = "<p>march&eacute; &amp; co</p>";
        assert_eq!(extract_text(html), "marché & co");
    }

    #[test]
    fn test_structure_tableau() {
        let html = "<table><tr><td>BTC</td><td>64 000 $</td></tr></table>";
        assert_eq!(extract_text(html), "BTC\n64 000 $");
    }

    #[test]
    fn test_code_en_ligne_ignore() {
        let html = "<p>Utiliser <code>cargo build</code> pour compiler.</p>";
        assert_eq!(extract_text(html), "Utiliser pour compiler.");
    }
}
