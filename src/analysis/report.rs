//! Report text rendering
//!
//! Section order and wording are consumed by clients; keep them stable.

use super::AnalysisResult;

const BANNER_PREFIX: &str = "🧠 Mode d'analyse linguistique : ";

/// Casing rules applied to the role label in the first-turn banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseLocale {
    /// Default Unicode uppercasing; French has no special casing
    #[default]
    French,
    /// Dotted/dotless i distinction (`i` becomes `İ`)
    Turkish,
}

impl CaseLocale {
    /// Parse a language tag such as `fr`, `fr-FR`, `tr` or `tr_TR`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "fr" => Some(CaseLocale::French),
            "tr" | "az" => Some(CaseLocale::Turkish),
            _ => None,
        }
    }

    pub fn to_upper(self, text: &str) -> String {
        match self {
            CaseLocale::French => text.to_uppercase(),
            CaseLocale::Turkish => text
                .chars()
                .map(|c| if c == 'i' { 'İ' } else { c })
                .collect::<String>()
                .to_uppercase(),
        }
    }
}

/// First-turn banner line naming the session role
pub fn render_banner(role_label: &str, casing: CaseLocale) -> String {
    format!("{BANNER_PREFIX}{}\n", casing.to_upper(role_label))
}

/// Render the multi-section report for one analysis
pub fn render_report(analysis: &AnalysisResult) -> String {
    format!(
        "🔍 Analyse linguistique de votre texte :\n\
         \n\
         📏 Longueur : {} caractères\n\
         📊 Statistiques :\n\
         - Mots : {}\n\
         - Voyelles : {}\n\
         - Consonnes : {}\n\
         \n\
         🎭 Jeux de mots :\n\
         - Mot le plus long : {}\n\
         - Mot le plus court : {}\n\
         \n\
         🧩 Défi linguistique :\n\
         {}\n\
         \n\
         🎲 Bonus créatif :\n\
         {}\n",
        analysis.length,
        analysis.word_count,
        analysis.vowel_count,
        analysis.consonant_count,
        analysis.longest_word,
        analysis.shortest_word,
        analysis.challenge,
        analysis.bonus,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            length: 16,
            word_count: 3,
            vowel_count: 6,
            consonant_count: 8,
            longest_word: "bonjour".to_string(),
            shortest_word: "le".to_string(),
            challenge: "défi".to_string(),
            bonus: "bonus".to_string(),
        }
    }

    #[test]
    fn test_report_layout() {
        let expected = "🔍 Analyse linguistique de votre texte :\n\
\n\
📏 Longueur : 16 caractères\n\
📊 Statistiques :\n\
- Mots : 3\n\
- Voyelles : 6\n\
- Consonnes : 8\n\
\n\
🎭 Jeux de mots :\n\
- Mot le plus long : bonjour\n\
- Mot le plus court : le\n\
\n\
🧩 Défi linguistique :\n\
défi\n\
\n\
🎲 Bonus créatif :\n\
bonus\n";
        assert_eq!(render_report(&sample()), expected);
    }

    #[test]
    fn test_report_section_order() {
        let report = render_report(&sample());
        let headers = [
            "🔍 Analyse",
            "📏 Longueur",
            "📊 Statistiques",
            "🎭 Jeux de mots",
            "🧩 Défi",
            "🎲 Bonus",
        ];
        let positions: Vec<_> = headers.iter().filter_map(|h| report.find(h)).collect();
        assert_eq!(positions.len(), headers.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_banner_uppercases_label() {
        assert_eq!(
            render_banner("Assistant", CaseLocale::French),
            "🧠 Mode d'analyse linguistique : ASSISTANT\n"
        );
        assert_eq!(
            render_banner("Traducteur Anglais-Français", CaseLocale::French),
            "🧠 Mode d'analyse linguistique : TRADUCTEUR ANGLAIS-FRANÇAIS\n"
        );
    }

    #[test]
    fn test_turkish_casing_dots_i() {
        assert_eq!(CaseLocale::Turkish.to_upper("guide"), "GUİDE");
        assert_eq!(CaseLocale::French.to_upper("guide"), "GUIDE");
    }

    #[test]
    fn test_case_locale_tags() {
        assert_eq!(CaseLocale::from_tag("fr"), Some(CaseLocale::French));
        assert_eq!(CaseLocale::from_tag("fr-FR"), Some(CaseLocale::French));
        assert_eq!(CaseLocale::from_tag("TR_tr"), Some(CaseLocale::Turkish));
        assert_eq!(CaseLocale::from_tag("de"), None);
        assert_eq!(CaseLocale::default(), CaseLocale::French);
    }
}
