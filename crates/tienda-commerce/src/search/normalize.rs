//! Accent- and case-folding for search text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold `text` for comparison: canonical decomposition, combining marks
/// removed, lowercased. `"Café Ñandú"` becomes `"cafe nandu"`.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize("Café Ñandú"), "cafe nandu");
        assert_eq!(normalize("ÁRBOL"), "arbol");
        assert_eq!(normalize("pingüino"), "pinguino");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize("mate cocido 2"), "mate cocido 2");
        assert_eq!(normalize(""), "");
    }
}
