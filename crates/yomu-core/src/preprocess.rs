/// Surfaces that are never sent for translation
const SKIPPED_SURFACES: [&str; 5] = ["。", "、", "・", ",", "."];

/// Trim input text, `None` when nothing is left to analyze
pub fn prepare_input(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Punctuation from the fixed set and lone hiragana get no translation
pub fn should_translate(surface: &str) -> bool {
    !(SKIPPED_SURFACES.contains(&surface) || is_single_hiragana(surface))
}

// ぁ (U+3041) through ん (U+3093)
fn is_single_hiragana(surface: &str) -> bool {
    let mut chars = surface.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('\u{3041}'..='\u{3093}'), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_input() {
        assert_eq!(prepare_input(""), None);
        assert_eq!(prepare_input(" \n\t　"), None);
        assert_eq!(prepare_input("  日本語\n"), Some("日本語"));
    }

    #[test]
    fn test_punctuation_is_skipped() {
        for surface in ["。", "、", "・", ",", "."] {
            assert!(!should_translate(surface), "{surface} should be skipped");
        }
    }

    #[test]
    fn test_single_hiragana_is_skipped() {
        for surface in ["ぁ", "の", "を", "ん"] {
            assert!(!should_translate(surface), "{surface} should be skipped");
        }
    }

    #[test]
    fn test_other_surfaces_are_translated() {
        for surface in ["この", "ます", "ア", "日", "日本語", "ゔ", "！", "?"] {
            assert!(should_translate(surface), "{surface} should be translated");
        }
    }
}
