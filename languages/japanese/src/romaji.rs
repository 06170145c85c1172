use wana_kana::ConvertJapanese;
use yomu_core::Romanizer;

/// Hepburn romanization of kana readings via `wana_kana`.
///
/// Katakana and hiragana both come out lowercase; `ン` before a vowel or
/// `y` is written `n'`.
pub struct HepburnRomanizer;

impl Romanizer for HepburnRomanizer {
    fn romanize(&self, reading: &str) -> String {
        reading.to_romaji()
    }
}
