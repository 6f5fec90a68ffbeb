//! Single-character toggle tables for the dakuten and kigou keys.
//!
//! The dakuten table is not an involution. The ハ row and ツ step through
//! three forms (ハ→バ→パ→ハ, ツ→ッ→ヅ→ツ), and vowels / ヤ row toggle
//! between large and small kana.

use std::collections::HashMap;
use std::sync::OnceLock;

const DAKUTEN_ENTRIES: &[(char, char)] = &[
    ('カ', 'ガ'),
    ('ガ', 'カ'),
    ('キ', 'ギ'),
    ('ギ', 'キ'),
    ('ク', 'グ'),
    ('グ', 'ク'),
    ('ケ', 'ゲ'),
    ('ゲ', 'ケ'),
    ('コ', 'ゴ'),
    ('ゴ', 'コ'),
    ('サ', 'ザ'),
    ('ザ', 'サ'),
    ('シ', 'ジ'),
    ('ジ', 'シ'),
    ('ス', 'ズ'),
    ('ズ', 'ス'),
    ('セ', 'ゼ'),
    ('ゼ', 'セ'),
    ('ソ', 'ゾ'),
    ('ゾ', 'ソ'),
    ('タ', 'ダ'),
    ('ダ', 'タ'),
    ('チ', 'ヂ'),
    ('ヂ', 'チ'),
    ('ツ', 'ッ'),
    ('ッ', 'ヅ'),
    ('ヅ', 'ツ'),
    ('テ', 'デ'),
    ('デ', 'テ'),
    ('ト', 'ド'),
    ('ド', 'ト'),
    ('ハ', 'バ'),
    ('バ', 'パ'),
    ('パ', 'ハ'),
    ('ヒ', 'ビ'),
    ('ビ', 'ピ'),
    ('ピ', 'ヒ'),
    ('フ', 'ブ'),
    ('ブ', 'プ'),
    ('プ', 'フ'),
    ('ヘ', 'ベ'),
    ('ベ', 'ペ'),
    ('ペ', 'ヘ'),
    ('ホ', 'ボ'),
    ('ボ', 'ポ'),
    ('ポ', 'ホ'),
    ('ア', 'ァ'),
    ('ァ', 'ア'),
    ('イ', 'ィ'),
    ('ィ', 'イ'),
    ('ウ', 'ゥ'),
    ('ゥ', 'ウ'),
    ('エ', 'ェ'),
    ('ェ', 'エ'),
    ('オ', 'ォ'),
    ('ォ', 'オ'),
    ('ヤ', 'ャ'),
    ('ャ', 'ヤ'),
    ('ユ', 'ュ'),
    ('ュ', 'ユ'),
    ('ヨ', 'ョ'),
    ('ョ', 'ヨ'),
];

// Insertion order matters: the second ！ entry replaces the first.
const KIGOU_ENTRIES: &[(char, char)] = &[('？', '！'), ('！', '？'), ('！', 'ー')];

/// A character→character lookup table built once on first use.
pub struct ToggleTable {
    map: HashMap<char, char>,
}

impl ToggleTable {
    fn from_entries(entries: &[(char, char)]) -> Self {
        // collect() keeps the last value for a repeated key.
        Self {
            map: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub fn dakuten_table() -> &'static ToggleTable {
    static INSTANCE: OnceLock<ToggleTable> = OnceLock::new();
    INSTANCE.get_or_init(|| ToggleTable::from_entries(DAKUTEN_ENTRIES))
}

pub fn kigou_table() -> &'static ToggleTable {
    static INSTANCE: OnceLock<ToggleTable> = OnceLock::new();
    INSTANCE.get_or_init(|| ToggleTable::from_entries(KIGOU_ENTRIES))
}

/// Next form of `c` under the dakuten key, if it has one.
pub fn toggle_dakuten(c: char) -> Option<char> {
    dakuten_table().get(c)
}

/// Next form of `c` under the kigou key, if it has one.
pub fn toggle_kigou(c: char) -> Option<char> {
    kigou_table().get(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voiced_pairs_toggle() {
        assert_eq!(toggle_dakuten('カ'), Some('ガ'));
        assert_eq!(toggle_dakuten('ガ'), Some('カ'));
        assert_eq!(toggle_dakuten('ゾ'), Some('ソ'));
        assert_eq!(toggle_dakuten('ト'), Some('ド'));
    }

    #[test]
    fn test_small_kana_toggle() {
        assert_eq!(toggle_dakuten('ア'), Some('ァ'));
        assert_eq!(toggle_dakuten('ァ'), Some('ア'));
        assert_eq!(toggle_dakuten('ヨ'), Some('ョ'));
        assert_eq!(toggle_dakuten('ョ'), Some('ヨ'));
    }

    #[test]
    fn test_three_cycles() {
        for start in ['ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'ツ'] {
            let a = toggle_dakuten(start).unwrap();
            let b = toggle_dakuten(a).unwrap();
            assert_ne!(a, start);
            assert_ne!(b, start);
            assert_eq!(toggle_dakuten(b), Some(start), "cycle from {start}");
        }
        assert_eq!(toggle_dakuten('ツ'), Some('ッ'));
        assert_eq!(toggle_dakuten('ッ'), Some('ヅ'));
        assert_eq!(toggle_dakuten('ヅ'), Some('ツ'));
        assert_eq!(toggle_dakuten('パ'), Some('ハ'));
    }

    #[test]
    fn test_dakuten_misses() {
        for c in ['ナ', 'マ', 'ラ', 'ワ', 'ン', 'ー', 'a', '？'] {
            assert_eq!(toggle_dakuten(c), None, "{c}");
        }
        assert_eq!(dakuten_table().len(), DAKUTEN_ENTRIES.len());
    }

    #[test]
    fn test_kigou_last_write_wins() {
        assert_eq!(kigou_table().len(), 2);
        assert_eq!(toggle_kigou('？'), Some('！'));
        assert_eq!(toggle_kigou('！'), Some('ー'));
        assert!(!kigou_table().contains('ー'));
        assert_eq!(toggle_kigou('?'), None);
    }
}
