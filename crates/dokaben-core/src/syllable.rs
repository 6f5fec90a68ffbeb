//! The flick grid: one key per consonant row, five characters per key.

use crate::fling::Direction;

/// First and last primary codes the host layout uses for syllable keys.
/// Keys in this range are resolved on release rather than on key press.
pub const SYLLABLE_KEY_FIRST: u32 = 0x30A2;
pub const SYLLABLE_KEY_LAST: u32 = 0x30FF;

pub fn is_syllable_key(code: i32) -> bool {
    u32::try_from(code).is_ok_and(|c| (SYLLABLE_KEY_FIRST..=SYLLABLE_KEY_LAST).contains(&c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantRow {
    A,
    Ka,
    Sa,
    Ta,
    Na,
    Ha,
    Ma,
    Ya,
    Ra,
    /// ワ ヲ ン plus the prolonged sound mark.
    Wa,
}

// center, left, up, right, down
const GRID: [[Option<char>; 5]; 10] = [
    [Some('ア'), Some('イ'), Some('ウ'), Some('エ'), Some('オ')],
    [Some('カ'), Some('キ'), Some('ク'), Some('ケ'), Some('コ')],
    [Some('サ'), Some('シ'), Some('ス'), Some('セ'), Some('ソ')],
    [Some('タ'), Some('チ'), Some('ツ'), Some('テ'), Some('ト')],
    [Some('ナ'), Some('ニ'), Some('ヌ'), Some('ネ'), Some('ノ')],
    [Some('ハ'), Some('ヒ'), Some('フ'), Some('ヘ'), Some('ホ')],
    [Some('マ'), Some('ミ'), Some('ム'), Some('メ'), Some('モ')],
    [Some('ヤ'), None, Some('ユ'), None, Some('ヨ')],
    [Some('ラ'), Some('リ'), Some('ル'), Some('レ'), Some('ロ')],
    [Some('ワ'), Some('ヲ'), Some('ン'), Some('ー'), None],
];

impl ConsonantRow {
    pub const ALL: [ConsonantRow; 10] = [
        ConsonantRow::A,
        ConsonantRow::Ka,
        ConsonantRow::Sa,
        ConsonantRow::Ta,
        ConsonantRow::Na,
        ConsonantRow::Ha,
        ConsonantRow::Ma,
        ConsonantRow::Ya,
        ConsonantRow::Ra,
        ConsonantRow::Wa,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The character a key of this row produces without a swipe. The host
    /// layout uses its code point as the key's primary code.
    pub fn key_char(self) -> char {
        // Every row has a center character.
        GRID[self.index()][0].unwrap_or('\u{30A2}')
    }

    /// Row for a key primary code, or `None` if the code is not a row key.
    pub fn from_key_code(code: i32) -> Option<Self> {
        let c = char::from_u32(u32::try_from(code).ok()?)?;
        Self::ALL.into_iter().find(|row| row.key_char() == c)
    }

    /// Look up a row key by its romanized name ("a", "ka", ..., "wa") or by
    /// its center character.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let by_name = match lower.as_str() {
            "a" => Some(Self::A),
            "ka" => Some(Self::Ka),
            "sa" => Some(Self::Sa),
            "ta" => Some(Self::Ta),
            "na" => Some(Self::Na),
            "ha" => Some(Self::Ha),
            "ma" => Some(Self::Ma),
            "ya" => Some(Self::Ya),
            "ra" => Some(Self::Ra),
            "wa" => Some(Self::Wa),
            _ => None,
        };
        by_name.or_else(|| {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Self::from_key_code(c as i32),
                _ => None,
            }
        })
    }
}

/// Resolve a flick. Unset slots (ヤ row left/right, ワ row down) yield `None`.
pub fn resolve(row: ConsonantRow, direction: Direction) -> Option<char> {
    GRID[row.index()][direction.index()]
}

/// Resolve directly from a key primary code.
pub fn resolve_key(code: i32, direction: Direction) -> Option<char> {
    ConsonantRow::from_key_code(code).and_then(|row| resolve(row, direction))
}
