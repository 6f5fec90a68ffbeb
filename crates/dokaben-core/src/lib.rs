pub mod fling;
pub mod glyph;
pub mod kana;
pub mod settings;
pub mod syllable;
pub mod unicode;
