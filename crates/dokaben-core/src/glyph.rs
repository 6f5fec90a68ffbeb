//! Dokaben glyph transliteration: katakana to `:dokaben_xx:` emoji tokens.

use std::collections::HashMap;
use std::sync::OnceLock;

const GLYPH_ENTRIES: &[(char, &str)] = &[
    ('ア', ":dokaben_a:"),
    ('イ', ":dokaben_i:"),
    ('ウ', ":dokaben_u:"),
    ('エ', ":dokaben_e:"),
    ('オ', ":dokaben_o:"),
    ('ァ', ":dokaben_a_small:"),
    ('ィ', ":dokaben_i_small:"),
    ('ゥ', ":dokaben_u_small:"),
    ('ェ', ":dokaben_e_small:"),
    ('ォ', ":dokaben_o_small:"),
    ('カ', ":dokaben_ka:"),
    ('キ', ":dokaben_ki:"),
    ('ク', ":dokaben_ku:"),
    ('ケ', ":dokaben_ke:"),
    ('コ', ":dokaben_ko:"),
    ('ガ', ":dokaben_ga:"),
    ('ギ', ":dokaben_gi:"),
    ('グ', ":dokaben_gu:"),
    ('ゲ', ":dokaben_ge:"),
    ('ゴ', ":dokaben_go:"),
    ('サ', ":dokaben_sa:"),
    ('シ', ":dokaben_si:"),
    ('ス', ":dokaben_su:"),
    ('セ', ":dokaben_se:"),
    ('ソ', ":dokaben_so:"),
    ('ザ', ":dokaben_za:"),
    ('ジ', ":dokaben_zi:"),
    ('ズ', ":dokaben_zu:"),
    ('ゼ', ":dokaben_ze:"),
    ('ゾ', ":dokaben_zo:"),
    ('タ', ":dokaben_ta:"),
    ('チ', ":dokaben_ti:"),
    ('ツ', ":dokaben_tu:"),
    ('テ', ":dokaben_te:"),
    ('ト', ":dokaben_to:"),
    ('ダ', ":dokaben_da:"),
    ('ヂ', ":dokaben_di:"),
    ('ヅ', ":dokaben_du:"),
    ('デ', ":dokaben_de:"),
    ('ド', ":dokaben_do:"),
    ('ナ', ":dokaben_na:"),
    ('ニ', ":dokaben_ni:"),
    ('ヌ', ":dokaben_nu:"),
    ('ネ', ":dokaben_ne:"),
    ('ノ', ":dokaben_no:"),
    ('ハ', ":dokaben_ha:"),
    ('ヒ', ":dokaben_hi:"),
    ('フ', ":dokaben_hu:"),
    ('ヘ', ":dokaben_he:"),
    ('ホ', ":dokaben_ho:"),
    ('バ', ":dokaben_ba:"),
    ('ビ', ":dokaben_bi:"),
    ('ブ', ":dokaben_bu:"),
    ('ベ', ":dokaben_be:"),
    ('ボ', ":dokaben_bo:"),
    ('パ', ":dokaben_pa:"),
    ('ピ', ":dokaben_pi:"),
    ('プ', ":dokaben_pu:"),
    ('ペ', ":dokaben_pe:"),
    ('ポ', ":dokaben_po:"),
    ('マ', ":dokaben_ma:"),
    ('ミ', ":dokaben_mi:"),
    ('ム', ":dokaben_mu:"),
    ('メ', ":dokaben_me:"),
    ('モ', ":dokaben_mo:"),
    ('ヤ', ":dokaben_ya:"),
    ('ユ', ":dokaben_yu:"),
    ('ヨ', ":dokaben_yo:"),
    ('ラ', ":dokaben_ra:"),
    ('リ', ":dokaben_ri:"),
    ('ル', ":dokaben_ru:"),
    ('レ', ":dokaben_re:"),
    ('ロ', ":dokaben_ro:"),
    ('ッ', ":dokaben_tu_small:"),
    ('ャ', ":dokaben_ya_small:"),
    ('ュ', ":dokaben_yu_small:"),
    ('ョ', ":dokaben_yo_small:"),
    ('ワ', ":dokaben_wa:"),
    ('ヲ', ":dokaben_wo:"),
    ('ン', ":dokaben_n:"),
    ('ー', ":dokaben_-:"),
    ('！', ":dokaben_bikkuri:"),
    ('？', ":dokaben_hatena:"),
];

fn glyph_map() -> &'static HashMap<char, &'static str> {
    static INSTANCE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    INSTANCE.get_or_init(|| GLYPH_ENTRIES.iter().copied().collect())
}

/// Token for a single character, if it has one.
pub fn glyph(c: char) -> Option<&'static str> {
    glyph_map().get(&c).copied()
}

/// Replace every mapped character with its token; others pass through.
pub fn transliterate(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 4);
    for c in s.chars() {
        match glyph(c) {
            Some(token) => out.push_str(token),
            None => out.push(c),
        }
    }
    out
}
