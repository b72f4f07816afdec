//! Canonical glyph ordering, romanized labels and the contracted-sound
//! split table.

use crate::error::{OutlineError, Result};

/// Glyph and Hepburn label, in canonical processing order.
pub const HIRAGANA: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぁ", "xa"), ("ぃ", "xi"), ("ぅ", "xu"), ("ぇ", "xe"), ("ぉ", "xo"),
    ("ゃ", "xya"), ("ゅ", "xyu"), ("ょ", "xyo"),
];

const COMPOUND_BASES: &[char] = &['き', 'ぎ', 'し', 'じ', 'ち', 'に', 'ひ', 'び', 'ぴ', 'み', 'り'];
const COMPOUND_SMALLS: &[char] = &['ゃ', 'ゅ', 'ょ'];

pub fn canonical_order() -> impl Iterator<Item = &'static str> {
    HIRAGANA.iter().map(|(g, _)| *g)
}

pub fn romanized_label(glyph: &str) -> Result<&'static str> {
    HIRAGANA
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, label)| *label)
        .ok_or_else(|| OutlineError::UnknownGlyph(glyph.to_string()))
}

/// `(base, small)` for a contracted-sound glyph, `None` for anything else.
pub fn split_compound(glyph: &str) -> Option<(&str, &str)> {
    let mut chars = glyph.char_indices();
    let (_, base) = chars.next()?;
    let (at, small) = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if COMPOUND_BASES.contains(&base) && COMPOUND_SMALLS.contains(&small) {
        Some((&glyph[..at], &glyph[at..]))
    } else {
        None
    }
}
