/// The five tone states a precomposed pinyin vowel can carry.
/// Neutral means the bare letter without a diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral = 0,
    First,
    Second,
    Third,
    Fourth,
}

pub const TONES: [Tone; 5] = [
    Tone::Neutral,
    Tone::First,
    Tone::Second,
    Tone::Third,
    Tone::Fourth,
];

/// Vowel identities that take part in the finals rewrite rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelClass {
    U,
    UUmlaut,
    I,
}

// One char per tone slot: neutral, macron, acute, caron, grave.
const U_VOWELS: [char; 5] = ['u', 'ū', 'ú', 'ǔ', 'ù'];
const V_VOWELS: [char; 5] = ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ'];
const I_VOWELS: [char; 5] = ['i', 'ī', 'í', 'ǐ', 'ì'];

// Contracted suffixes and their full three-vowel forms, tone slots aligned.
// iou/uei/uen are written iu/ui/un after a real initial; the tone mark sits
// where the orthography left it, so uen carries it on the leading u.
pub const IU_SUFFIXES: [&str; 5] = ["iu", "iū", "iú", "iǔ", "iù"];
pub const IOU_SUFFIXES: [&str; 5] = ["iou", "ioū", "ioú", "ioǔ", "ioù"];
pub const UI_SUFFIXES: [&str; 5] = ["ui", "uī", "uí", "uǐ", "uì"];
pub const UEI_SUFFIXES: [&str; 5] = ["uei", "ueī", "ueí", "ueǐ", "ueì"];
pub const UN_SUFFIXES: [&str; 5] = ["un", "ūn", "ún", "ǔn", "ùn"];
pub const UEN_SUFFIXES: [&str; 5] = ["uen", "ūen", "úen", "ǔen", "ùen"];

fn family_table(class: VowelClass) -> &'static [char; 5] {
    match class {
        VowelClass::U => &U_VOWELS,
        VowelClass::UUmlaut => &V_VOWELS,
        VowelClass::I => &I_VOWELS,
    }
}

/// Returns the character for a vowel identity in a given tone.
pub fn vowel_char(class: VowelClass, tone: Tone) -> char {
    family_table(class)[tone as usize]
}

/// Identifies a character as one of the tabled tonal vowels, if it is one.
pub fn classify_vowel(c: char) -> Option<(VowelClass, Tone)> {
    for class in [VowelClass::U, VowelClass::UUmlaut, VowelClass::I] {
        if let Some(pos) = family_table(class).iter().position(|&v| v == c) {
            return Some((class, TONES[pos]));
        }
    }
    None
}

pub fn is_u_vowel(c: char) -> bool {
    U_VOWELS.contains(&c)
}

pub fn is_i_vowel(c: char) -> bool {
    I_VOWELS.contains(&c)
}

/// Maps a u-family vowel to the ü-family vowel with the same tone.
/// Returns None for anything that is not a u-family vowel.
pub fn umlaut_counterpart(c: char) -> Option<char> {
    let pos = U_VOWELS.iter().position(|&v| v == c)?;
    Some(V_VOWELS[pos])
}
