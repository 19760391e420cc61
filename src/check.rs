use itertools::Itertools;
use regex::Regex;

// Tone-marked vowels the restoration tables know about, one row per vowel,
// slots ordered neutral/macron/acute/caron/grave.
static TONAL_VOWELS: &[[char; 5]] = &[
    ['a', 'ā', 'á', 'ǎ', 'à'],
    ['e', 'ē', 'é', 'ě', 'è'],
    ['i', 'ī', 'í', 'ǐ', 'ì'],
    ['o', 'ō', 'ó', 'ǒ', 'ò'],
    ['u', 'ū', 'ú', 'ǔ', 'ù'],
    ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ'],
];

/// Compiles a regex matching one character of the written-finals alphabet:
/// an ASCII lowercase letter or a recognized precomposed tonal vowel.
fn get_finals_alphabet_regex_pattern() -> Regex {
    let mut pattern_list = String::from("a-z");
    for row in TONAL_VOWELS {
        // slot 0 is plain ASCII and already covered by a-z
        for c in &row[1..] {
            pattern_list.push(*c);
        }
    }
    pattern_list.push('ü');
    let pattern = format!("[{}]", pattern_list);

    Regex::new(&pattern).unwrap()
}

/// Checks that every whitespace-separated written final on the given lines
/// stays within the recognized alphabet. Returns one message per offending
/// final; combining marks (NFD input) are reported, not normalized.
pub fn check_finals<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut errors = vec![];
    let alphabet = get_finals_alphabet_regex_pattern();

    for (line_no, line) in lines.enumerate() {
        for written in line.split_whitespace() {
            let recognized: usize = alphabet.find_iter(written).map(|m| m.as_str().len()).sum();
            if recognized == written.len() {
                continue;
            }
            let unknown = written
                .chars()
                .filter(|c| !alphabet.is_match(&c.to_string()))
                .unique()
                .join(" ");
            errors.push(format!(
                "Validation Error: line {}: unrecognized characters in \"{}\": {}",
                line_no + 1,
                written,
                unknown
            ));
        }
    }
    errors
}
