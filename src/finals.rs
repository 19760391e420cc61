//! Undoes the orthographic shortcuts of written pinyin finals, recovering
//! the underlying phonemic form. Covers the three conventions from the
//! 汉语拼音方案: the y/w zero-initial placeholders, the dropped umlaut after
//! j/q/x, and the iou/uei/uen contractions after a real initial.
//!
//! Each rule is total: input that does not match its pattern comes back
//! unchanged. `restore_final` chains them in a fixed order.

use crate::tones;

/// Restores finals written with a zero-initial y/w placeholder.
/// yi -> i, ya -> ia, yu -> ü, yue -> üe, wu -> u, wa -> ua.
pub fn expand_zero_initial(written: &str) -> String {
    if let Some(rest) = written.strip_prefix('y') {
        let Some(first) = rest.chars().next() else {
            // bare "y" never occurs in real orthography
            return rest.to_owned();
        };
        if let Some(umlaut) = tones::umlaut_counterpart(first) {
            // y plus a u-row vowel collapse into the single ü-row char
            let mut restored = String::with_capacity(rest.len() + 2);
            restored.push(umlaut);
            restored.push_str(&rest[first.len_utf8()..]);
            restored
        } else if tones::is_i_vowel(first) {
            rest.to_owned()
        } else {
            format!("i{rest}")
        }
    } else if let Some(rest) = written.strip_prefix('w') {
        match rest.chars().next() {
            Some(first) if tones::is_u_vowel(first) => rest.to_owned(),
            _ => format!("u{rest}"),
        }
    } else {
        written.to_owned()
    }
}

/// Puts the umlaut back on u after j/q/x, where writing drops it.
/// ju -> jü, qu -> qü, xu -> xü; nü/lü are already written with ü.
pub fn restore_umlaut(written: &str) -> String {
    let mut chars = written.chars();
    let (Some(initial), Some(vowel)) = (chars.next(), chars.next()) else {
        return written.to_owned();
    };
    if matches!(initial, 'j' | 'q' | 'x') {
        if let Some(umlaut) = tones::umlaut_counterpart(vowel) {
            let mut restored = String::with_capacity(written.len() + 2);
            restored.push(initial);
            restored.push(umlaut);
            restored.push_str(chars.as_str());
            return restored;
        }
    }
    written.to_owned()
}

// A contracted suffix only expands behind a real initial, i.e. a non-empty
// run of plain lowercase letters filling the rest of the string. Zero-initial
// forms (you, wei, wen) were already expanded by expand_zero_initial and no
// longer end in a contracted suffix.
fn expand_suffix(written: &str, contracted: &[&str; 5], expanded: &[&str; 5]) -> String {
    for (short, long) in contracted.iter().zip(expanded.iter()) {
        if let Some(prefix) = written.strip_suffix(short) {
            if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_lowercase()) {
                return format!("{prefix}{long}");
            }
        }
    }
    written.to_owned()
}

/// niu -> niou
pub fn expand_iou(written: &str) -> String {
    expand_suffix(written, &tones::IU_SUFFIXES, &tones::IOU_SUFFIXES)
}

/// gui -> guei
pub fn expand_uei(written: &str) -> String {
    expand_suffix(written, &tones::UI_SUFFIXES, &tones::UEI_SUFFIXES)
}

/// lun -> luen
pub fn expand_uen(written: &str) -> String {
    expand_suffix(written, &tones::UN_SUFFIXES, &tones::UEN_SUFFIXES)
}

/// Runs all rules over a single written final, in one forward pass.
///
/// Order matters: zero-initial restoration must come first so that forms
/// like "yu" become "ü" before any consonant-initial pattern could match,
/// and umlaut restoration must precede the cluster expansions.
pub fn restore_final(written: &str) -> String {
    let restored = expand_zero_initial(written);
    let restored = restore_umlaut(&restored);
    let restored = expand_iou(&restored);
    let restored = expand_uei(&restored);
    expand_uen(&restored)
}
