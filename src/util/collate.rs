//! Locale-aware string ordering for table cells.
//!
//! Catalog data is mostly Spanish titles and author names. The native order
//! approximates the Spanish collation `localeCompare` applies in the browser:
//!
//! - case and diacritics are ignored at the primary level, using canonical
//!   decomposition (`Álvarez` sorts with `alvarez`, not after `Zapata`);
//! - `ñ` is its own letter, right after `n`;
//! - letters without a decomposition (`ł`, `ø`, `æ`, `ß`, ...) sort with
//!   their base letters;
//! - ties are broken on the exact text so the order is total.
//!
//! The browser host overrides this through [`crate::Dom::compare_text`].

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;

use std::cmp::Ordering;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

const COMBINING_TILDE: char = '\u{303}';

/// Sort key for a cell: trimmed and lowercased.
#[must_use]
pub fn sort_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Base letters for the Latin letters Unicode does not decompose.
fn expand(c: char) -> &'static str {
    match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ŧ' => "t",
        'ı' => "i",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        _ => "",
    }
}

/// Primary weights: base letter plus a tailoring rank (`ñ` ranks after `n`).
fn primary(text: &str) -> Vec<(char, u8)> {
    let mut key = Vec::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        decompose_canonical(c, |part| {
            if part == COMBINING_TILDE {
                if let Some(('n', rank @ 0)) = key.last_mut() {
                    *rank = 1;
                }
            }
            if is_combining_mark(part) {
                return;
            }
            match expand(part) {
                "" => key.push((part, 0)),
                base => key.extend(base.chars().map(|letter| (letter, 0))),
            }
        });
    }
    key
}

/// Compare two strings the way a reader expects a catalog to be ordered.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a).cmp(&primary(b)).then_with(|| a.cmp(b))
}
