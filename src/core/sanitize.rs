// src/core/sanitize.rs

/// Replace each line break (`\r\n`, `\n` or `\r`) with a single space.
pub fn collapse_line_breaks(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Drop the first and last character. Example sentences arrive wrapped in
/// decorative quotes (`‘…’`).
pub fn strip_decorations(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// `‘He ran\nhome.’` → `He ran home.`; `None` when nothing is left.
pub fn clean_example(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let cleaned = collapse_line_breaks(strip_decorations(raw));
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| s!(cleaned))
}

/// Split a synonym run on `,` or `;`, dropping blank fragments and trimming
/// the rest. Duplicates are kept.
pub fn split_synonyms(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|frag| !frag.is_empty())
        .map(|frag| s!(frag))
        .collect()
}

/// `Some(trimmed)` unless the trimmed text is empty.
pub fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| s!(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("‘he ran’", Some("he ran"))]
    #[case("‘the dog\nran\r\naway’", Some("the dog ran away"))]
    #[case("‘  padded\r’", Some("padded"))]
    #[case("‘’", None)]
    #[case("x", None)]
    #[case("", None)]
    fn example_cleaning(#[case] raw: &str, #[case] want: Option<&str>) {
        assert_eq!(clean_example(raw).as_deref(), want);
    }

    #[test]
    fn cleaned_example_has_no_edges_or_breaks() {
        let out = clean_example("“line one\nline two”").unwrap();
        assert!(!out.starts_with('“') && !out.ends_with('”'));
        assert!(!out.contains('\n') && !out.contains('\r'));
    }

    #[rstest]
    #[case("dash, sprint; race", &["dash", "sprint", "race"])]
    #[case(" , ;  ;gallop,", &["gallop"])]
    #[case("run, run", &["run", "run"])]
    #[case("", &[])]
    #[case("   ", &[])]
    fn synonym_splitting(#[case] raw: &str, #[case] want: &[&str]) {
        let got = split_synonyms(raw);
        assert_eq!(got, want);
        assert!(got.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn strip_decorations_is_char_aware() {
        assert_eq!(strip_decorations("‘é’"), "é");
        assert_eq!(strip_decorations("a"), "");
        assert_eq!(strip_decorations(""), "");
    }
}
