use chrono::{DateTime, Utc};

/// URL-safe identifier derived from free text: lowercase, whitespace
/// runs collapsed to a single hyphen, everything outside [a-z0-9_-]
/// dropped.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_hyphen = !out.is_empty();
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        }
    }

    out
}

/// Post slugs get a millisecond timestamp suffix; that suffix is the
/// only collision defense.
pub fn post_slug(title: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}", slugify(title), at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("a \t b\n\nc"), "a-b-c");
    }

    #[test]
    fn test_slugify_strips_non_word_characters() {
        assert_eq!(slugify("C'est la vie!"), "cest-la-vie");
        assert_eq!(slugify("rust_2026: the year"), "rust_2026-the-year");
    }

    #[test]
    fn test_slugify_degenerate_input_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_post_slug_appends_millis() {
        let at = Utc.with_ymd_and_hms(2026, 1, 4, 22, 15, 6).unwrap();
        assert_eq!(
            post_slug("Hello World", at),
            format!("hello-world-{}", at.timestamp_millis())
        );
    }

    #[test]
    fn test_post_slug_degenerate_title_keeps_suffix() {
        let at = Utc.with_ymd_and_hms(2026, 1, 4, 22, 15, 6).unwrap();
        assert_eq!(post_slug("!!!", at), format!("-{}", at.timestamp_millis()));
    }
}
