use std::sync::OnceLock;

use regex::Regex;

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid slug regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid slug regex"))
}

/// Derive a URL slug from a title.
///
/// Lower-cases, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// turns whitespace runs into a single hyphen, collapses repeated hyphens and
/// trims hyphens at both ends. Never fails: a title with nothing usable yields
/// an empty string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = disallowed().replace_all(&lowered, "");
    let hyphenated = whitespace_runs().replace_all(&stripped, "-");
    let collapsed = hyphen_runs().replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("My Cool Project!"), "my-cool-project");
    }

    #[test]
    fn slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Rust   --  Actix  "), "rust-actix");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn slugify_keeps_digits_and_existing_hyphens() {
        assert_eq!(slugify("Web3-Wallet v2"), "web3-wallet-v2");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Über"), "caf-ber");
    }

    #[test]
    fn slugify_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("---"), "");
    }
}
