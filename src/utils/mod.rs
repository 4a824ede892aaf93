//! Some utility functions

use crate::event::EventId;

/// Turn a title into a URL-safe token.
///
/// The result is lowercase ASCII: diacritics are transliterated, and every run of other characters becomes a single `-`.
pub fn slugify<S: AsRef<str>>(title: S) -> String {
    slug::slugify(title)
}

/// The path of the page of an umbrella, e.g. `vorkurs-2024-42`.
///
/// A title without any letter or digit has an empty slug: the path is then the bare ID.
pub fn planner_path<S: AsRef<str>>(title: S, id: EventId) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        return id.to_string();
    }
    format!("{}-{}", slug, id)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slugify("Sommerkurs"), "sommerkurs");
        assert_eq!(slugify("Vorkurs 2024"), "vorkurs-2024");
        assert_eq!(slugify("Übungen für Anfänger"), "ubungen-fur-anfanger");
        assert_eq!(slugify("C++ & Rust: Einführung!"), "c-rust-einfuhrung");
    }

    #[test]
    fn equivalent_titles_share_a_slug() {
        let expected = slugify("Vorkurs 2024");
        assert_eq!(slugify("Vorkurs 2024"), expected);
        assert_eq!(slugify("VORKURS 2024"), expected);
        assert_eq!(slugify("  vorkurs   2024  "), expected);
        assert_eq!(slugify("vorkurs_2024"), expected);
    }

    #[test]
    fn paths() {
        assert_eq!(planner_path("Sommerkurs", 42), "sommerkurs-42");
        assert_eq!(planner_path("Vorkurs 2024", 7), "vorkurs-2024-7");
    }

    #[test]
    fn symbol_only_titles() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(planner_path("!!!", 42), "42");
        assert_eq!(planner_path(" - ", 42), "42");
    }
}
