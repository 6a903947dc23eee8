/// Turn a raw application id into the key used for every equality check.
///
/// `None` and empty input both give an empty key. Otherwise the id is
/// lower-cased and trimmed.
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> String {
    match raw.into() {
        Some(id) if !id.is_empty() => id.to_lowercase().trim().to_string(),
        _ => String::new(),
    }
}

/// Whether two ids name the same application by comparison key.
pub fn same_app(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_give_empty_key() {
        assert_eq!(normalize(None::<&str>), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Firefox.Desktop\t"), "firefox.desktop");
        assert_eq!(normalize("Foo "), normalize("foo"));
    }

    #[test]
    fn test_idempotent() {
        for raw in ["", " X ", "org.GNOME.Nautilus", "\nKitty", "ÄPP"] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_same_app() {
        assert!(same_app("XTERM", "xterm"));
        assert!(same_app(" kitty", "Kitty "));
        assert!(!same_app("kitty", "kitty.desktop"));
    }
}
