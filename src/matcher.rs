use crate::model::DesktopEntry;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Highest-scoring entry by display name. Ties keep the earlier entry.
    ///
    /// Only names containing every word of the query as a whole word are
    /// scored, so "xterm" never lands on "Xfce Terminal".
    pub fn best_match(&mut self, query: &str, entries: &[DesktopEntry]) -> Option<(usize, u32)> {
        if query.trim().is_empty() {
            return None;
        }
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();
        let mut best: Option<(usize, u32)> = None;

        for (index, entry) in entries.iter().enumerate() {
            if !has_all_words(query, &entry.name) {
                continue;
            }
            let haystack = Utf32Str::new(&entry.name, &mut buf);
            if let Some(score) = pattern.score(haystack, &mut self.matcher) {
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((index, score));
                }
            }
        }
        best
    }
}

fn has_all_words(query: &str, name: &str) -> bool {
    let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
    query
        .split_whitespace()
        .all(|q| words.iter().any(|w| *w == q.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DesktopEntry> {
        vec![
            DesktopEntry::new("org.gnome.Nautilus.desktop", "Files"),
            DesktopEntry::new("firefox.desktop", "Firefox Web Browser"),
            DesktopEntry::new("gimp.desktop", "GNU Image Manipulation Program"),
        ]
    }

    #[test]
    fn test_best_match_by_name() {
        let mut matcher = FuzzyMatcher::new();
        let (index, score) = matcher.best_match("firefox", &entries()).unwrap();
        assert_eq!(index, 1);
        assert!(score > 0);
    }

    #[test]
    fn test_partial_words_do_not_match() {
        let mut matcher = FuzzyMatcher::new();
        let entries = vec![
            DesktopEntry::new("xfce4-terminal.desktop", "Xfce Terminal"),
            DesktopEntry::new("org.gnome.TextEditor.desktop", "Text Editor"),
        ];
        assert_eq!(matcher.best_match("xterm", &entries), None);
        assert_eq!(matcher.best_match("tex", &entries), None);
        assert_eq!(matcher.best_match("terminal", &entries).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_has_all_words() {
        assert!(has_all_words("visual CODE", "Visual Studio Code"));
        assert!(!has_all_words("vis", "Visual Studio Code"));
    }

    #[test]
    fn test_no_match() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.best_match("zzzqqq", &entries()), None);
        assert_eq!(matcher.best_match("  ", &entries()), None);
        assert_eq!(matcher.best_match("files", &[]), None);
    }
}
