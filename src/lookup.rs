use crate::model::DesktopEntry;
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("desktop entry lookup is unavailable")]
    Unavailable,

    #[error("desktop entry lookup failed: {0}")]
    Failed(String),
}

/// Something that can map a raw application id to a desktop entry.
pub trait DesktopEntryLookup {
    /// Best-effort match (window class, case differences, fuzzy name).
    fn heuristic_lookup(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError>;

    /// Exact match on the entry id.
    fn lookup_by_id(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(DesktopEntry),
    NotFound,
}

impl LookupOutcome {
    pub fn into_entry(self) -> Option<DesktopEntry> {
        match self {
            LookupOutcome::Found(entry) => Some(entry),
            LookupOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    Heuristic,
    Exact,
}

impl LookupStrategy {
    /// Strategies in the order they are tried.
    pub const CHAIN: [LookupStrategy; 2] = [LookupStrategy::Heuristic, LookupStrategy::Exact];

    /// Run this strategy. Errors and empty answers both come back as `NotFound`.
    pub fn run(self, lookup: &dyn DesktopEntryLookup, raw_id: &str) -> LookupOutcome {
        let result = match self {
            LookupStrategy::Heuristic => lookup.heuristic_lookup(raw_id),
            LookupStrategy::Exact => lookup.lookup_by_id(raw_id),
        };

        match result {
            Ok(Some(entry)) => LookupOutcome::Found(entry),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => {
                debug!("{:?} lookup for '{}' failed: {}", self, raw_id, e);
                LookupOutcome::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl DesktopEntryLookup for Broken {
        fn heuristic_lookup(&self, _raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
            Err(LookupError::Failed("index corrupted".to_string()))
        }

        fn lookup_by_id(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
            Ok(Some(DesktopEntry::new(raw_id, "Exact")))
        }
    }

    #[test]
    fn test_error_becomes_not_found() {
        assert_eq!(LookupStrategy::Heuristic.run(&Broken, "x"), LookupOutcome::NotFound);
    }

    #[test]
    fn test_found_carries_entry() {
        let outcome = LookupStrategy::Exact.run(&Broken, "x.desktop");
        assert_eq!(outcome.into_entry().map(|e| e.id), Some("x.desktop".to_string()));
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(LookupStrategy::CHAIN, [LookupStrategy::Heuristic, LookupStrategy::Exact]);
    }
}
