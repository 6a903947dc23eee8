use crate::lookup::{DesktopEntryLookup, LookupError};
use crate::model::DesktopEntry;
use std::cell::RefCell;
use std::collections::HashMap;

/// Table-driven lookup for tests. Records every call it receives.
#[derive(Default)]
pub struct FakeLookup {
    pub heuristic: HashMap<String, DesktopEntry>,
    pub exact: HashMap<String, DesktopEntry>,
    pub heuristic_fails: bool,
    pub exact_fails: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, raw: &str, id: &str, name: &str) -> Self {
        self.heuristic.insert(raw.to_string(), DesktopEntry::new(id, name));
        self
    }

    pub fn with_exact(mut self, raw: &str, id: &str, name: &str) -> Self {
        self.exact.insert(raw.to_string(), DesktopEntry::new(id, name));
        self
    }

    pub fn failing_heuristic(mut self) -> Self {
        self.heuristic_fails = true;
        self
    }

    pub fn failing_exact(mut self) -> Self {
        self.exact_fails = true;
        self
    }
}

impl DesktopEntryLookup for FakeLookup {
    fn heuristic_lookup(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
        self.calls.borrow_mut().push(format!("heuristic:{raw_id}"));
        if self.heuristic_fails {
            return Err(LookupError::Failed("heuristic exploded".to_string()));
        }
        Ok(self.heuristic.get(raw_id).cloned())
    }

    fn lookup_by_id(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
        self.calls.borrow_mut().push(format!("exact:{raw_id}"));
        if self.exact_fails {
            return Err(LookupError::Unavailable);
        }
        Ok(self.exact.get(raw_id).cloned())
    }
}
