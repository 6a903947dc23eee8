use crate::lookup::{DesktopEntryLookup, LookupStrategy};
use crate::model::DesktopEntry;

/// Resolves raw application ids against an optional desktop-entry lookup.
///
/// Without a lookup every id resolves to itself.
#[derive(Clone, Copy, Default)]
pub struct IdentityResolver<'a> {
    lookup: Option<&'a dyn DesktopEntryLookup>,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(lookup: Option<&'a dyn DesktopEntryLookup>) -> Self {
        Self { lookup }
    }

    pub fn with_lookup(lookup: &'a dyn DesktopEntryLookup) -> Self {
        Self::new(Some(lookup))
    }

    pub fn without_lookup() -> Self {
        Self::new(None)
    }

    pub fn resolve_canonical_id(&self, raw_id: &str) -> String {
        self.resolve_field(raw_id, DesktopEntry::id)
    }

    pub fn resolve_display_name(&self, raw_id: &str) -> String {
        self.resolve_field(raw_id, DesktopEntry::name)
    }

    // Walks the strategy chain and stops at the first record with a non-empty field.
    fn resolve_field(&self, raw_id: &str, field: fn(&DesktopEntry) -> Option<&str>) -> String {
        if raw_id.is_empty() {
            return raw_id.to_string();
        }
        let Some(lookup) = self.lookup else {
            return raw_id.to_string();
        };

        LookupStrategy::CHAIN
            .iter()
            .filter_map(|strategy| strategy.run(lookup, raw_id).into_entry())
            .find_map(|entry| field(&entry).map(str::to_string))
            .unwrap_or_else(|| raw_id.to_string())
    }
}
