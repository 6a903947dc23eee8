use crate::identity::normalize;
use crate::resolver::IdentityResolver;
use log::debug;

/// Membership and toggle logic for a caller-owned, ordered list of pinned apps.
///
/// Queries are resolved through the resolver and normalized. Stored entries are
/// only normalized, never re-resolved. The list passed in is never modified;
/// mutating operations return the next list for the caller to persist.
#[derive(Clone, Copy, Default)]
pub struct PinManager<'a> {
    resolver: IdentityResolver<'a>,
}

impl<'a> PinManager<'a> {
    pub fn new(resolver: IdentityResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &IdentityResolver<'a> {
        &self.resolver
    }

    /// Index of the entry that matches `raw_id`, if any.
    pub fn position<'r>(&self, raw_id: impl Into<Option<&'r str>>, pinned: &[String]) -> Option<usize> {
        let raw_id = raw_id.into().filter(|id| !id.is_empty())?;
        if pinned.is_empty() {
            return None;
        }
        let key = normalize(self.resolver.resolve_canonical_id(raw_id).as_str());
        find_key(&key, pinned)
    }

    pub fn is_pinned<'r>(&self, raw_id: impl Into<Option<&'r str>>, pinned: &[String]) -> bool {
        self.position(raw_id, pinned).is_some()
    }

    /// Unpin `raw_id` if it is pinned, pin it at the end otherwise.
    pub fn toggle_pinned<'r>(&self, raw_id: impl Into<Option<&'r str>>, pinned: &[String]) -> Vec<String> {
        let Some(raw_id) = raw_id.into().filter(|id| !id.is_empty()) else {
            return pinned.to_vec();
        };

        let canonical = self.resolver.resolve_canonical_id(raw_id);
        let key = normalize(canonical.as_str());
        let mut next = pinned.to_vec();

        match find_key(&key, &next) {
            Some(index) => {
                debug!("Unpinning '{}' (stored as '{}')", raw_id, next[index]);
                next.remove(index);
            }
            None => {
                debug!("Pinning '{}' as '{}'", raw_id, canonical);
                next.push(canonical);
            }
        }
        next
    }

    /// Like `toggle_pinned`, but never removes.
    pub fn pin<'r>(&self, raw_id: impl Into<Option<&'r str>>, pinned: &[String]) -> Vec<String> {
        let raw_id = raw_id.into();
        if self.is_pinned(raw_id, pinned) {
            return pinned.to_vec();
        }
        self.toggle_pinned(raw_id, pinned)
    }

    /// Like `toggle_pinned`, but never inserts.
    pub fn unpin<'r>(&self, raw_id: impl Into<Option<&'r str>>, pinned: &[String]) -> Vec<String> {
        let raw_id = raw_id.into();
        if !self.is_pinned(raw_id, pinned) {
            return pinned.to_vec();
        }
        self.toggle_pinned(raw_id, pinned)
    }
}

fn find_key(key: &str, pinned: &[String]) -> Option<usize> {
    pinned.iter().position(|entry| normalize(entry.as_str()) == key)
}
