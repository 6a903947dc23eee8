use crate::config::{Config, EntryConfig};
use crate::identity::same_app;
use crate::lookup::{DesktopEntryLookup, LookupError};
use crate::matcher::FuzzyMatcher;
use crate::model::DesktopEntry;
use log::{debug, info, warn};
use regex::Regex;

/// Desktop entries declared in the config file, answering lookups.
pub struct Catalog {
    entries: Vec<DesktopEntry>,
    patterns: Vec<Vec<Regex>>, // Parallel to `entries`
    enabled: bool,
    min_fuzzy_score: u32,
}

impl Catalog {
    pub fn new(entries: Vec<EntryConfig>, enabled: bool, min_fuzzy_score: u32) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut patterns = Vec::with_capacity(entries.len());

        for item in entries {
            if item.entry.id.is_empty() {
                warn!("Catalog: skipping entry '{}' with empty id", item.entry.name);
                continue;
            }
            let regexes = item
                .patterns
                .iter()
                .filter_map(|p| match Regex::new(p) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Catalog: ignoring bad pattern {:?} for '{}': {}", p, item.entry.id, e);
                        None
                    }
                })
                .collect();
            kept.push(item.entry);
            patterns.push(regexes);
        }

        info!("Catalog: {} entries (lookup enabled: {})", kept.len(), enabled);
        Self {
            entries: kept,
            patterns,
            enabled,
            min_fuzzy_score,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.entries.clone(),
            config.lookup.enabled,
            config.general.min_fuzzy_score,
        )
    }

    pub fn entries(&self) -> &[DesktopEntry] {
        &self.entries
    }

    fn check_enabled(&self) -> Result<(), LookupError> {
        if self.enabled {
            Ok(())
        } else {
            Err(LookupError::Unavailable)
        }
    }

    fn find(&self, pred: impl Fn(&DesktopEntry) -> bool) -> Option<&DesktopEntry> {
        self.entries.iter().find(|e| pred(e))
    }

    fn heuristic_index(&self, raw_id: &str) -> Option<usize> {
        let with_suffix = format!("{}.desktop", raw_id);
        let steps: [(&str, &dyn Fn(&DesktopEntry) -> bool); 5] = [
            ("id", &|e: &DesktopEntry| e.id == raw_id),
            ("id ignoring case", &|e: &DesktopEntry| same_app(&e.id, raw_id)),
            ("id with suffix", &|e: &DesktopEntry| same_app(&e.id, &with_suffix)),
            ("wm class", &|e: &DesktopEntry| e.startup_wm_class.as_deref().is_some_and(|c| same_app(c, raw_id))),
            ("reverse-DNS tail", &|e: &DesktopEntry| reverse_dns_tail(&e.id).is_some_and(|t| same_app(t, raw_id))),
        ];

        for (step, pred) in steps {
            if let Some(index) = self.entries.iter().position(|e| pred(e)) {
                debug!("Catalog: '{}' matched by {}", raw_id, step);
                return Some(index);
            }
        }

        if let Some(index) = self.patterns.iter().position(|res| res.iter().any(|re| re.is_match(raw_id))) {
            debug!("Catalog: '{}' matched by pattern", raw_id);
            return Some(index);
        }

        let (index, score) = FuzzyMatcher::new().best_match(raw_id, &self.entries)?;
        if score < self.min_fuzzy_score {
            debug!("Catalog: best fuzzy score {} for '{}' is below {}", score, raw_id, self.min_fuzzy_score);
            return None;
        }
        debug!("Catalog: '{}' matched by name (score {})", raw_id, score);
        Some(index)
    }
}

impl DesktopEntryLookup for Catalog {
    fn heuristic_lookup(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
        self.check_enabled()?;
        Ok(self.heuristic_index(raw_id).map(|i| self.entries[i].clone()))
    }

    fn lookup_by_id(&self, raw_id: &str) -> Result<Option<DesktopEntry>, LookupError> {
        self.check_enabled()?;
        Ok(self.find(|e| e.id == raw_id).cloned())
    }
}

// "org.gnome.Nautilus.desktop" -> "Nautilus"
fn reverse_dns_tail(id: &str) -> Option<&str> {
    let stem = id.strip_suffix(".desktop").unwrap_or(id);
    let (_, tail) = stem.rsplit_once('.')?;
    Some(tail).filter(|t| !t.is_empty())
}
