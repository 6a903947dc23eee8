//! Application identity and pinned-app handling for launchers and taskbars.
//!
//! Raw ids (window classes, launcher ids) are resolved against an optional
//! desktop-entry lookup, normalized into comparison keys, and used to decide
//! membership in a caller-owned pinned list.

pub mod config;
pub mod identity;
pub mod lookup;
pub mod matcher;
pub mod model;
pub mod pins;
pub mod probe;
pub mod resolver;
pub mod sources;

#[cfg(test)]
mod testing;

pub use identity::{normalize, same_app};
pub use lookup::{DesktopEntryLookup, LookupError, LookupOutcome, LookupStrategy};
pub use model::DesktopEntry;
pub use pins::PinManager;
pub use probe::file_exists;
pub use resolver::IdentityResolver;
