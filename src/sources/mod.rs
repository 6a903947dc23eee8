pub mod catalog;
pub mod pinned;
