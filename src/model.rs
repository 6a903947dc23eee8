use serde::Deserialize;

/// A desktop-entry record as handed out by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesktopEntry {
    pub id: String,                       // Canonical ID (e.g., "firefox.desktop")
    pub name: String,                     // Display name
    #[serde(default)]
    pub icon: Option<String>,             // Icon name/path
    #[serde(default)]
    pub startup_wm_class: Option<String>, // Window class the app reports
}

impl DesktopEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            startup_wm_class: None,
        }
    }

    /// The id, unless it is empty.
    pub fn id(&self) -> Option<&str> {
        Some(self.id.as_str()).filter(|s| !s.is_empty())
    }

    /// The display name, unless it is empty.
    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|s| !s.is_empty())
    }
}
