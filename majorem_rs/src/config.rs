//! Site configuration.
//!
//! Loads an optional `majorem.toml`. Every key has a default, so a partial
//! file only overrides what it names.

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "majorem.toml";

/// Branding and contact details rendered into the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Company name in the nav bar, footer and page title
    pub brand: String,
    /// One-line pitch under the footer logo
    pub tagline: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub founded_year: u16,
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Majorem".to_string(),
            tagline: "Empowering startups and small businesses with intelligent data solutions."
                .to_string(),
            contact_email: "hello@majorem.com".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            founded_year: 2023,
            copyright_year: 2025,
        }
    }
}

impl SiteConfig {
    /// Load `majorem.toml` from the given directory.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    /// Returns the default config if the file is missing or invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse site config");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read site config");
                Self::default()
            }
        }
    }

    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}
