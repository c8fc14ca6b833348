//! Observed mode of the publish directory.

use std::fmt;

use serde::Serialize;

/// What the publish directory currently serves.
///
/// Nothing records this on disk; it is inferred by comparing the published
/// default document with the maintenance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteMode {
    /// Default document matches the maintenance page
    Maintenance,
    /// Default document exists and differs from the maintenance page
    Live,
    /// No default document in the publish directory
    Unpublished,
    /// Default document exists but the maintenance page is missing
    Unknown,
}

impl SiteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteMode::Maintenance => "maintenance",
            SiteMode::Live => "live",
            SiteMode::Unpublished => "unpublished",
            SiteMode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SiteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
