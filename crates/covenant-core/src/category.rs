//! The closed set of grantable access categories.
//!
//! Categories are a proper enumerated type. An invalid category is
//! unrepresentable in the typed API; the error surface exists only where
//! untrusted text enters, at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A category of resource or data that access can be granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessCategory {
    /// Documents and text records.
    Document,
    /// Still images.
    Image,
    /// Video and other media.
    Video,
    /// Financial records.
    Financial,
    /// Health readings and medical records.
    HealthRecord,
    /// Device telemetry streams.
    Telemetry,
}

impl AccessCategory {
    /// Every category, in declaration order.
    pub const ALL: [AccessCategory; 6] = [
        AccessCategory::Document,
        AccessCategory::Image,
        AccessCategory::Video,
        AccessCategory::Financial,
        AccessCategory::HealthRecord,
        AccessCategory::Telemetry,
    ];

    /// The canonical kebab-case name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessCategory::Document => "document",
            AccessCategory::Image => "image",
            AccessCategory::Video => "video",
            AccessCategory::Financial => "financial",
            AccessCategory::HealthRecord => "health-record",
            AccessCategory::Telemetry => "telemetry",
        }
    }
}

impl fmt::Display for AccessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(AccessCategory::Document),
            "image" => Ok(AccessCategory::Image),
            "video" => Ok(AccessCategory::Video),
            "financial" => Ok(AccessCategory::Financial),
            "health-record" => Ok(AccessCategory::HealthRecord),
            "telemetry" => Ok(AccessCategory::Telemetry),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for AccessCategory {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
