//! Format Rules - Subtype Table
//!
//! Every ad format maps to a closed set of permitted subtypes.
//! Validation is a lookup in this table, never branching on the format.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    Video,
    Display,
    Social,
}

/// Format tag -> permitted subtypes. Table order is catalog order.
const SUBTYPE_TABLE: &[(AdFormat, &[&str])] = &[
    (AdFormat::Video, &["instream", "outstream"]),
    (AdFormat::Display, &["tradicional", "native"]),
    (AdFormat::Social, &["facebook", "linkedin"]),
];

impl AdFormat {
    pub const ALL: [AdFormat; 3] = [AdFormat::Video, AdFormat::Display, AdFormat::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::Video => "video",
            AdFormat::Display => "display",
            AdFormat::Social => "social",
        }
    }

    /// Case-insensitive match of a declared `type` field
    pub fn parse(declared: &str) -> Option<Self> {
        let declared = declared.to_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == declared)
    }

    pub fn allowed_subtypes(&self) -> &'static [&'static str] {
        SUBTYPE_TABLE
            .iter()
            .find(|(format, _)| format == self)
            .map(|(_, subtypes)| *subtypes)
            .unwrap_or(&[])
    }

    /// Exact membership; callers lower-case before asking when they need to
    pub fn permits(&self, subtype: &str) -> bool {
        self.allowed_subtypes().contains(&subtype)
    }
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry: a format and what it accepts
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormatInfo {
    pub format: AdFormat,
    pub subtypes: Vec<&'static str>,
}

/// All formats with their permitted subtypes, in table order
pub fn catalog() -> Vec<FormatInfo> {
    SUBTYPE_TABLE
        .iter()
        .map(|(format, subtypes)| FormatInfo {
            format: *format,
            subtypes: subtypes.to_vec(),
        })
        .collect()
}
