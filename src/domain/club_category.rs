use std::fmt;

use serde::{Deserialize, Serialize};

/// Club taxonomy; fixes the interviewer persona used for feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClubCategory {
    Tech,
    Business,
    PreMed,
    PreDental,
    Arts,
    Other,
}

impl ClubCategory {
    /// The stored lowercase slug, as the surrounding application records it.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Business => "business",
            Self::PreMed => "pre-med",
            Self::PreDental => "pre-dental",
            Self::Arts => "arts",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tech => "Technology",
            Self::Business => "Business",
            Self::PreMed => "Pre-Med",
            Self::PreDental => "Pre-Dental",
            Self::Arts => "Arts",
            Self::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "tech" => Some(Self::Tech),
            "business" => Some(Self::Business),
            "pre-med" => Some(Self::PreMed),
            "pre-dental" => Some(Self::PreDental),
            "arts" => Some(Self::Arts),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
