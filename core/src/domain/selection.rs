//! Calculator selection domain model.
//!
//! One `CalculatorSelection` holds everything the user has chosen in the
//! current session: per-service quantities plus the project parameters that
//! drive the pricing multipliers. It has no persisted backing store; it is
//! created with defaults and discarded when the session ends.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Allowed project duration in months.
pub const DURATION_RANGE: RangeInclusive<u32> = 3..=24;

/// Allowed number of target geographies.
pub const GEOGRAPHY_RANGE: RangeInclusive<u32> = 1..=10;

// ============================================================================
// CompetitionLevel
// ============================================================================

/// How competitive the target keywords are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl CompetitionLevel {
    /// All available levels, in ascending order.
    pub const ALL: [CompetitionLevel; 3] = [
        CompetitionLevel::Low,
        CompetitionLevel::Medium,
        CompetitionLevel::High,
    ];

    /// Pricing multiplier applied to every line for this level.
    pub fn multiplier(&self) -> f64 {
        match self {
            CompetitionLevel::Low => 1.0,
            CompetitionLevel::Medium => 1.3,
            CompetitionLevel::High => 1.6,
        }
    }

    /// Stable identifier used in JSON and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "low",
            CompetitionLevel::Medium => "medium",
            CompetitionLevel::High => "high",
        }
    }

    /// Get the display name for this level.
    pub fn display_name(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "Low",
            CompetitionLevel::Medium => "Medium",
            CompetitionLevel::High => "High",
        }
    }

    /// The next level, wrapping around. Used by the interactive session.
    pub fn next(&self) -> Self {
        match self {
            CompetitionLevel::Low => CompetitionLevel::Medium,
            CompetitionLevel::Medium => CompetitionLevel::High,
            CompetitionLevel::High => CompetitionLevel::Low,
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CompetitionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompetitionLevel::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::Parse {
                input: s.to_string(),
                expected: "low, medium, high",
            })
    }
}

// ============================================================================
// BusinessSize
// ============================================================================

/// Size of the client's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    #[default]
    Small,
    Medium,
    Enterprise,
}

impl BusinessSize {
    /// All available sizes, in ascending order.
    pub const ALL: [BusinessSize; 3] = [
        BusinessSize::Small,
        BusinessSize::Medium,
        BusinessSize::Enterprise,
    ];

    /// Pricing multiplier applied to every line for this size.
    pub fn multiplier(&self) -> f64 {
        match self {
            BusinessSize::Small => 1.0,
            BusinessSize::Medium => 1.4,
            BusinessSize::Enterprise => 2.0,
        }
    }

    /// Stable identifier used in JSON and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            BusinessSize::Small => "small",
            BusinessSize::Medium => "medium",
            BusinessSize::Enterprise => "enterprise",
        }
    }

    /// Get the display name for this size.
    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessSize::Small => "Small Business",
            BusinessSize::Medium => "Medium Business",
            BusinessSize::Enterprise => "Enterprise",
        }
    }

    /// The next size, wrapping around. Used by the interactive session.
    pub fn next(&self) -> Self {
        match self {
            BusinessSize::Small => BusinessSize::Medium,
            BusinessSize::Medium => BusinessSize::Enterprise,
            BusinessSize::Enterprise => BusinessSize::Small,
        }
    }
}

impl std::fmt::Display for BusinessSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BusinessSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessSize::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| Error::Parse {
                input: s.to_string(),
                expected: "small, medium, enterprise",
            })
    }
}

// ============================================================================
// CalculatorSelection
// ============================================================================

/// The user's current calculator input.
///
/// Serialized field names match the exported JSON document
/// (`projectDuration`, `competitionLevel`, ...), so the `settings` block of
/// an export round-trips this struct exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSelection {
    /// Selected quantity per service id. Absent or zero means unselected.
    #[serde(default)]
    pub services: BTreeMap<String, u32>,
    /// Project duration in months (3-24).
    #[serde(default = "default_duration")]
    pub project_duration: u32,
    /// Keyword competition level.
    #[serde(default)]
    pub competition_level: CompetitionLevel,
    /// Client business size.
    #[serde(default)]
    pub business_size: BusinessSize,
    /// Number of target geographies (1-10).
    #[serde(default = "default_geographies")]
    pub target_geographies: u32,
    /// Whether the monthly management retainer is included.
    #[serde(default)]
    pub monthly_retainer: bool,
}

fn default_duration() -> u32 {
    6
}

fn default_geographies() -> u32 {
    1
}

impl Default for CalculatorSelection {
    fn default() -> Self {
        Self {
            services: BTreeMap::new(),
            project_duration: default_duration(),
            competition_level: CompetitionLevel::default(),
            business_size: BusinessSize::default(),
            target_geographies: default_geographies(),
            monthly_retainer: false,
        }
    }
}

impl CalculatorSelection {
    /// Create a selection with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected quantity for a service id (0 when absent).
    pub fn quantity(&self, id: &str) -> u32 {
        self.services.get(id).copied().unwrap_or(0)
    }

    /// Set the quantity for a service id.
    ///
    /// A zero quantity stays in the map but is treated as unselected
    /// everywhere, matching the original form behavior.
    pub fn set_quantity(&mut self, id: impl Into<String>, quantity: u32) {
        self.services.insert(id.into(), quantity);
    }

    /// Number of services with a non-zero quantity.
    pub fn selected_count(&self) -> usize {
        self.services.values().filter(|&&q| q > 0).count()
    }

    /// Restore all defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Tests
// ============================================================================
