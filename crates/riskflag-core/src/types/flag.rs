//! Flag values produced by risk rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Traffic-light outcome of a single risk rule.
///
/// Each variant carries a fixed integer code that downstream consumers
/// store and compare against, see [`FlagValue::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagValue {
    /// High risk (code 0).
    Red,
    /// Low risk (code 1).
    Green,
    /// Moderate risk (code 2).
    Amber,
    /// Display only (code 3). No rule produces it.
    MediumRisk,
    /// Data missing, cannot judge (code 4).
    White,
}

impl FlagValue {
    /// All flags in code order.
    pub const ALL: [FlagValue; 5] = [
        FlagValue::Red,
        FlagValue::Green,
        FlagValue::Amber,
        FlagValue::MediumRisk,
        FlagValue::White,
    ];

    /// Returns the integer code of this flag.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            FlagValue::Red => 0,
            FlagValue::Green => 1,
            FlagValue::Amber => 2,
            FlagValue::MediumRisk => 3,
            FlagValue::White => 4,
        }
    }

    /// Parses a flag from its integer code.
    pub fn from_code(code: u8) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.code() == code)
            .ok_or(CoreError::InvalidFlagCode { code })
    }

    /// Returns the upper-case name used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FlagValue::Red => "RED",
            FlagValue::Green => "GREEN",
            FlagValue::Amber => "AMBER",
            FlagValue::MediumRisk => "MEDIUM_RISK",
            FlagValue::White => "WHITE",
        }
    }

    /// Returns true for flags that exist for display and are never
    /// produced by a rule.
    #[must_use]
    pub fn is_display_only(self) -> bool {
        matches!(self, FlagValue::MediumRisk)
    }

    /// Returns true if the flag means the data was insufficient.
    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        matches!(self, FlagValue::White)
    }
}

impl TryFrom<u8> for FlagValue {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Self> {
        Self::from_code(code)
    }
}

impl From<FlagValue> for u8 {
    fn from(flag: FlagValue) -> Self {
        flag.code()
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
