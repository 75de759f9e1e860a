//! Taste feedback and the advice it triggers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub const BITTER_SUGGESTION: &str =
    "To make it less bitter, try coarsening the grind size or lowering the temperature.";
pub const SOUR_SUGGESTION: &str =
    "To make it less sour, try making the grind size finer or increasing the temperature.";

/// The user's assessment of a brew.
///
/// Stored as a lowercase string, with the unset state written as `""`. Any
/// string that isn't one of the known values reads back as [`Taste::Unset`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    ValueEnum,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Taste {
    #[default]
    #[strum(to_string = "")]
    #[value(skip)]
    Unset,
    Good,
    Bitter,
    Sour,
}

impl Taste {
    /// Advice for this taste, or an empty string when there is nothing to fix.
    pub fn suggestion(self) -> &'static str {
        match self {
            Taste::Bitter => BITTER_SUGGESTION,
            Taste::Sour => SOUR_SUGGESTION,
            Taste::Good | Taste::Unset => "",
        }
    }
}

impl From<String> for Taste {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<Taste> for String {
    fn from(value: Taste) -> Self {
        value.as_ref().to_string()
    }
}

/// Look up the suggestion for a raw taste value.
pub fn suggest(taste: &str) -> &'static str {
    taste.parse::<Taste>().unwrap_or_default().suggestion()
}
