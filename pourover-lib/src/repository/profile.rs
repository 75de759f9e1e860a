use std::{
    fmt::{self, Display, Formatter},
    ops::RangeInclusive,
};

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::suggestion::Taste;

/// Range of the temperature control, in °C.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 70.0..=100.0;
pub const TEMPERATURE_STEP: f64 = 1.0;
/// Range of the grind size control.
pub const GRIND_SIZE_RANGE: RangeInclusive<f64> = 0.0..=30.0;

/// One saved brewing configuration.
///
/// A [`CoffeeProfile`] cannot be changed after it is built. Records written before the
/// `suggestion` field existed (or without a name) read back with empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeProfile {
    /// Water temperature in °C
    #[getset(get_copy = "pub")]
    temperature: f64,
    #[getset(get_copy = "pub")]
    grind_size: f64,
    #[getset(get_copy = "pub")]
    taste: Taste,
    /// A human friendly label, may be empty
    #[serde(default)]
    #[getset(get = "pub")]
    coffee_name: String,
    /// The advice that was shown when the profile was saved
    #[serde(default)]
    #[getset(get = "pub")]
    suggestion: String,
}

impl CoffeeProfile {
    /// Build a profile, recording the suggestion that matches `taste`.
    pub fn new(temperature: f64, grind_size: f64, taste: Taste, coffee_name: &str) -> Self {
        Self {
            temperature,
            grind_size,
            taste,
            coffee_name: coffee_name.to_string(),
            suggestion: taste.suggestion().to_string(),
        }
    }
}

impl Display for CoffeeProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.coffee_name.is_empty() {
            write!(f, "{}, ", self.coffee_name)?;
        }

        write!(
            f,
            "Temperature: {}°C, Grind Size: {}, Taste: {}",
            self.temperature, self.grind_size, self.taste
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::suggestion::BITTER_SUGGESTION;

    #[test]
    fn test_new_records_suggestion() {
        let profile = CoffeeProfile::new(90.0, 0.0, Taste::Bitter, "Ethiopia");

        assert_eq!(profile.suggestion(), BITTER_SUGGESTION);
        assert_eq!(profile.coffee_name(), "Ethiopia");
    }

    #[test]
    fn test_serialize_keys() {
        let profile = CoffeeProfile::new(92.0, 12.5, Taste::Good, "");
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "temperature": 92.0,
                "grindSize": 12.5,
                "taste": "good",
                "coffeeName": "",
                "suggestion": "",
            })
        );
    }

    #[test]
    fn test_read_old_schema() {
        let profile: CoffeeProfile =
            serde_json::from_str(r#"{"temperature":85,"grindSize":4,"taste":"sour"}"#).unwrap();

        assert_eq!(profile.temperature(), 85.0);
        assert_eq!(profile.grind_size(), 4.0);
        assert_eq!(profile.taste(), Taste::Sour);
        assert_eq!(profile.coffee_name(), "");
        assert_eq!(profile.suggestion(), "");
    }

    #[test]
    fn test_display() {
        let named = CoffeeProfile::new(90.0, 3.5, Taste::Bitter, "Kenya");
        assert_eq!(
            named.to_string(),
            "Kenya, Temperature: 90°C, Grind Size: 3.5, Taste: bitter"
        );

        let unnamed = CoffeeProfile::new(70.0, 0.0, Taste::Unset, "");
        assert_eq!(
            unnamed.to_string(),
            "Temperature: 70°C, Grind Size: 0, Taste: "
        );
    }
}
