//! Transient input state for brewing a cup.
//!
//! [`BrewForm`] is what a front end binds its controls to. It behaves the way the range
//! controls and the taste selector do: numeric input is clamped and snapped to the control's
//! step, and picking a taste immediately refreshes the suggestion.

use std::ops::RangeInclusive;

use getset::{CopyGetters, Getters};

use crate::{
    repository::{
        CoffeeProfile, GRIND_SIZE_RANGE, TEMPERATURE_RANGE, TEMPERATURE_STEP,
        config::FormDefaults,
    },
    suggestion::Taste,
};

#[derive(Debug, Clone)]
pub enum Message {
    CoffeeNameInput(String),
    TemperatureChanged(f64),
    GrindSizeChanged(f64),
    TasteSelected(Taste),
    SavePressed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Save(CoffeeProfile),
}

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct BrewForm {
    #[getset(get_copy = "pub")]
    temperature: f64,
    #[getset(get_copy = "pub")]
    grind_size: f64,
    #[getset(get_copy = "pub")]
    grind_step: f64,
    #[getset(get_copy = "pub")]
    taste: Taste,
    #[getset(get = "pub")]
    coffee_name: String,
    #[getset(get = "pub")]
    suggestion: String,
}

impl BrewForm {
    pub fn new(defaults: &FormDefaults) -> Self {
        let grind_step = if defaults.grind_step.is_finite() && defaults.grind_step > 0.0 {
            defaults.grind_step
        } else {
            1.0
        };

        let mut form = Self {
            temperature: *TEMPERATURE_RANGE.start(),
            grind_size: *GRIND_SIZE_RANGE.start(),
            grind_step,
            taste: Taste::Unset,
            coffee_name: String::new(),
            suggestion: String::new(),
        };

        form.set_temperature(defaults.temperature);
        form.set_grind_size(defaults.grind_size);

        form
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::CoffeeNameInput(content) => {
                self.coffee_name = content;
                Action::None
            }
            Message::TemperatureChanged(value) => {
                self.set_temperature(value);
                Action::None
            }
            Message::GrindSizeChanged(value) => {
                self.set_grind_size(value);
                Action::None
            }
            Message::TasteSelected(taste) => {
                self.taste = taste;
                self.suggestion = taste.suggestion().to_string();
                Action::None
            }
            Message::SavePressed => Action::Save(self.snapshot()),
        }
    }

    /// Build a profile from the current values.
    pub fn snapshot(&self) -> CoffeeProfile {
        CoffeeProfile::new(
            self.temperature,
            self.grind_size,
            self.taste,
            &self.coffee_name,
        )
    }

    /// Reset the name once a profile has been stored. The brew settings carry over to the
    /// next cup.
    pub fn clear_name(&mut self) {
        self.coffee_name.clear();
    }

    fn set_temperature(&mut self, value: f64) {
        if let Some(value) = coerce(value, &TEMPERATURE_RANGE, TEMPERATURE_STEP) {
            self.temperature = value;
        }
    }

    fn set_grind_size(&mut self, value: f64) {
        if let Some(value) = coerce(value, &GRIND_SIZE_RANGE, self.grind_step) {
            self.grind_size = value;
        }
    }
}

impl Default for BrewForm {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}

/// Clamp `value` into `range` and snap it to the nearest multiple of `step` from the start of
/// the range. Non-finite input is rejected.
fn coerce(value: f64, range: &RangeInclusive<f64>, step: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }

    let (min, max) = (*range.start(), *range.end());
    let offset = (value.clamp(min, max) - min) / step;
    // Strip the float noise that multiplying by a fractional step leaves behind
    let on_grid = |steps: f64| ((min + steps * step) * 1e6).round() / 1e6;

    let snapped = on_grid(offset.round());
    // The top of the range may not sit on the grid, so stay on the last step below it
    if snapped > max {
        Some(on_grid(offset.floor()))
    } else {
        Some(snapped)
    }
}
