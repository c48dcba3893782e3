//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it, and
//! the reducer only runs on the runtime loop. That makes the display text the
//! one UI-owned mutation point for fetch results.

use crate::data::{ReferenceData, StateCityIndex};

/// Tick interval for the loading spinner
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Shown when a fetch is triggered without a full selection
pub const SELECTION_PROMPT: &str = "Please select both a state and a city.";

/// A completed temperature lookup for one city
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub fahrenheit: f64,
}

impl WeatherReading {
    pub fn message(&self) -> String {
        format!("Temperature in {}: {:.2} °F", self.city, self.fahrenheit)
    }
}

/// What the result label currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayText {
    #[default]
    Empty,
    Prompt,
    Reading(WeatherReading),
    Error(String),
}

impl DisplayText {
    pub fn text(&self) -> String {
        match self {
            DisplayText::Empty => String::new(),
            DisplayText::Prompt => SELECTION_PROMPT.to_string(),
            DisplayText::Reading(reading) => reading.message(),
            DisplayText::Error(msg) => msg.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayText::Error(_))
    }
}

/// Which selection list receives navigation keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    States,
    Cities,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::States => Focus::Cities,
            Focus::Cities => Focus::States,
        }
    }
}

/// Indices into `AppState::states` and `AppState::cities`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub state: Option<usize>,
    pub city: Option<usize>,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// State names in file order
    pub states: Vec<String>,

    /// State name -> cities, loaded once
    pub index: StateCityIndex,

    /// Contents of the city list, always `index[selected state]` or empty
    pub cities: Vec<String>,

    pub selection: Selection,

    pub focus: Focus,

    /// The display sink
    pub display: DisplayText,

    /// A fetch is in flight
    pub is_loading: bool,

    /// Id of the most recent fetch; results carrying an older id are stale
    pub request_id: u64,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}

impl AppState {
    /// Build the initial state from whatever reference data loaded.
    ///
    /// Load failures land in the display text; the last one wins.
    pub fn new(data: ReferenceData) -> Self {
        let display = data
            .failures
            .last()
            .map(|msg| DisplayText::Error(msg.clone()))
            .unwrap_or_default();

        Self {
            states: data.states,
            index: data.index,
            display,
            ..Default::default()
        }
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.selection
            .state
            .and_then(|i| self.states.get(i))
            .map(String::as_str)
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selection
            .city
            .and_then(|i| self.cities.get(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_message_two_decimals() {
        let reading = WeatherReading {
            city: "Denver".into(),
            fahrenheit: 80.330_000_000_000_01,
        };
        assert_eq!(reading.message(), "Temperature in Denver: 80.33 °F");
    }

    #[test]
    fn test_new_shows_last_load_failure() {
        let data = ReferenceData {
            failures: vec![
                "Failed to load states".into(),
                "Failed to load city data".into(),
            ],
            ..Default::default()
        };
        let state = AppState::new(data);
        assert_eq!(state.display.text(), "Failed to load city data");
        assert!(state.display.is_error());
    }

    #[test]
    fn test_new_without_failures_is_empty() {
        let state = AppState::new(ReferenceData::default());
        assert_eq!(state.display, DisplayText::Empty);
        assert!(state.cities.is_empty());
    }
}
