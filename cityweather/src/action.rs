//! Actions: everything that can happen to the app
//!
//! Naming follows the intent/result split:
//! - `WeatherFetch` is an intent; the reducer answers it with an effect
//! - `WeatherDid*` carry the async outcome back to the runtime loop

use crate::state::WeatherReading;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Selection =====
    /// Select the state at this index of the state list
    StateSelect(usize),

    /// Select the city at this index of the city list
    CitySelect(usize),

    // ===== Weather =====
    /// Intent: load weather for the selected city
    WeatherFetch,

    /// Result: fetch `request` succeeded
    WeatherDidLoad { request: u64, reading: WeatherReading },

    /// Result: fetch `request` failed, message is display-ready
    WeatherDidError { request: u64, message: String },

    // ===== UI =====
    UiFocusNext,
    UiFocusPrev,

    // ===== Global =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::StateSelect(_) => "StateSelect",
            Action::CitySelect(_) => "CitySelect",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::UiFocusNext => "UiFocusNext",
            Action::UiFocusPrev => "UiFocusPrev",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise form for the action log
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad { request, reading } => {
                format!(
                    "WeatherDidLoad {{ request: {}, city: {:?}, temp: {:.2}°F }}",
                    request, reading.city, reading.fahrenheit
                )
            }
            Action::WeatherDidError { request, message } => {
                let msg = if message.len() > 40 {
                    format!("{}...", &message.chars().take(37).collect::<String>())
                } else {
                    message.clone()
                };
                format!("WeatherDidError {{ request: {}, {:?} }}", request, msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
