//! Reducer - all state transitions, no side effects
//!
//! Returns whether the state changed plus any effects for the runtime.
//! Selection arms keep the city list in sync with the selected state; the
//! weather arms own the fetch lifecycle and the display text.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, DisplayText};
use crate::store::DispatchResult;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Selection =====
        Action::StateSelect(index) => select_state(state, index),

        Action::CitySelect(index) => {
            if index >= state.cities.len() || state.selection.city == Some(index) {
                return DispatchResult::unchanged();
            }
            state.selection.city = Some(index);
            DispatchResult::changed()
        }

        // ===== Weather =====
        Action::WeatherFetch => {
            let city = match (state.selected_state(), state.selected_city()) {
                (Some(_), Some(city)) if !city.is_empty() => city.to_string(),
                _ => {
                    state.display = DisplayText::Prompt;
                    return DispatchResult::changed();
                }
            };

            state.request_id += 1;
            state.is_loading = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                request: state.request_id,
                city,
            })
        }

        Action::WeatherDidLoad { request, reading } => {
            if request != state.request_id {
                return DispatchResult::unchanged();
            }
            state.is_loading = false;
            state.display = DisplayText::Reading(reading);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, message } => {
            if request != state.request_id {
                return DispatchResult::unchanged();
            }
            state.is_loading = false;
            state.display = DisplayText::Error(message);
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiFocusNext | Action::UiFocusPrev => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render if loading (for spinner animation)
            state.is_loading.into()
        }

        // handled in the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn select_state(state: &mut AppState, index: usize) -> DispatchResult {
    let Some(name) = state.states.get(index) else {
        return DispatchResult::unchanged();
    };

    let cities = state.index.cities(name).map(<[String]>::to_vec);
    state.selection.state = Some(index);

    // A state missing from the index keeps whatever cities were listed
    if let Some(cities) = cities {
        state.cities = cities;
        state.selection.city = None;
    }
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ReferenceData, StateCityIndex};
    use crate::state::{Focus, WeatherReading, SELECTION_PROMPT};

    fn loaded_state() -> AppState {
        let index: StateCityIndex = [
            (
                "Colorado".to_string(),
                vec!["Denver".to_string(), "Boulder".to_string()],
            ),
            (
                "Texas".to_string(),
                vec![
                    "Houston".to_string(),
                    "Austin".to_string(),
                    "Dallas".to_string(),
                ],
            ),
        ]
        .into_iter()
        .collect();

        AppState::new(ReferenceData {
            states: vec!["Colorado".into(), "Texas".into(), "Guam".into()],
            index,
            failures: vec![],
        })
    }

    fn reading(city: &str, fahrenheit: f64) -> WeatherReading {
        WeatherReading {
            city: city.into(),
            fahrenheit,
        }
    }

    #[test]
    fn test_state_select_populates_cities_in_file_order() {
        let mut state = loaded_state();

        for (i, name) in state.states.clone().iter().enumerate().take(2) {
            let result = reducer(&mut state, Action::StateSelect(i));
            assert!(result.changed);
            assert_eq!(
                state.cities.as_slice(),
                state.index.cities(name).unwrap(),
                "cities for {name}"
            );
        }
    }

    #[test]
    fn test_unindexed_state_keeps_city_list() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(1));
        reducer(&mut state, Action::CitySelect(2));

        reducer(&mut state, Action::StateSelect(2));

        assert_eq!(state.selected_state(), Some("Guam"));
        assert_eq!(state.cities, vec!["Houston", "Austin", "Dallas"]);
        assert_eq!(state.selected_city(), Some("Dallas"));
    }

    #[test]
    fn test_state_change_clears_city_selection() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(1));
        reducer(&mut state, Action::CitySelect(2));

        reducer(&mut state, Action::StateSelect(0));

        assert_eq!(state.cities, vec!["Denver", "Boulder"]);
        assert_eq!(state.selection.city, None);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut state = loaded_state();
        assert!(!reducer(&mut state, Action::StateSelect(9)).changed);
        assert_eq!(state.selection.state, None);

        reducer(&mut state, Action::StateSelect(0));
        assert!(!reducer(&mut state, Action::CitySelect(5)).changed);
        assert_eq!(state.selection.city, None);
    }

    #[test]
    fn test_fetch_without_selection_prompts() {
        let mut state = loaded_state();

        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.display.text(), SELECTION_PROMPT);

        // state but no city
        reducer(&mut state, Action::StateSelect(0));
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(!result.has_effects());
        assert!(!state.is_loading);
        assert_eq!(state.request_id, 0);
    }

    #[test]
    fn test_fetch_with_empty_city_name_prompts() {
        let mut state = loaded_state();
        state.cities = vec![String::new()];
        state.selection.state = Some(0);
        state.selection.city = Some(0);

        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(!result.has_effects());
        assert_eq!(state.display, DisplayText::Prompt);
    }

    #[test]
    fn test_fetch_emits_effect_and_keeps_label() {
        let mut state = loaded_state();
        state.display = DisplayText::Error("old".into());
        reducer(&mut state, Action::StateSelect(0));
        reducer(&mut state, Action::CitySelect(0));

        let result = reducer(&mut state, Action::WeatherFetch);

        assert!(state.is_loading);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: 1,
                city: "Denver".into()
            }]
        );
        assert_eq!(state.display, DisplayText::Error("old".into()));
    }

    #[test]
    fn test_did_load_writes_display() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(0));
        reducer(&mut state, Action::CitySelect(0));
        reducer(&mut state, Action::WeatherFetch);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 1,
                reading: reading("Denver", 80.33),
            },
        );

        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(state.display.text(), "Temperature in Denver: 80.33 °F");
    }

    #[test]
    fn test_did_error_writes_display() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(0));
        reducer(&mut state, Action::CitySelect(1));
        reducer(&mut state, Action::WeatherFetch);

        reducer(
            &mut state,
            Action::WeatherDidError {
                request: 1,
                message: "Error: 404".into(),
            },
        );

        assert!(!state.is_loading);
        assert!(state.display.text().contains("404"));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(0));
        reducer(&mut state, Action::CitySelect(0));
        reducer(&mut state, Action::WeatherFetch);
        reducer(&mut state, Action::CitySelect(1));
        reducer(&mut state, Action::WeatherFetch);
        assert_eq!(state.request_id, 2);

        // the newer request finishes first
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 2,
                reading: reading("Boulder", 70.0),
            },
        );
        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 1,
                reading: reading("Denver", 50.0),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.display, DisplayText::Reading(reading("Boulder", 70.0)));
    }

    #[test]
    fn test_stale_result_keeps_loading_for_latest() {
        let mut state = loaded_state();
        reducer(&mut state, Action::StateSelect(0));
        reducer(&mut state, Action::CitySelect(0));
        reducer(&mut state, Action::WeatherFetch);
        reducer(&mut state, Action::WeatherFetch);

        reducer(
            &mut state,
            Action::WeatherDidError {
                request: 1,
                message: "Error fetching weather data.".into(),
            },
        );

        assert!(state.is_loading);
        assert_eq!(state.display, DisplayText::Empty);
    }

    #[test]
    fn test_focus_toggles() {
        let mut state = loaded_state();
        assert_eq!(state.focus, Focus::States);

        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::Cities);

        reducer(&mut state, Action::UiFocusPrev);
        assert_eq!(state.focus, Focus::States);
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();

        assert!(!reducer(&mut state, Action::Tick).changed);

        state.is_loading = true;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }
}
