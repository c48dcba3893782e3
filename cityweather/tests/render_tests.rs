//! Rendering the whole panel through RenderHarness

use cityweather::{
    components::{Component, WeatherPanel, WeatherPanelProps},
    state::{AppState, DisplayText, WeatherReading},
    testing::RenderHarness,
};

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(70, 20);
    let mut panel = WeatherPanel::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherPanelProps {
            state,
            is_focused: true,
        };
        panel.render(frame, frame.area(), props);
    })
}

fn colorado() -> AppState {
    let mut state = AppState {
        states: vec!["Colorado".into(), "Texas".into()],
        cities: vec!["Denver".into(), "Boulder".into()],
        ..Default::default()
    };
    state.selection.state = Some(0);
    state
}

#[test]
fn test_render_layout() {
    let output = render(&colorado());

    assert!(output.contains("City Weather"), "Should show title");
    assert!(output.contains("State"), "Should show state list title");
    assert!(output.contains("Colorado"));
    assert!(output.contains("Texas"));
    assert!(output.contains("Boulder"), "Should list the cities");
    assert!(output.contains("load weather"), "Should show help bar");
}

#[test]
fn test_render_without_reference_data() {
    let state = AppState {
        display: DisplayText::Error("Failed to load states".into()),
        ..Default::default()
    };
    let output = render(&state);

    assert!(output.contains("No states loaded"));
    assert!(output.contains("Select a state"));
    assert!(output.contains("Failed to load states"));
}

#[test]
fn test_render_prompt() {
    let state = AppState {
        display: DisplayText::Prompt,
        ..colorado()
    };
    let output = render(&state);

    assert!(output.contains("Please select both a state and a city."));
}

#[test]
fn test_render_reading() {
    let mut state = colorado();
    state.selection.city = Some(0);
    state.display = DisplayText::Reading(WeatherReading {
        city: "Denver".into(),
        fahrenheit: 80.33,
    });
    let output = render(&state);

    assert!(
        output.contains("Temperature in Denver: 80.33 °F"),
        "Should show temperature:\n{output}"
    );
}

#[test]
fn test_render_fetch_error() {
    let state = AppState {
        display: DisplayText::Error("Error: 404".into()),
        ..colorado()
    };
    let output = render(&state);

    assert!(output.contains("Error: 404"));
}
