//! Root component: layout, focus routing and the global keys
//!
//! ```text
//! ┌──────────── ☁ City Weather ────────────┐
//! │┌ State ──────────┐┌ City ─────────────┐│
//! ││ ...             ││ ...               ││
//! │└─────────────────┘└───────────────────┘│
//! │────────────────────────────────────────│
//! │    Temperature in Denver: 80.33 °F     │
//! │ tab switch  j/k move  enter load ...   │
//! └────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, Picker, PickerProps, ResultLabel, ResultLabelProps,
};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::{AppState, Focus};

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct WeatherPanel {
    states: Picker,
    cities: Picker,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn state_props<'a>(state: &'a AppState, is_focused: bool) -> PickerProps<'a> {
        PickerProps {
            title: "State",
            items: &state.states,
            selected: state.selection.state,
            is_focused: is_focused && state.focus == Focus::States,
            empty_hint: "No states loaded",
            on_select: Action::StateSelect,
        }
    }

    fn city_props<'a>(state: &'a AppState, is_focused: bool) -> PickerProps<'a> {
        PickerProps {
            title: "City",
            items: &state.cities,
            selected: state.selection.city,
            is_focused: is_focused && state.focus == Focus::Cities,
            empty_hint: "Select a state",
            on_select: Action::CitySelect,
        }
    }
}

impl Component for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => vec![Action::Quit],
                _ => vec![],
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => vec![Action::UiFocusNext],
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => vec![Action::UiFocusPrev],
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::F(5) => vec![Action::WeatherFetch],
            _ => match props.state.focus {
                Focus::States => self
                    .states
                    .handle_event(event, Self::state_props(props.state, true)),
                Focus::Cities => self
                    .cities
                    .handle_event(event, Self::city_props(props.state, true)),
            },
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" ☁ City Weather ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let [lists, label, help] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(ResultLabel::HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        let [state_area, city_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lists);

        self.states.render(
            frame,
            state_area,
            Self::state_props(state, props.is_focused),
        );
        self.cities
            .render(frame, city_area, Self::city_props(state, props.is_focused));

        ResultLabel.render(
            frame,
            label,
            ResultLabelProps {
                display: &state.display,
                is_loading: state.is_loading,
                tick_count: state.tick_count,
            },
        );

        HelpBar.render(frame, help, HelpBarProps);
    }
}
