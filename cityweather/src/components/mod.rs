//! UI components: props in, actions out
//!
//! Components never touch `AppState` directly. `render` is a function of
//! props (plus internal view state such as a scroll offset) and
//! `handle_event` only returns actions for the runtime to dispatch.

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

pub mod help_bar;
pub mod picker;
pub mod result_label;
pub mod weather_panel;

pub use help_bar::{HelpBar, HelpBarProps};
pub use picker::{Picker, PickerProps};
pub use result_label::{ResultLabel, ResultLabelProps, SPINNERS};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};

pub trait Component {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Map an event to actions. Render-only components keep the default.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
