//! Scrollable selection list, used for both states and cities
//!
//! Moving the cursor selects, the way a dropdown commits its value. With
//! nothing selected yet, the first navigation key selects the first item.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

pub struct PickerProps<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub selected: Option<usize>,
    pub is_focused: bool,
    /// Shown in place of an empty list
    pub empty_hint: &'a str,
    pub on_select: fn(usize) -> Action,
}

#[derive(Default)]
pub struct Picker {
    scroll_offset: usize,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }

    fn target(code: KeyCode, selected: Option<usize>, len: usize) -> Option<usize> {
        let last = len.saturating_sub(1);
        let Some(current) = selected else {
            return match code {
                KeyCode::Char('G') | KeyCode::End => Some(last),
                KeyCode::Char('j' | 'k' | 'g') | KeyCode::Down | KeyCode::Up | KeyCode::Home => {
                    Some(0)
                }
                _ => None,
            };
        };

        let next = match code {
            KeyCode::Char('j') | KeyCode::Down => (current + 1).min(last),
            KeyCode::Char('k') | KeyCode::Up => current.saturating_sub(1),
            KeyCode::PageDown => (current + 10).min(last),
            KeyCode::PageUp => current.saturating_sub(10),
            KeyCode::Char('g') | KeyCode::Home => 0,
            KeyCode::Char('G') | KeyCode::End => last,
            _ => return None,
        };
        (next != current).then_some(next)
    }
}

impl Component for Picker {
    type Props<'a> = PickerProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused || props.items.is_empty() {
            return vec![];
        }

        match event {
            EventKind::Key(key) => Self::target(key.code, props.selected, props.items.len())
                .map(props.on_select)
                .into_iter()
                .collect(),
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.title));

        if props.items.is_empty() {
            self.scroll_offset = 0;
            let hint = Paragraph::new(Line::styled(
                props.empty_hint,
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        match props.selected {
            Some(selected) => {
                // the list may have been swapped for a shorter one
                let max_offset = props.items.len().saturating_sub(viewport_height);
                self.scroll_offset = self.scroll_offset.min(max_offset);
                self.ensure_visible(selected, viewport_height);
            }
            None => self.scroll_offset = 0,
        }

        let items: Vec<ListItem> = props
            .items
            .iter()
            .map(|item| ListItem::new(Line::raw(item.as_str())))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(props.selected);
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}
