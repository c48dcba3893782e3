//! The display sink: one read-only line of text

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::state::DisplayText;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ResultLabelProps<'a> {
    pub display: &'a DisplayText,
    pub is_loading: bool,
    pub tick_count: u32,
}

pub struct ResultLabel;

impl ResultLabel {
    pub const HEIGHT: u16 = 3;
}

impl Component for ResultLabel {
    type Props<'a> = ResultLabelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let style = match props.display {
            DisplayText::Reading(_) => Style::default().fg(Color::White).bold(),
            DisplayText::Error(_) => Style::default().fg(Color::Rgb(200, 100, 100)),
            DisplayText::Prompt => Style::default().fg(Color::Yellow),
            DisplayText::Empty => Style::default().fg(Color::DarkGray),
        };

        let mut spans = Vec::with_capacity(2);
        if props.is_loading {
            let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
            spans.push(Span::styled(
                format!("{spinner} "),
                Style::default().fg(Color::Cyan),
            ));
        }
        spans.push(Span::styled(props.display.text(), style));

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)));
        let label = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(label, area);
    }
}
