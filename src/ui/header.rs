use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::chain::Network;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};

pub struct Header<'a> {
    app_name: &'a str,
    network: Network,
}

impl<'a> Header<'a> {
    pub fn new(app_name: &'a str, network: Network) -> Self {
        Self { app_name, network }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(DIM_TEXT)),
            Span::styled(self.network.to_string(), Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
