use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::format::{group_thousands, truncate_address};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::mint::Severity;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body_area, footer_area) = layout_regions(area);

    let header = Header::new(&app.config().app.name, app.config().network);
    frame.render_widget(header.widget(), header_area);

    frame.render_widget(body_widget(app), body_area);

    let footer = Footer::new();
    frame.render_widget(footer.widget(footer_area), footer_area);
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let view = app.view();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Total minted: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            group_thousands(view.minted.unwrap_or(0)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Mint price: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("{} uSTX", group_thousands(app.config().mint_price as u128)),
            Style::default().fg(HEADER_TEXT),
        ),
    ]));
    lines.push(Line::from(""));

    match view.address() {
        Some(address) => {
            lines.push(Line::from(vec![
                Span::styled(" Wallet: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(truncate_address(address), Style::default().fg(STATUS_OK)),
            ]));
            let mint_hint = if view.is_minting() {
                Span::styled(
                    " Minting in progress...",
                    Style::default().fg(DIM_TEXT).add_modifier(Modifier::DIM),
                )
            } else {
                Span::styled(" Press m to mint", Style::default().fg(HEADER_TEXT))
            };
            lines.push(Line::from(mint_hint));
        }
        None => {
            lines.push(Line::from(Span::styled(
                " Not connected. Press c to connect a wallet.",
                Style::default().fg(DIM_TEXT),
            )));
        }
    }

    lines.push(Line::from(""));
    if let Some(status) = &view.status {
        let color = match status.severity {
            Severity::Info => HEADER_TEXT,
            Severity::Success => STATUS_OK,
            Severity::Error => STATUS_ERROR,
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        )));
        if let Some(link) = &status.link {
            lines.push(Line::from(Span::styled(
                format!("   {}", link),
                Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            )));
        }
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
