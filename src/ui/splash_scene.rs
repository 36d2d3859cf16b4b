//! Title screen.

use super::game_common::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE_ART: [&str; 5] = [
    r" ___ _                                  ",
    r"| _ \ |__ _ _  _ _ _ ___  ___ _ __      ",
    r"|  _/ / _` | || | '_/ _ \/ _ \ '  \     ",
    r"|_| |_\__,_|\_, |_| \___/\___/_|_|_|    ",
    r"            |__/                        ",
];

pub fn render_splash(frame: &mut Frame, area: Rect, sound_on: bool) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = TITLE_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "\u{1F522}  \u{1F524}  \u{1F5BC}",
        Style::default(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to play!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "[Tab] Sound {}   [Esc] Quit",
            if sound_on { "on" } else { "off" }
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, centered_rect(inner, inner.width, height));
}
