//! Game select menu UI rendering.

use super::game_mode_color;
use crate::games::{GameMenu, GameMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_game_select(frame: &mut Frame, area: Rect, menu: &GameMenu) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Pick a Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GameMode::ALL.len() as u16 * 2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let selected = i == menu.selected_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(game_mode_color(*mode))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(format!("{}{} {}", prefix, mode.icon(), mode.title())),
                Line::from(""),
            ])
            .style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let selected = menu.selected();
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            selected.title(),
            Style::default()
                .fg(game_mode_color(selected))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            selected.description(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[\u{2191}\u{2193}]", Style::default().fg(Color::White)),
        Span::styled(" Move  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::styled(" Sound  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::styled(" Back", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, chunks[2]);
}
