//! Running-game UI: question, option tiles, progress, and feedback.

use super::game_common::{
    create_game_layout, progress_line, render_feedback_overlay, render_finished_banner,
    render_info_panel_frame, render_status_bar, tile_line,
};
use super::game_mode_color;
use crate::games::numbers::COUNT_GLYPH;
use crate::games::{
    picture, words, ActiveRound, GameMode, GameSession, NumberQuestion, PictureQuestion, WordCell,
    WordQuestion,
};
use crate::round::{Question, RoundEngine, RoundPhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// What a mode contributes to the shared round layout.
struct QuestionView {
    lines: Vec<Line<'static>>,
    tiles: Vec<String>,
}

fn numbers_view(engine: &RoundEngine<NumberQuestion>) -> QuestionView {
    let q = engine.question();
    let mut lines = vec![Line::from(Span::styled(
        q.prompt.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(count) = q.count {
        lines.push(Line::from(""));
        lines.push(Line::from(COUNT_GLYPH.repeat(count as usize)));
    }
    QuestionView {
        lines,
        tiles: q.options.iter().map(|n| n.to_string()).collect(),
    }
}

fn words_view(engine: &RoundEngine<WordQuestion>) -> QuestionView {
    let q = engine.question();
    let picks = engine.selection();
    let mut spans = Vec::new();
    for cell in q.cells(&picks) {
        let span = match cell {
            WordCell::Given(c) => Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            WordCell::Filled(c) => Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            WordCell::Blank => Span::styled(" _ ", Style::default().fg(Color::Yellow)),
        };
        spans.push(span);
    }
    QuestionView {
        lines: vec![
            Line::from(words::PROMPT),
            Line::from(""),
            Line::from(q.picture.clone()),
            Line::from(""),
            Line::from(spans),
        ],
        tiles: q
            .options
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect(),
    }
}

fn picture_view(engine: &RoundEngine<PictureQuestion>) -> QuestionView {
    let q = engine.question();
    QuestionView {
        lines: vec![
            Line::from(picture::PROMPT),
            Line::from(""),
            Line::from(q.picture.clone()),
        ],
        tiles: q.options.clone(),
    }
}

fn status_text<Q: Question>(engine: &RoundEngine<Q>) -> (String, Color) {
    match engine.phase() {
        RoundPhase::Presenting => {
            let remaining = engine
                .question()
                .slots()
                .saturating_sub(engine.selected_options().len());
            if engine.question().slots() > 1 {
                (format!("Letters left: {}", remaining), Color::Yellow)
            } else {
                ("Pick an answer".to_string(), Color::Yellow)
            }
        }
        RoundPhase::Evaluating => ("Press Enter to check!".to_string(), Color::Cyan),
        RoundPhase::Feedback(outcome) => (outcome.message().to_string(), Color::White),
        RoundPhase::Advancing => ("Next one coming up...".to_string(), Color::Green),
        RoundPhase::Finished => ("All done!".to_string(), Color::Green),
    }
}

fn controls(mode: GameMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        GameMode::Numbers => &[
            ("[\u{2190}\u{2192}]", "Move"),
            ("[Enter/0-9]", "Pick"),
            ("[[ ]]", "Prev/Next"),
            ("[Esc]", "Back"),
        ],
        GameMode::Words => &[
            ("[A-Z/Space]", "Letter"),
            ("[Enter]", "Check"),
            ("[[ ]]", "Prev/Next"),
            ("[Esc]", "Back"),
        ],
        GameMode::Picture => &[
            ("[\u{2190}\u{2192}]", "Move"),
            ("[Enter/1-4]", "Pick"),
            ("[[ ]]", "Prev/Next"),
            ("[Esc]", "Back"),
        ],
    }
}

pub fn render_round(frame: &mut Frame, area: Rect, session: &GameSession, sound_on: bool) {
    match &session.round {
        ActiveRound::Numbers(e) => draw(frame, area, session, e, numbers_view(e), sound_on),
        ActiveRound::Words(e) => draw(frame, area, session, e, words_view(e), sound_on),
        ActiveRound::Picture(e) => draw(frame, area, session, e, picture_view(e), sound_on),
    }
}

fn draw<Q: Question>(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    engine: &RoundEngine<Q>,
    view: QuestionView,
    sound_on: bool,
) {
    let mode = session.mode();
    let color = game_mode_color(mode);
    let title = format!(" {} {} ", mode.icon(), mode.title());
    let layout = create_game_layout(frame, area, &title, color, 10, 24);

    let mut lines = vec![progress_line(&engine.progress()), Line::from("")];
    lines.extend(view.lines);
    lines.push(Line::from(""));
    lines.push(tile_line(
        &view.tiles,
        session.cursor,
        engine.selected_options(),
        color,
    ));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        layout.content,
    );

    let (status, status_color) = status_text(engine);
    render_status_bar(frame, layout.status_bar, &status, status_color, controls(mode));

    render_info(frame, layout.info_panel, mode, engine, sound_on);

    if engine.is_finished() {
        let message = if engine.config().scoring {
            format!("Score: {}/{}", engine.score(), engine.len())
        } else {
            format!("{} of {} solved", engine.completed_count(), engine.len())
        };
        render_finished_banner(frame, layout.content, "Well done!", &message);
    } else if let Some(outcome) = engine.feedback().outcome() {
        render_feedback_overlay(frame, layout.content, outcome);
    }
}

fn render_info<Q: Question>(
    frame: &mut Frame,
    area: Rect,
    mode: GameMode,
    engine: &RoundEngine<Q>,
    sound_on: bool,
) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {}/{}", engine.current_index() + 1, engine.len()),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Solved: {}", engine.completed_count()),
            Style::default().fg(Color::Green),
        )),
    ];
    if engine.config().scoring {
        lines.push(Line::from(Span::styled(
            format!("Score: {}/{}", engine.score(), engine.len()),
            Style::default()
                .fg(game_mode_color(mode))
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[Tab] Sound {}", if sound_on { "on" } else { "off" }),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
