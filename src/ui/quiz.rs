use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerOption, Question};

const DEFAULT_ICON: &str = "?";

pub fn render(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let Some(question) = app.engine().catalog().get(index) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], app);
    render_question_text(frame, chunks[3], question);

    let answered = app
        .engine()
        .answer_for(&question.id)
        .and_then(|value| question.option_position(value));
    render_options(
        frame,
        chunks[4],
        &question.options,
        app.selected_option(),
        answered,
    );
    render_controls(frame, chunks[5]);
}

fn render_progress(frame: &mut Frame, bar: Rect, label: Rect, app: &App) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(app.engine().progress_fraction().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar);

    let progress = format!(
        "Question {} of {}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, label);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let icon = question.icon.as_deref().unwrap_or(DEFAULT_ICON);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}  ", icon), Style::default()),
        Span::styled(
            question.text.as_str(),
            Style::default().fg(Color::White).bold(),
        ),
    ])];

    if let Some(subtext) = &question.subtext {
        lines.push(Line::from(Span::styled(
            subtext.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[AnswerOption],
    selected: usize,
    answered: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let check = if answered == Some(index) { " ✓" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.label.as_str(), style),
            Span::styled(check, Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k navigate  ·  enter select  ·  b back  ·  s skip  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
