use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(64),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SPOONS BASELINE CALCULATOR",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Calculate your maximum spoon capacity".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(
            "Find your maximum energy capacity when you're at your absolute best: \
             fully rested, low stress, in optimal conditions.",
        ),
        Line::from(""),
        Line::from(
            "Think about your very best days when answering. The result is the \
             number to set as \"Maximum Spoons\" in your tracker.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} questions · skip any you're unsure about", app.total_questions()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, columns[1]);
}
