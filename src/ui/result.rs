use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use super::palette::{energy_color, percentage_of};
use crate::app::App;
use crate::models::Status;

const SPOON: &str = "🥄";

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let engine = app.engine();
    let baseline = engine.baseline();

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .split(area);

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(columns[1]);

    render_baseline(frame, chunks[0], baseline, app.is_pulsing(now));
    render_spoons(frame, chunks[1], baseline);
    render_energy_bar(frame, chunks[2], engine.current_capacity(), baseline);
    render_adjust(frame, chunks[3]);
    render_statuses(frame, chunks[4], app);
    render_current_capacity(frame, chunks[5], engine.current_capacity(), engine.status());
    render_tracker_hint(frame, chunks[6], baseline);
    render_controls(frame, chunks[7]);
}

fn render_baseline(frame: &mut Frame, area: Rect, baseline: i32, pulsing: bool) {
    let number_style = if pulsing {
        Style::default().fg(Color::Yellow).bold().reversed()
    } else {
        Style::default().fg(Color::White).bold()
    };

    let content = vec![
        Line::from(Span::styled(
            "YOUR MAXIMUM SPOON CAPACITY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", baseline), number_style)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_spoons(frame: &mut Frame, area: Rect, baseline: i32) {
    let spoons = vec![SPOON; baseline.max(0) as usize].join(" ");
    let widget = Paragraph::new(spoons)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_energy_bar(frame: &mut Frame, area: Rect, capacity: i32, baseline: i32) {
    let percentage = percentage_of(capacity, baseline).min(100);
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(energy_color(percentage))
                .bg(Color::DarkGray),
        )
        .percent(percentage as u16)
        .label(format!("{}% of full capacity", percentage));
    frame.render_widget(gauge, area);
}

fn render_adjust(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[-]", Style::default().fg(Color::Cyan).bold()),
        Span::styled("  Adjust  ", Style::default().fg(Color::Gray)),
        Span::styled("[+]", Style::default().fg(Color::Cyan).bold()),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_statuses(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let mut lines = vec![
        Line::from(Span::styled(
            "Current Energy Status",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    for status in Status::ALL {
        let is_current = status == engine.status();
        let style = if is_current {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_current { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{:<26}", status.label()), style),
            Span::styled(format!("{:>3} spoons", engine.capacity_for(status)), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_current_capacity(frame: &mut Frame, area: Rect, capacity: i32, status: Status) {
    let content = vec![
        Line::from(Span::styled(
            format!("Current Capacity: {} spoons", capacity),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            status.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_tracker_hint(frame: &mut Frame, area: Rect, baseline: i32) {
    let content = vec![
        Line::from(vec![
            Span::raw("· Set "),
            Span::styled(baseline.to_string(), Style::default().bold()),
            Span::raw(" as your \"Maximum Spoons\" in your tracker"),
        ]),
        Line::from("· Daily energy is shown as a percentage of this maximum"),
        Line::from(
            "· This is your optimal capacity; during burnout or high stress you'll have fewer spoons",
        ),
    ];

    let widget = Paragraph::new(content)
        .fg(Color::Gray)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "+/- adjust  ·  j/k status  ·  b back  ·  r retake  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
