mod palette;
mod quiz;
mod result;
mod welcome;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Intro => welcome::render(frame, area, app),
        Screen::Question(index) => quiz::render(frame, area, app, index),
        Screen::Results => result::render(frame, area, app, Instant::now()),
    }
}
