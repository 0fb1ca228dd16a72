use ratatui::style::Color;

/// Colour band for an energy level given as a percentage of baseline.
pub fn energy_color(percentage: u32) -> Color {
    match percentage {
        75.. => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::Rgb(255, 152, 0),
        10..=24 => Color::Red,
        _ => Color::Magenta,
    }
}

/// `part` as a whole percentage of `whole`, rounded down.
pub fn percentage_of(part: i32, whole: i32) -> u32 {
    if whole <= 0 || part <= 0 {
        return 0;
    }
    (part as i64 * 100 / whole as i64) as u32
}
