/// Which view the session is on, derived from the engine's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Question(usize),
    Results,
}
