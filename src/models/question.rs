use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
    pub spoon_adjustment: i32,
}

impl Question {
    pub fn option(&self, value: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Position of the option with `value` in display order.
    pub fn option_position(&self, value: u32) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }
}
