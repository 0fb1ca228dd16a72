//! The built-in "at your best" question flow.

use crate::models::{AnswerOption, Catalog, Question};

/// Every built-in question offers four options scored -1..=2 in order.
const OPTION_ADJUSTMENTS: [i32; 4] = [-1, 0, 1, 2];

struct BuiltinQuestion {
    id: &'static str,
    icon: &'static str,
    text: &'static str,
    subtext: Option<&'static str>,
    labels: [&'static str; 4],
}

const BUILTIN_QUESTIONS: [BuiltinQuestion; 5] = [
    BuiltinQuestion {
        id: "optimalEnergy",
        icon: "⚡",
        text: "When you're at your absolute best, how would you describe your energy levels?",
        subtext: None,
        labels: [
            "Good but still limited compared to others",
            "Strong and steady throughout the day",
            "Very high with bursts of hyperfocus/flow",
            "Exceptional - I can take on almost anything",
        ],
    },
    BuiltinQuestion {
        id: "taskCapacity",
        icon: "📝",
        text: "On your best days, how many demanding tasks can you complete?",
        subtext: None,
        labels: [
            "2-3 tasks with breaks",
            "4-6 tasks throughout the day",
            "7-10 tasks with good momentum",
            "10+ tasks with energy to spare",
        ],
    },
    BuiltinQuestion {
        id: "socialCapacity",
        icon: "👥",
        text: "At your best, what's your social capacity?",
        subtext: None,
        labels: [
            "Small gatherings with trusted people",
            "Medium social events with recovery time",
            "Full day social events with short breaks",
            "Multiple days of socializing with minimal drain",
        ],
    },
    BuiltinQuestion {
        id: "recoveryTime",
        icon: "🔄",
        text: "When fully rested, how quickly do you bounce back from exertion?",
        subtext: None,
        labels: [
            "Need a full day to recover from demanding days",
            "Need a good night's sleep to recharge",
            "Can recover with short breaks throughout the day",
            "Quick to recover, rarely feel fully depleted",
        ],
    },
    BuiltinQuestion {
        id: "adaptability",
        icon: "🔄",
        text: "How adaptable are you when you're at your best?",
        subtext: Some("(handling changes, transitions, or unexpected events)"),
        labels: [
            "Need structure but can handle some change",
            "Adapt well with a little preparation",
            "Handle most changes smoothly",
            "Thrive with variety and new challenges",
        ],
    },
];

pub fn builtin_catalog() -> Catalog {
    let questions = BUILTIN_QUESTIONS
        .iter()
        .map(|builtin| Question {
            id: builtin.id.to_string(),
            text: builtin.text.to_string(),
            subtext: builtin.subtext.map(str::to_string),
            icon: Some(builtin.icon.to_string()),
            options: builtin
                .labels
                .iter()
                .zip(OPTION_ADJUSTMENTS)
                .enumerate()
                .map(|(index, (label, spoon_adjustment))| AnswerOption {
                    value: index as u32 + 1,
                    label: label.to_string(),
                    spoon_adjustment,
                })
                .collect(),
        })
        .collect();

    Catalog::from_trusted(questions)
}
