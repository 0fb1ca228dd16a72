use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Self-reported state that deducts spoons from the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Optimal,
    Stressed,
    Burnout,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}' (expected optimal, stressed or burnout)")]
pub struct ParseStatusError(String);

impl Status {
    pub const ALL: [Status; 3] = [Status::Optimal, Status::Stressed, Status::Burnout];

    pub fn spoon_adjustment(self) -> i32 {
        match self {
            Status::Optimal => 0,
            Status::Stressed => -3,
            Status::Burnout => -6,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Status::Optimal => "You're at your full capacity",
            Status::Stressed => "You're experiencing high stress",
            Status::Burnout => "You're in burnout or recovery",
        }
    }

    /// Row label shown next to the status' capacity.
    pub fn label(self) -> &'static str {
        match self {
            Status::Optimal => "Optimal (100%)",
            Status::Stressed => "High Stress (75%)",
            Status::Burnout => "Burnout/Recovery (50%)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Optimal => "optimal",
            Status::Stressed => "stressed",
            Status::Burnout => "burnout",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Status::Optimal => Status::Stressed,
            Status::Stressed => Status::Burnout,
            Status::Burnout => Status::Optimal,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Status::Optimal => Status::Burnout,
            Status::Stressed => Status::Optimal,
            Status::Burnout => Status::Stressed,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimal" => Ok(Status::Optimal),
            "stressed" => Ok(Status::Stressed),
            "burnout" => Ok(Status::Burnout),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustments() {
        assert_eq!(Status::Optimal.spoon_adjustment(), 0);
        assert_eq!(Status::Stressed.spoon_adjustment(), -3);
        assert_eq!(Status::Burnout.spoon_adjustment(), -6);
        assert_eq!(Status::default(), Status::Optimal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("burnout".parse::<Status>(), Ok(Status::Burnout));
        assert_eq!(" Stressed ".parse::<Status>(), Ok(Status::Stressed));
        assert!("tired".parse::<Status>().is_err());
    }

    #[test]
    fn test_cycle() {
        for status in Status::ALL {
            assert_eq!(status.next().previous(), status);
        }
        assert_eq!(Status::Burnout.next(), Status::Optimal);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Status::Stressed).unwrap();
        assert_eq!(json, "\"stressed\"");
    }
}
