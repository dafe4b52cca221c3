//! Quiz parameters selected by the user

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quiz difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Selector options, in display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown difficulty: {}", s))
    }
}

/// Kind of question the quiz should contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum QuestionType {
    #[default]
    Direct,
    #[serde(rename = "Case Scenario", alias = "CaseScenario", alias = "case_scenario")]
    CaseScenario,
    #[serde(rename = "MCQ")]
    Mcq,
    Essay,
}

impl QuestionType {
    /// Selector options, in display order
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Direct,
        QuestionType::CaseScenario,
        QuestionType::Mcq,
        QuestionType::Essay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Direct => "Direct",
            QuestionType::CaseScenario => "Case Scenario",
            QuestionType::Mcq => "MCQ",
            QuestionType::Essay => "Essay",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("CaseScenario") || s.eq_ignore_ascii_case("case_scenario") {
            return Ok(QuestionType::CaseScenario);
        }
        QuestionType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown question type: {}", s))
    }
}

/// Difficulty and question type, as picked in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct QuizParameters {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub question_type: QuestionType,
}

impl QuizParameters {
    pub fn new(difficulty: Difficulty, question_type: QuestionType) -> Self {
        Self {
            difficulty,
            question_type,
        }
    }
}
