//! Splitting a completion into questions and answers
//!
//! The alternating split assumes the model emits question and answer
//! blocks strictly in turn. Nothing checks this: one extra paragraph shifts
//! every later block to the wrong side. The result is a best-effort
//! labeling, not a parse of the quiz's structure.

use crate::quiz::Variant;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Shown when answers are requested from the chat variant
pub const PLACEHOLDER_ANSWERS: &str = "These are the answers to the quiz questions.";

fn block_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"\n{2,}").expect("valid block boundary regex"))
}

/// Split on runs of two or more newlines.
///
/// Empty blocks (leading or trailing boundaries) are kept so that block
/// positions match the raw text.
pub fn split_blocks(text: &str) -> Vec<&str> {
    block_boundary().split(text).collect()
}

/// Even positions are questions, odd positions are answers
pub fn partition_blocks<'a>(blocks: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut questions = Vec::with_capacity(blocks.len().div_ceil(2));
    let mut answers = Vec::with_capacity(blocks.len() / 2);
    for (index, block) in blocks.iter().enumerate() {
        if index % 2 == 0 {
            questions.push(*block);
        } else {
            answers.push(*block);
        }
    }
    (questions, answers)
}

/// Quiz content ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedQuiz {
    /// Completion shown as one body; answers are a fixed placeholder
    Raw { body: String, answers: String },
    /// Completion split into alternating question and answer blocks
    Alternating {
        questions: Vec<String>,
        answers: Vec<String>,
    },
}

impl ParsedQuiz {
    pub fn questions(&self) -> Vec<&str> {
        match self {
            ParsedQuiz::Raw { body, .. } => vec![body.as_str()],
            ParsedQuiz::Alternating { questions, .. } => {
                questions.iter().map(String::as_str).collect()
            }
        }
    }

    pub fn answers(&self) -> Vec<&str> {
        match self {
            ParsedQuiz::Raw { answers, .. } => vec![answers.as_str()],
            ParsedQuiz::Alternating { answers, .. } => answers.iter().map(String::as_str).collect(),
        }
    }
}

/// Interpret a completion according to the configured variant
pub fn parse_completion(variant: Variant, completion: &str) -> ParsedQuiz {
    match variant {
        Variant::Chat => ParsedQuiz::Raw {
            body: completion.to_string(),
            answers: PLACEHOLDER_ANSWERS.to_string(),
        },
        Variant::Completion => {
            let blocks = split_blocks(completion);
            let (questions, answers) = partition_blocks(&blocks);
            tracing::debug!(
                blocks = blocks.len(),
                questions = questions.len(),
                answers = answers.len(),
                "split completion"
            );
            ParsedQuiz::Alternating {
                questions: questions.into_iter().map(str::to_string).collect(),
                answers: answers.into_iter().map(str::to_string).collect(),
            }
        }
    }
}
