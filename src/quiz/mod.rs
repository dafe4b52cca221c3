//! Quiz generation: prompt building, the completion client and response parsing

mod client;
mod params;
mod parser;
mod request;

pub use client::{QuizClient, QuizGenerator};
pub use params::{Difficulty, QuestionType, QuizParameters};
pub use parser::{partition_blocks, parse_completion, split_blocks, ParsedQuiz, PLACEHOLDER_ANSWERS};
pub use request::{
    build_prompt, build_request_body, extract_completion, Variant, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, NO_QUIZ_GENERATED, SYSTEM_PROMPT,
};
