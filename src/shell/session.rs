//! State preserved between reruns of one page

use crate::pdf::UploadedDocument;
use crate::quiz::{Difficulty, ParsedQuiz, QuestionType, QuizParameters};

/// A user interaction; each one triggers exactly one rerun
#[derive(Debug, Clone)]
pub enum Event {
    Upload(UploadedDocument),
    ClearUpload,
    SelectDifficulty(Difficulty),
    SelectQuestionType(QuestionType),
    GenerateQuiz,
    ShowAnswers,
    /// Rerun without changing anything
    Refresh,
}

/// Buttons pressed during the current rerun
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub generate: bool,
    pub show_answers: bool,
}

/// Inputs a quiz was generated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizKey {
    pub memo_key: String,
    pub params: QuizParameters,
}

/// Why a generation produced no quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// Shown inline; the page stays usable
    Reported(String),
    /// Response could not be read at all; ends the rerun like an uncaught error
    Fatal(String),
}

/// Last generation outcome, with the inputs it belongs to
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub key: QuizKey,
    pub result: Result<ParsedQuiz, GenerationFailure>,
}

/// Current upload with its memo key computed once
#[derive(Debug, Clone)]
pub struct CurrentUpload {
    pub document: UploadedDocument,
    pub memo_key: String,
}

/// Widget values and memoized results of one page
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub upload: Option<CurrentUpload>,
    pub params: QuizParameters,
    pub outcome: Option<QuizOutcome>,
}

impl SessionState {
    /// Record the event's widget value and report which buttons it presses
    pub fn apply(&mut self, event: Event) -> Triggers {
        match event {
            Event::Upload(document) => {
                let memo_key = document.memo_key();
                tracing::debug!(name = %document.name, media_type = %document.media_type, "upload");
                self.upload = Some(CurrentUpload { document, memo_key });
                Triggers::default()
            }
            Event::ClearUpload => {
                self.upload = None;
                Triggers::default()
            }
            Event::SelectDifficulty(difficulty) => {
                self.params.difficulty = difficulty;
                Triggers::default()
            }
            Event::SelectQuestionType(question_type) => {
                self.params.question_type = question_type;
                Triggers::default()
            }
            Event::GenerateQuiz => Triggers {
                generate: true,
                ..Triggers::default()
            },
            Event::ShowAnswers => Triggers {
                show_answers: true,
                ..Triggers::default()
            },
            Event::Refresh => Triggers::default(),
        }
    }

    /// Key of the quiz the current inputs would produce
    pub fn current_key(&self) -> Option<QuizKey> {
        self.upload.as_ref().map(|upload| QuizKey {
            memo_key: upload.memo_key.clone(),
            params: self.params,
        })
    }

    /// Outcome generated from exactly the current inputs
    pub fn current_outcome(&self) -> Option<&QuizOutcome> {
        let key = self.current_key()?;
        self.outcome.as_ref().filter(|outcome| outcome.key == key)
    }
}
