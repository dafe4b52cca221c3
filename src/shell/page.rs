//! The quiz page: rerun-on-interaction rendering

use crate::error::{Error, Result};
use crate::pdf::TextExtractor;
use crate::quiz::{parse_completion, Difficulty, ParsedQuiz, QuestionType, QuizGenerator, Variant};
use crate::shell::session::{
    CurrentUpload, Event, GenerationFailure, QuizKey, QuizOutcome, SessionState, Triggers,
};
use crate::shell::view::{View, Widget};
use crate::source::TextCache;
use std::sync::Arc;

pub const PAGE_TITLE: &str = "📚 Course Quiz Generator";
pub const UPLOAD_PROMPT: &str = "_Please upload a PDF file to proceed._";
pub const WRONG_FILE_TYPE: &str = "Please upload a PDF file.";
pub const GENERATE_BUTTON: &str = "Generate Quiz";
pub const SHOW_ANSWERS_BUTTON: &str = "Show Answers";

/// One page session.
///
/// The page holds no derived state of its own: every `dispatch` records the
/// event in the session and then runs the whole page body again, reading
/// extracted text and quiz outcomes from memos keyed by their inputs.
pub struct QuizPage {
    state: SessionState,
    variant: Variant,
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuizGenerator>,
    texts: Arc<TextCache>,
}

impl QuizPage {
    pub fn new(
        variant: Variant,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuizGenerator>,
        texts: Arc<TextCache>,
    ) -> Self {
        Self {
            state: SessionState::default(),
            variant,
            extractor,
            generator,
            texts,
        }
    }

    /// Handle one interaction and return the freshly rendered page
    pub async fn dispatch(&mut self, event: Event) -> View {
        let triggers = self.state.apply(event);
        self.rerun(triggers).await
    }

    async fn rerun(&mut self, triggers: Triggers) -> View {
        let mut view = View::default();

        view.push(Widget::title(PAGE_TITLE));
        view.push(Widget::markdown(
            "Upload your course PDF, specify quiz details, and generate quiz questions.",
        ));
        view.push(Widget::FileUploader {
            label: "Choose a PDF file".to_string(),
            accept: "pdf".to_string(),
            current: self.state.upload.as_ref().map(|u| u.document.name.clone()),
        });

        let Some(upload) = self.state.upload.clone() else {
            view.push(Widget::markdown(UPLOAD_PROMPT));
            return view;
        };

        let text = match self.texts.get_or_extract(&upload.document, &self.extractor).await {
            Ok(text) => text,
            Err(Error::WrongFileType { media_type }) => {
                tracing::info!(%media_type, "rejected upload");
                view.push(Widget::error(WRONG_FILE_TYPE));
                return view;
            }
            Err(e) if e.is_extraction_failure() => {
                tracing::error!(error = %e, name = %upload.document.name, "text extraction failed");
                view.push(Widget::exception(e.to_string()));
                return view;
            }
            Err(e) => {
                tracing::warn!(error = %e, name = %upload.document.name, "upload could not be read");
                view.push(Widget::error(e.client_message()));
                return view;
            }
        };

        if text.is_empty() {
            return view;
        }

        view.push(Widget::markdown("**Extracted Text:**"));
        view.push(Widget::text_area("Text Content", text.as_str()));

        view.push_sidebar(Widget::header("Quiz Details"));
        view.push_sidebar(Widget::select_box(
            "Select Difficulty",
            &Difficulty::ALL,
            &self.state.params.difficulty,
        ));
        view.push_sidebar(Widget::select_box(
            "Select Question Type",
            &QuestionType::ALL,
            &self.state.params.question_type,
        ));
        view.push_sidebar(Widget::button(GENERATE_BUTTON));

        if triggers.generate {
            self.generate(&upload, &text).await;
        } else if triggers.show_answers && self.state.current_outcome().is_none() {
            tracing::debug!("show answers pressed without a current quiz");
        }

        if let Some(outcome) = self.state.current_outcome() {
            render_outcome(&mut view, &outcome.result, triggers.show_answers);
        }

        view
    }

    async fn generate(&mut self, upload: &CurrentUpload, text: &str) {
        let params = self.state.params;
        let result = match self.generator.generate(text, params).await {
            Ok(completion) => Ok(parse_completion(self.variant, &completion)),
            Err(e @ Error::MalformedCompletion { .. }) => {
                tracing::error!(error = %e, "unreadable completion response");
                Err(GenerationFailure::Fatal(e.to_string()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "quiz generation failed");
                Err(GenerationFailure::Reported(e.client_message()))
            }
        };

        self.state.outcome = Some(QuizOutcome {
            key: QuizKey {
                memo_key: upload.memo_key.clone(),
                params,
            },
            result,
        });
    }
}

fn render_outcome(
    view: &mut View,
    result: &std::result::Result<ParsedQuiz, GenerationFailure>,
    show_answers: bool,
) {
    let quiz = match result {
        Ok(quiz) => quiz,
        Err(GenerationFailure::Reported(message)) => {
            view.push(Widget::error(message.as_str()));
            return;
        }
        Err(GenerationFailure::Fatal(message)) => {
            view.push(Widget::exception(message.as_str()));
            return;
        }
    };

    view.push(Widget::markdown("### Generated Quiz Questions"));
    match quiz {
        ParsedQuiz::Raw { body, .. } => {
            view.push(Widget::text_area("Quiz Questions", body.as_str()));
        }
        ParsedQuiz::Alternating { questions, .. } => {
            for (i, question) in questions.iter().enumerate() {
                view.push(Widget::header(format!("Question {}", i + 1)));
                view.push(Widget::markdown(question.as_str()));
            }
        }
    }

    view.push(Widget::button(SHOW_ANSWERS_BUTTON));
    if !show_answers {
        return;
    }

    match quiz {
        ParsedQuiz::Raw { answers, .. } => {
            view.push(Widget::text_area("Quiz Answers", answers.as_str()));
        }
        ParsedQuiz::Alternating { answers, .. } => {
            for (i, answer) in answers.iter().enumerate() {
                view.push(Widget::header(format!("Answer {}", i + 1)));
                view.push(Widget::markdown(answer.as_str()));
            }
        }
    }
}
