//! Interactive quiz page
//!
//! Models the upload → extract → generate → reveal flow as a page that is
//! re-rendered from scratch on every interaction.

mod page;
mod session;
mod view;

pub use page::{
    QuizPage, GENERATE_BUTTON, PAGE_TITLE, SHOW_ANSWERS_BUTTON, UPLOAD_PROMPT, WRONG_FILE_TYPE,
};
pub use session::{Event, GenerationFailure, QuizKey, QuizOutcome, SessionState, Triggers};
pub use view::{View, Widget};
