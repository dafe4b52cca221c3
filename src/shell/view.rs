//! Widget description produced by one page rerun

use serde::Serialize;
use std::fmt;

/// One rendered element of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Title {
        text: String,
    },
    Markdown {
        text: String,
    },
    Header {
        text: String,
    },
    FileUploader {
        label: String,
        accept: String,
        current: Option<String>,
    },
    TextArea {
        label: String,
        value: String,
        height: u32,
    },
    SelectBox {
        label: String,
        options: Vec<String>,
        selected: String,
    },
    Button {
        label: String,
    },
    /// Inline, user-facing error
    Error {
        message: String,
    },
    /// Failure that aborted the rerun
    Exception {
        message: String,
    },
}

impl Widget {
    pub fn title(text: impl Into<String>) -> Self {
        Widget::Title { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Widget::Markdown { text: text.into() }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Widget::Header { text: text.into() }
    }

    pub fn text_area(label: impl Into<String>, value: impl Into<String>) -> Self {
        Widget::TextArea {
            label: label.into(),
            value: value.into(),
            height: 300,
        }
    }

    pub fn select_box<T: ToString>(label: impl Into<String>, options: &[T], selected: &T) -> Self {
        Widget::SelectBox {
            label: label.into(),
            options: options.iter().map(ToString::to_string).collect(),
            selected: selected.to_string(),
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Widget::Button {
            label: label.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Widget::Error {
            message: message.into(),
        }
    }

    pub fn exception(message: impl Into<String>) -> Self {
        Widget::Exception {
            message: message.into(),
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::Title { text } => writeln!(f, "# {}", text),
            Widget::Markdown { text } => writeln!(f, "{}", text),
            Widget::Header { text } => writeln!(f, "## {}", text),
            Widget::FileUploader {
                label,
                accept,
                current,
            } => match current {
                Some(name) => writeln!(f, "[{} ({})] {}", label, accept, name),
                None => writeln!(f, "[{} ({})] <no file>", label, accept),
            },
            Widget::TextArea { label, value, .. } => {
                writeln!(f, "{}:", label)?;
                for line in value.lines() {
                    writeln!(f, "  | {}", line)?;
                }
                Ok(())
            }
            Widget::SelectBox {
                label,
                options,
                selected,
            } => writeln!(f, "{}: {} (options: {})", label, selected, options.join(", ")),
            Widget::Button { label } => writeln!(f, "[ {} ]", label),
            Widget::Error { message } => writeln!(f, "ERROR: {}", message),
            Widget::Exception { message } => writeln!(f, "EXCEPTION: {}", message),
        }
    }
}

/// Output of one rerun: the main column plus the sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub main: Vec<Widget>,
    pub sidebar: Vec<Widget>,
}

impl View {
    pub fn push(&mut self, widget: Widget) {
        self.main.push(widget);
    }

    pub fn push_sidebar(&mut self, widget: Widget) {
        self.sidebar.push(widget);
    }

    /// All widgets, sidebar last
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.main.iter().chain(self.sidebar.iter())
    }

    pub fn has_button(&self, label: &str) -> bool {
        self.widgets()
            .any(|w| matches!(w, Widget::Button { label: l } if l == label))
    }

    /// Text of every inline error
    pub fn errors(&self) -> Vec<&str> {
        self.widgets()
            .filter_map(|w| match w {
                Widget::Error { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Find a text area by label
    pub fn text_area(&self, label: &str) -> Option<&str> {
        self.widgets().find_map(|w| match w {
            Widget::TextArea { label: l, value, .. } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for widget in &self.main {
            write!(f, "{}", widget)?;
        }
        if !self.sidebar.is_empty() {
            writeln!(f, "--- sidebar ---")?;
            for widget in &self.sidebar {
                write!(f, "{}", widget)?;
            }
        }
        Ok(())
    }
}
