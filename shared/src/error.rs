use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bracketed,
    Tagged,
    Bare,
}

/// Error surfaced by every store operation. Rendered as `<label>[<detail>]`, or
/// `<label>: <detail>` when the detail is an identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LabelledError {
    label: String,
    detail: Option<String>,
    style: Style,
}

impl LabelledError {
    pub fn bracketed(label: &str, detail: impl Display) -> Self {
        Self {
            label: label.to_string(),
            detail: Some(detail.to_string()),
            style: Style::Bracketed,
        }
    }

    pub fn tagged(label: &str, detail: impl Display) -> Self {
        Self {
            label: label.to_string(),
            detail: Some(detail.to_string()),
            style: Style::Tagged,
        }
    }

    pub fn bare(message: impl Into<String>) -> Self {
        Self {
            label: message.into(),
            detail: None,
            style: Style::Bare,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Logs the rendered message and hands the error back, so failure paths read as
    /// `return Err(LabelledError::bracketed(..).logged())`.
    pub fn logged(self) -> Self {
        log::error!("{self}");
        self
    }
}

impl Display for LabelledError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.style, &self.detail) {
            (Style::Bracketed, Some(detail)) => write!(f, "{}[{}]", self.label, detail),
            (Style::Tagged, Some(detail)) => write!(f, "{}: {}", self.label, detail),
            _ => write!(f, "{}", self.label),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelledError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_style() {
        let bracketed = LabelledError::bracketed("Put Item Error", "throttled");
        assert_eq!(bracketed.to_string(), "Put Item Error[throttled]");
        assert_eq!(bracketed.label(), "Put Item Error");
        assert_eq!(bracketed.detail(), Some("throttled"));

        let tagged = LabelledError::tagged("UserNotFound", "u-1");
        assert_eq!(tagged.to_string(), "UserNotFound: u-1");

        let bare = LabelledError::bare("Users Not found");
        assert_eq!(bare.to_string(), "Users Not found");
        assert_eq!(bare.detail(), None);
    }

    #[test]
    fn logged_returns_the_same_error() {
        let err = LabelledError::bracketed("Failed to Delete", "gone");
        assert_eq!(err.clone().logged(), err);
    }
}
