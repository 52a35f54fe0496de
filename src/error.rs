//! This module implements the error type used throughout `datefmt_rs`.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of error that a `DateError` represents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// TypeError
    Type,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// An internal assertion failed.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// Messages that are raised in more than one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    /// The input could not be read as a date.
    InvalidDate,
    /// The input was empty.
    EmptyInput,
    /// The computed instant is outside the supported range.
    InstantOutOfRange,
    /// A diff rule other than the last one has a ratio of zero.
    ZeroDiffRatio,
    /// A diff label is not short ASCII.
    InvalidDiffLabel,
    /// The system clock could not be read.
    SystemClock,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::InvalidDate => "Invalid Date",
            Self::EmptyInput => "Invalid Date: input is empty",
            Self::InstantOutOfRange => "Invalid Date: instant is outside the supported range",
            Self::ZeroDiffRatio => "only the last diff rule may have a ratio of zero",
            Self::InvalidDiffLabel => "diff labels must be ASCII and at most 16 bytes long",
            Self::SystemClock => "error fetching system time",
        }
    }
}

/// The error type returned by every fallible operation in `datefmt_rs`.
///
/// A value that cannot be read as a date produces an error whose message
/// displays as `Invalid Date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    error_message: Option<ErrorMessage>,
}

impl DateError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            error_message: None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Returns an invalid date error.
    #[inline]
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::syntax().with_enum(ErrorMessage::InvalidDate)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self.error_message = None;
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self.error_message = Some(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the `ErrorMessage` this error was built with, if any.
    #[inline]
    #[must_use]
    pub const fn error_message(&self) -> Option<ErrorMessage> {
        self.error_message
    }

    /// Returns whether this error reports a value that is not a valid date.
    #[inline]
    #[must_use]
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self.error_message,
            Some(
                ErrorMessage::InvalidDate
                    | ErrorMessage::EmptyInput
                    | ErrorMessage::InstantOutOfRange
            )
        )
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            return self.kind.fmt(f);
        }
        f.write_str(&self.msg)
    }
}

impl core::error::Error for DateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_display() {
        let err = DateError::invalid_date();
        assert_eq!(alloc::format!("{err}"), "Invalid Date");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.is_invalid_date());
    }

    #[test]
    fn range_error_messages() {
        let err = DateError::range().with_enum(ErrorMessage::InstantOutOfRange);
        assert!(err.is_invalid_date());
        let err = DateError::range().with_enum(ErrorMessage::ZeroDiffRatio);
        assert!(!err.is_invalid_date());
        assert_eq!(alloc::format!("{}", DateError::range()), "RangeError");
    }

    #[test]
    fn invalid_date_follows_the_message_kind() {
        let err = DateError::syntax().with_enum(ErrorMessage::EmptyInput);
        assert_eq!(err.error_message(), Some(ErrorMessage::EmptyInput));
        assert!(err.is_invalid_date());

        // Free text never marks an error as an invalid date.
        let err = DateError::range().with_message("Invalid Date");
        assert_eq!(err.error_message(), None);
        assert!(!err.is_invalid_date());

        // A later free text message replaces the enum.
        let err = DateError::invalid_date().with_message("custom");
        assert!(!err.is_invalid_date());
        assert_eq!(alloc::format!("{err}"), "custom");
    }
}
