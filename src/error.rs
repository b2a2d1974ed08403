//! Error types for settings, questions and the session lifecycle

use core::fmt;
use std::io;

/// Failure to load, parse or validate [`crate::Settings`]
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings i/o failed: {err}"),
            Self::Parse(err) => write!(f, "settings are not valid JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// A question whose option set breaks the four-unique-values contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionError {
    DuplicateOption { value: u32 },
    AnswerNotOffered { answer: u32 },
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateOption { value } => write!(f, "option {value} appears more than once"),
            Self::AnswerNotOffered { answer } => {
                write!(f, "correct answer {answer} is not among the options")
            }
        }
    }
}

impl std::error::Error for QuestionError {}

/// Misuse of the [`crate::Session`] lifecycle. Never fatal: the call is skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    AlreadyInitialized,
    NotRunning,
    /// Settings rejected at `init`; the session stays unstarted
    InvalidSettings(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "session was already initialized"),
            Self::NotRunning => write!(f, "session is not running"),
            Self::InvalidSettings(reason) => write!(f, "cannot start session: {reason}"),
        }
    }
}

impl std::error::Error for SessionError {}
