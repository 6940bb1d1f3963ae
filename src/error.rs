// src/error.rs
//! Every failure in the lookup pipeline, from input validation to the fetch.

use serde::Serialize;
use thiserror::Error;

const TITLE_NOT_FOUND: &str = "Word not found";
const TITLE_INVALID: &str = "Invalid input";
const TITLE_INTERNAL: &str = "Something Went Wrong.";

const MSG_NOT_FOUND: &str = "We couldn't find definitions for the word you were looking for.";
const MSG_INVALID: &str = "No word provided";
const MSG_INTERNAL: &str = "Our servers ran into some problem.";

const RESOLUTION: &str = "You can try the search again or head to the web instead.";

/// Which stage rejected the lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    WordNotFound,
    UnsupportedLayout,
    DecodeFailure,
    TransportFailure,
}

/// The single error type of the crate.
///
/// The payload is a detail string for logs. What a caller shows to a user
/// comes from [`LookupError::to_body`], which has the same shape for every
/// variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error("unsupported page layout: {0}")]
    UnsupportedLayout(String),

    #[error("could not decode page body: {0}")]
    DecodeFailure(String),

    #[error("fetch failed: {0}")]
    TransportFailure(String),
}

/// Serializable `{statusCode, title, message, resolution}` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub title: String,
    pub message: String,
    pub resolution: String,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidInput(_) => ErrorKind::InvalidInput,
            LookupError::WordNotFound(_) => ErrorKind::WordNotFound,
            LookupError::UnsupportedLayout(_) => ErrorKind::UnsupportedLayout,
            LookupError::DecodeFailure(_) => ErrorKind::DecodeFailure,
            LookupError::TransportFailure(_) => ErrorKind::TransportFailure,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            LookupError::InvalidInput(d)
            | LookupError::WordNotFound(d)
            | LookupError::UnsupportedLayout(d)
            | LookupError::DecodeFailure(d)
            | LookupError::TransportFailure(d) => d,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput => 400,
            ErrorKind::WordNotFound => 404,
            ErrorKind::UnsupportedLayout
            | ErrorKind::DecodeFailure
            | ErrorKind::TransportFailure => 500,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => TITLE_INVALID,
            ErrorKind::WordNotFound => TITLE_NOT_FOUND,
            ErrorKind::UnsupportedLayout
            | ErrorKind::DecodeFailure
            | ErrorKind::TransportFailure => TITLE_INTERNAL,
        }
    }

    /// User-facing message. Transport failures pass the underlying error text through.
    pub fn message(&self) -> String {
        match self {
            LookupError::InvalidInput(_) => s!(MSG_INVALID),
            LookupError::WordNotFound(_) => s!(MSG_NOT_FOUND),
            LookupError::UnsupportedLayout(_) | LookupError::DecodeFailure(_) => s!(MSG_INTERNAL),
            LookupError::TransportFailure(detail) => detail.clone(),
        }
    }

    pub fn resolution(&self) -> &'static str {
        RESOLUTION
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status_code(),
            title: s!(self.title()),
            message: self.message(),
            resolution: s!(self.resolution()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_matches_wire_shape() {
        let err = LookupError::WordNotFound(s!("no heading"));
        let json = serde_json::to_value(err.to_body()).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["title"], "Word not found");
        assert_eq!(json["message"], MSG_NOT_FOUND);
        assert_eq!(json["resolution"], RESOLUTION);
    }

    #[test]
    fn transport_message_carries_underlying_error() {
        let err = LookupError::TransportFailure(s!("operation timed out"));
        let body = err.to_body();
        assert_eq!(body.status_code, 500);
        assert_eq!(body.title, TITLE_INTERNAL);
        assert_eq!(body.message, "operation timed out");
    }

    #[test]
    fn internal_kinds_hide_detail() {
        for err in [
            LookupError::DecodeFailure(s!("bad hex")),
            LookupError::UnsupportedLayout(s!("boundaries went backwards")),
        ] {
            let body = err.to_body();
            assert_eq!(body.status_code, 500);
            assert_eq!(body.message, MSG_INTERNAL);
            assert!(!body.message.contains(err.detail()));
        }
    }

    #[test]
    fn invalid_input_is_client_error() {
        let err = LookupError::InvalidInput(s!("empty word"));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.status_code(), 400);
    }
}
