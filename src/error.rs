use thiserror::Error;

/// Shown when a request fails and the backend gave no usable detail.
pub const FALLBACK_MESSAGE: &str = "Failed to analyze drugs. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter at least one drug name")]
    EmptyInput,
}

/// Any failure of the outbound analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("analysis service responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not reach analysis service: {0}")]
    Transport(String),
    #[error("malformed analysis response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Text for the error banner: the backend's detail if it sent one.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_shown_verbatim() {
        let e = RequestError::Status {
            status: 429,
            detail: Some("rate limited".into()),
        };
        assert_eq!(e.user_message(), "rate limited");
    }

    #[test]
    fn everything_else_uses_fallback() {
        let cases = [
            RequestError::Status {
                status: 500,
                detail: None,
            },
            RequestError::Status {
                status: 500,
                detail: Some(String::new()),
            },
            RequestError::Transport("connection refused".into()),
            RequestError::Decode("expected array".into()),
        ];
        for e in cases {
            assert_eq!(e.user_message(), FALLBACK_MESSAGE, "{e:?}");
        }
    }
}
