pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Message shown for a failure that carries no readable message.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Erro desconhecido";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Erro ao carregar candidatos")]
    CandidatesFetch { status_code: reqwest::StatusCode },

    #[error("Erro ao carregar votantes")]
    VotersFetch { status_code: reqwest::StatusCode },

    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// The text to show the user in place of the dashboard.
    pub fn user_message(&self) -> String {
        user_message(self)
    }
}

/// Renders any error as user-facing text, falling back to
/// [`UNKNOWN_FAILURE_MESSAGE`] when the error renders as blank.
pub fn user_message(error: &impl std::fmt::Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        UNKNOWN_FAILURE_MESSAGE.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    #[test]
    fn test_fetch_errors_render_fixed_messages() {
        let error = Error::CandidatesFetch {
            status_code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(error.user_message(), "Erro ao carregar candidatos");

        let error = Error::VotersFetch {
            status_code: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(error.user_message(), "Erro ao carregar votantes");
    }

    #[test]
    fn test_blank_error_falls_back_to_unknown_failure() {
        assert_eq!(user_message(&Silent), UNKNOWN_FAILURE_MESSAGE);
        assert_eq!(user_message(&"  "), UNKNOWN_FAILURE_MESSAGE);
        assert_eq!(user_message(&"connection refused"), "connection refused");
    }

    #[test]
    fn test_url_error_keeps_its_message() {
        let error = Error::from(url::Url::parse("not a url").unwrap_err());
        assert!(error.user_message().starts_with("url error: "));
    }
}
