//! Error type shared by the smoke runner.

use thiserror::Error;

/// Failures that abort a smoke run before every check could execute.
#[derive(Debug, Error)]
pub(crate) enum SmokeError {
    /// Arguments were parsed but are not usable.
    #[error("{0}")]
    Validation(String),
    /// Browser launch, page setup or navigation failed.
    #[error("{0:#}")]
    Failure(anyhow::Error),
}

pub(crate) type SmokeResult<T> = Result<T, SmokeError>;

impl SmokeError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn exit_codes_separate_usage_from_runtime_errors() {
        assert_eq!(SmokeError::validation("bad url").exit_code(), 2);
        let failure = SmokeError::failure(anyhow!("inner").context("launch failed"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(failure.to_string(), "launch failed: inner");
    }
}
