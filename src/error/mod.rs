mod metadata;

pub use metadata::{LanderErrorCode, LanderErrorMetadata, LanderErrorSuggestion};

pub type LanderResult<T> = std::result::Result<T, LanderError>;

use std::borrow::BorrowMut;
use std::fmt::{self, Display};

use lander_std::Style;

/// A specialized `Error` type for Lander that wraps `anyhow`
/// and carries some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct LanderError {
    error: anyhow::Error,
    metadata: LanderErrorMetadata,
}

impl LanderError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = LanderErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<LanderErrorCode> {
        self.metadata.code
    }

    pub fn suggestion(&self) -> Option<&LanderErrorSuggestion> {
        self.metadata.suggestion.as_ref()
    }
}

impl Display for LanderError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        writeln!(formatter, "{} {:#}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for LanderError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
