#![forbid(unsafe_code)]

//! Errors from the draw pass.

/// Errors raised while drawing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A draw was requested for zero runs, so there is no box to compute.
    EmptyInput,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot draw an empty run sequence"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Result alias for draw operations.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            RenderError::EmptyInput.to_string(),
            "cannot draw an empty run sequence"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RenderError::EmptyInput);
        assert!(err.source().is_none());
    }
}
