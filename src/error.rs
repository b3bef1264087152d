use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagCloudError {
    /// The input stream could not be opened or read.
    #[error("input unavailable ({context}): {source}")]
    InputUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A caller passed a value outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the rendered cloud failed.
    #[error("output unavailable ({context}): {source}")]
    OutputUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl TagCloudError {
    pub fn input(context: impl Into<String>, source: io::Error) -> Self {
        TagCloudError::InputUnavailable {
            context: context.into(),
            source,
        }
    }

    pub fn output(context: impl Into<String>, source: io::Error) -> Self {
        TagCloudError::OutputUnavailable {
            context: context.into(),
            source,
        }
    }
}
