use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse answer")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize answer")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn parse(source: serde_json::Error) -> Self {
        match source.classify() {
            serde_json::error::Category::Io => Self::Io {
                source: source.into(),
            },
            _ => Self::Parse { source },
        }
    }

    /// Line (1-based) of a parse error, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { source } if source.line() > 0 => Some(source.line()),
            _ => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Parse { source } if source.is_syntax() || source.is_eof())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn message_leaves_details_to_source() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let detail = source.to_string();
        let err = Error::parse(source);

        assert_eq!(err.to_string(), "failed to parse answer");
        assert_eq!(err.source().map(|s| s.to_string()), Some(detail));
    }

    #[test]
    fn io_message_does_not_repeat_source() {
        let err = Error::from(std::io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "I/O operation failed");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }
}
