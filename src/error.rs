//! Error representations
use std::fmt::Display;

/// Wire separator that the tokenizer scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Separator {
    /// Space between the method and the request target.
    MethodPath,
    /// Space between the request target and the protocol version.
    PathVersion,
    /// Space between the protocol version and the status code.
    VersionStatus,
    /// CRLF terminating the start line.
    LineEnd,
    /// Blank line between the header block and the body.
    HeaderBoundary,
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::MethodPath => "space after method",
            Self::PathVersion => "space after request target",
            Self::VersionStatus => "space after protocol version",
            Self::LineEnd => "line ending after start line",
            Self::HeaderBoundary => "blank line after header block",
        };

        f.write_str(value)
    }
}

/// Error for parsing wire messages.
///
/// All parse failures are reported as values; malformed input never
/// panics or reads past the supplied buffer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("missing separator: {0}")]
    MissingSeparator(Separator),

    #[error("empty request path")]
    EmptyPath,

    #[error("unknown method '{token}'")]
    UnknownMethod { token: String },

    #[error("malformed protocol version '{token}'")]
    MalformedVersion { token: String },

    #[error("malformed header line '{line}'")]
    MalformedHeader { line: String },

    #[error("malformed status line '{token}'")]
    MalformedStatus { token: String },

    #[error("unknown status code {code}")]
    UnknownStatus { code: u16 },

    #[error("truncated message: consumed {expected} of {actual} bytes")]
    TruncatedMessage { expected: usize, actual: usize },

    #[error("header block too big: {len} exceeds limit {limit}")]
    HeaderTooBig { len: usize, limit: usize },

    #[error("invalid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub(crate) fn snippet(input: &[u8]) -> String {
    input[0..input.len().min(16)].escape_ascii().to_string()
}
