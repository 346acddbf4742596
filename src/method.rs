//! HTTP request methods
use std::{fmt::Display, str::FromStr};

use crate::error::ParseError;

/// Closed set of HTTP request methods.
///
/// Every variant maps to exactly one canonical uppercase wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
    Connect,
}

impl Method {
    /// Returns the canonical wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
        }
    }

    /// Parses a wire token.
    ///
    /// Tokens are matched case-sensitively; anything outside the closed
    /// set is an [`ParseError::UnknownMethod`] error.
    pub fn from_bytes(token: &[u8]) -> Result<Self, ParseError> {
        match token {
            b"GET" => Ok(Self::Get),
            b"POST" => Ok(Self::Post),
            b"PUT" => Ok(Self::Put),
            b"DELETE" => Ok(Self::Delete),
            b"PATCH" => Ok(Self::Patch),
            b"HEAD" => Ok(Self::Head),
            b"OPTIONS" => Ok(Self::Options),
            b"TRACE" => Ok(Self::Trace),
            b"CONNECT" => Ok(Self::Connect),
            _ => Err(ParseError::UnknownMethod {
                token: crate::error::snippet(token),
            }),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Method; 9] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
        Method::Trace,
        Method::Connect,
    ];

    #[test]
    fn test_method_token_round_trip() {
        for method in ALL {
            assert_eq!(Method::from_bytes(method.as_str().as_bytes()).unwrap(), method);
        }
    }

    #[test]
    fn test_method_unknown() {
        let result = Method::from_bytes(b"BREW");
        assert!(matches!(
            result,
            Err(ParseError::UnknownMethod { token }) if token == "BREW"
        ));

        assert!(Method::from_bytes(b"get").is_err());
        assert!(Method::from_bytes(b"").is_err());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("OPTIONS".parse::<Method>().unwrap(), Method::Options);
        assert_eq!(Method::Connect.to_string(), "CONNECT");
    }
}
