//! Request and response messages
//!
//! Parsing is binary-safe: bodies may contain arbitrary bytes including
//! embedded NUL, and every separator scan is bounded by the input length.
use std::{fmt::Display, io::Write};

use crate::{
    error::{ParseError, Separator},
    fields::HeaderMap,
    method::Method,
    status::Status,
};

/// HTTP protocol version as an explicit major/minor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Parses a `HTTP/<major>.<minor>` token.
    pub fn parse(token: &[u8]) -> Result<Self, ParseError> {
        match crate::parse::message::version(token) {
            Ok((_remain, (major, minor))) => Ok(Self { major, minor }),
            Err(_) => Err(ParseError::MalformedVersion {
                token: crate::error::snippet(token),
            }),
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self { major: 1, minor: 1 }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

/// HTTP request message.
///
/// Owns its header map and body; nothing is shared with the buffer it
/// was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Request {
    /// Creates an empty request with the default `HTTP/1.1` version.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path: String::new(),
            version: Version::default(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Parses one complete request message from wire bytes.
    ///
    /// The body is everything after the blank line; no `Content-Length`
    /// header is consulted. Framing is the caller's concern.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        let total = input.len();

        let (remain, method_token) = crate::parse::message::space_token(input)
            .map_err(|_| ParseError::MissingSeparator(Separator::MethodPath))?;
        let method = Method::from_bytes(method_token)?;

        let (remain, target) = crate::parse::message::space_token(remain)
            .map_err(|_| ParseError::MissingSeparator(Separator::PathVersion))?;

        if target.is_empty() {
            return Err(ParseError::EmptyPath);
        }

        let path = String::from_utf8(target.to_vec())?;

        let (remain, version_token) = crate::parse::message::line_token(remain)
            .map_err(|_| ParseError::MissingSeparator(Separator::LineEnd))?;
        let version = Version::parse(version_token)?;

        let (block, rest) = crate::parse::split_header_block(remain)
            .ok_or(ParseError::MissingSeparator(Separator::HeaderBoundary))?;
        let headers = HeaderMap::parse(block)?;

        let body = body_bytes(input, total - rest.len())?;

        tracing::trace!(%method, %path, body_len = body.len(), "parsed request");

        Ok(Self {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Writes the request in wire form.
    pub fn serialize<W: Write>(&self, mut buf: W) -> std::io::Result<()> {
        buf.write_all(self.method.as_str().as_bytes())?;
        buf.write_all(b" ")?;
        buf.write_all(self.path.as_bytes())?;
        buf.write_all(b" ")?;
        write!(buf, "{}", self.version)?;
        buf.write_all(b"\r\n")?;
        self.headers.serialize(&mut buf)?;
        buf.write_all(b"\r\n")?;
        buf.write_all(&self.body)?;

        Ok(())
    }

    /// The request's wire bytes in a growable buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize(&mut buf).unwrap();
        buf
    }
}

/// HTTP response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub version: Version,
    pub status: Status,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an empty response with the default `HTTP/1.1` version.
    pub fn new(status: Status) -> Self {
        Self {
            version: Version::default(),
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Parses one complete response message from wire bytes.
    ///
    /// The reason phrase may be absent; it is not retained either way,
    /// since serialization always uses the canonical phrase for the
    /// status code.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        let total = input.len();

        let (remain, version_token) = crate::parse::message::space_token(input)
            .map_err(|_| ParseError::MissingSeparator(Separator::VersionStatus))?;
        let version = Version::parse(version_token)?;

        let (remain, status_token) = crate::parse::message::line_token(remain)
            .map_err(|_| ParseError::MissingSeparator(Separator::LineEnd))?;
        let (_remain, (code, _reason)) = crate::parse::message::status_fragment(status_token)
            .map_err(|_| ParseError::MalformedStatus {
                token: crate::error::snippet(status_token),
            })?;
        let status = Status::from_code(code).ok_or(ParseError::UnknownStatus { code })?;

        let (block, rest) = crate::parse::split_header_block(remain)
            .ok_or(ParseError::MissingSeparator(Separator::HeaderBoundary))?;
        let headers = HeaderMap::parse(block)?;

        let body = body_bytes(input, total - rest.len())?;

        tracing::trace!(code, body_len = body.len(), "parsed response");

        Ok(Self {
            version,
            status,
            headers,
            body,
        })
    }

    /// Writes the response in wire form.
    pub fn serialize<W: Write>(&self, mut buf: W) -> std::io::Result<()> {
        write!(buf, "{}", self.version)?;
        buf.write_all(b" ")?;
        write!(buf, "{}", self.status)?;
        buf.write_all(b"\r\n")?;
        self.headers.serialize(&mut buf)?;
        buf.write_all(b"\r\n")?;
        buf.write_all(&self.body)?;

        Ok(())
    }

    /// The response's wire bytes in a growable buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize(&mut buf).unwrap();
        buf
    }
}

// Body length is the total size minus the bytes consumed by the start
// line and header block; it must never be negative.
fn body_bytes(input: &[u8], consumed: usize) -> Result<Vec<u8>, ParseError> {
    let length = input
        .len()
        .checked_sub(consumed)
        .ok_or(ParseError::TruncatedMessage {
            expected: consumed,
            actual: input.len(),
        })?;

    Ok(input[consumed..consumed + length].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let data = b"GET /hello HTTP/1.1\r\nHost: x\r\n\r\nhi";

        let request = Request::parse(data).unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/hello");
        assert_eq!(request.version, Version::new(1, 1));
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers.get("Host"), Some(&"x".into()));
        assert_eq!(request.body, b"hi");

        assert_eq!(request.to_bytes(), data);
    }

    #[test]
    fn test_parse_request_no_headers() {
        let data = b"GET / HTTP/1.1\r\n\r\n";

        let request = Request::parse(data).unwrap();

        assert_eq!(request.path, "/");
        assert!(request.headers.is_empty());
        assert!(request.body.is_empty());

        assert_eq!(request.to_bytes(), data);
    }

    #[test]
    fn test_parse_request_empty_body() {
        let request = Request::parse(b"POST /submit HTTP/1.0\r\nHost: a\r\n\r\n").unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.version, Version::new(1, 0));
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_parse_request_binary_body() {
        let mut data = b"PUT /blob HTTP/1.1\r\nHost: a\r\n\r\n".to_vec();
        data.extend_from_slice(b"\x00\x01\xfe\xff\r\n\r\n\x00");

        let request = Request::parse(&data).unwrap();

        assert_eq!(request.body, b"\x00\x01\xfe\xff\r\n\r\n\x00");
        assert_eq!(request.to_bytes(), data);
    }

    #[test]
    fn test_parse_request_missing_separators() {
        let result = Request::parse(b"GET/hello");
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator(Separator::MethodPath))
        ));

        let result = Request::parse(b"GET /hello");
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator(Separator::PathVersion))
        ));

        let result = Request::parse(b"GET /hello HTTP/1.1");
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator(Separator::LineEnd))
        ));

        let result = Request::parse(b"GET /hello HTTP/1.1\r\nHost: x\r\n");
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator(Separator::HeaderBoundary))
        ));
    }

    #[test]
    fn test_parse_request_bad_tokens() {
        let result = Request::parse(b"BREW /pot HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::UnknownMethod { .. })));

        let result = Request::parse(b"GET  HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::EmptyPath)));

        let result = Request::parse(b"GET /hello HTTP/11\r\n\r\n");
        assert!(matches!(
            result,
            Err(ParseError::MalformedVersion { token }) if token == "HTTP/11"
        ));

        let result = Request::parse(b"GET /hello HTTP/1.1\r\nHost x\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedHeader { .. })));
    }

    #[test]
    fn test_serialize_request_built_by_hand() {
        let mut request = Request::new(Method::Get);
        request.path = "/chat".to_string();
        request.headers.append("Host", "server.example.com");
        request.headers.append("Upgrade", "websocket");
        request.headers.append("Connection", "Upgrade");

        let expected = "GET /chat HTTP/1.1\r\n\
            Host: server.example.com\r\n\
            Upgrade: websocket\r\n\
            Connection: Upgrade\r\n\
            \r\n";

        assert_eq!(request.to_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_parse_response() {
        let data = b"HTTP/1.1 200 OK\r\nServer: example\r\n\r\nbody";

        let response = Response::parse(data).unwrap();

        assert_eq!(response.version, Version::new(1, 1));
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.headers.get("server"), Some(&"example".into()));
        assert_eq!(response.body, b"body");

        assert_eq!(response.to_bytes(), data);
    }

    #[test]
    fn test_parse_response_missing_reason() {
        let response = Response::parse(b"HTTP/1.1 200\r\nServer: a\r\n\r\n").unwrap();
        assert_eq!(response.status, Status::Ok);

        let response = Response::parse(b"HTTP/1.1 200 \r\nServer: a\r\n\r\n").unwrap();
        assert_eq!(response.status, Status::Ok);
    }

    #[test]
    fn test_parse_response_bad_status() {
        let result = Response::parse(b"HTTP/1.1 999 Whatever\r\n\r\n");
        assert!(matches!(
            result,
            Err(ParseError::UnknownStatus { code: 999 })
        ));

        let result = Response::parse(b"HTTP/1.1 2x0 OK\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedStatus { .. })));
    }

    #[test]
    fn test_serialize_response_canonical_reason() {
        let response = Response::parse(b"HTTP/1.1 404 whatever\r\n\r\n").unwrap();

        assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::default().to_string(), "HTTP/1.1");
        assert_eq!(Version::new(2, 0).to_string(), "HTTP/2.0");
    }
}
