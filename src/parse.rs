//! Parsing utilities.
use nom::{IResult, Parser, bytes::complete::take_until};

pub(crate) mod fields;
pub(crate) mod message;

/// Splits a message remainder at the blank line separating the header
/// block from the body.
///
/// Returns the header block (trailing CRLF included, blank line excluded)
/// and the body bytes. Returns `None` when the blank line is absent.
pub(crate) fn split_header_block(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(body) = input.strip_prefix(b"\r\n") {
        return Some((&input[..0], body));
    }

    let scan: IResult<&[u8], &[u8]> = take_until("\r\n\r\n").parse(input);

    match scan {
        Ok((remain, block)) => Some((&input[..block.len() + 2], &remain[4..])),
        Err(_) => None,
    }
}

/// Returns whether the buffer contains the header terminator.
pub(crate) fn has_header_terminator(input: &[u8]) -> bool {
    let scan: IResult<&[u8], &[u8]> = take_until("\r\n\r\n").parse(input);

    scan.is_ok()
}

/// The bytes of the first line, line ending excluded.
pub(crate) fn first_line(input: &[u8]) -> &[u8] {
    let end = input
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(input.len());

    &input[..end]
}
