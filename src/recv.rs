//! Push-style message receiving
//!
//! Useful when the transport delivers bytes in chunks and the caller
//! wants to be told when enough has arrived to parse a message.
use crate::{error::ParseError, message::Request};

const MAX_HEADER_LENGTH: usize = 32768;

/// Event returned by [`Receiver::get_event`].
#[derive(Debug)]
pub enum ReceiverEvent {
    /// More input is needed before a message can be produced.
    WantData,
    /// A complete request was parsed from the buffered bytes.
    Request(Request),
}

/// Decodes a request from incrementally received bytes.
///
/// Bytes are buffered until the blank-line terminator arrives. The body
/// of the produced request is whatever has been received past the
/// terminator at that point; callers that expect a body must push all of
/// it before asking for the event.
#[derive(Debug)]
pub struct Receiver {
    buf: Vec<u8>,
    max_header_len: usize,
}

impl Receiver {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            max_header_len: MAX_HEADER_LENGTH,
        }
    }

    /// Replaces the byte limit enforced while waiting for the header
    /// terminator.
    pub fn with_max_header_len(mut self, value: usize) -> Self {
        self.max_header_len = value;
        self
    }

    /// Appends received bytes to the internal buffer.
    pub fn recv_data(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Parses the buffered bytes once the header terminator has arrived.
    ///
    /// On success the buffer is drained; the receiver can then be fed
    /// the next message.
    pub fn get_event(&mut self) -> Result<ReceiverEvent, ParseError> {
        if !crate::parse::has_header_terminator(&self.buf) {
            self.check_max_header_length()?;
            tracing::trace!(buf_len = self.buf.len(), "want data");

            return Ok(ReceiverEvent::WantData);
        }

        let request = Request::parse(&self.buf)?;
        self.buf.clear();

        Ok(ReceiverEvent::Request(request))
    }

    fn check_max_header_length(&self) -> Result<(), ParseError> {
        if self.buf.len() > self.max_header_len {
            Err(ParseError::HeaderTooBig {
                len: self.buf.len(),
                limit: self.max_header_len,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Self::new()
    }
}
