//! Minimal, low-level HTTP/1.1 message model
//!
//! This crate is sans-IO; it doesn't use networking sockets. The caller
//! supplies one complete message's bytes (or pushes chunks into a
//! [`recv::Receiver`]) and receives a structured message or a parse error
//! back.
pub mod error;
pub mod fields;
pub mod message;
pub mod method;
mod parse;
pub mod recv;
pub mod status;
