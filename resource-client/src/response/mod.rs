//! Response parsing.
//!
//! [`HttpResource`](crate::HttpResource) is parameterized by a
//! [`ResponseFormat`] that turns the raw body into the handler's output.

mod format;

pub use format::{BinaryFormat, JsonFormat, PlainTextFormat, ResponseFormat, YamlFormat};
