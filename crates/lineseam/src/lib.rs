//! # LineSeam
//!
//! Incremental line splitter for arbitrarily chunked text streams.
//!
//! ## Overview
//!
//! Text arriving from a network response, a child-process pipe, or a tailed
//! file comes in chunks whose boundaries carry no meaning: a chunk may end in
//! the middle of a line, or even between the `\r` and the `\n` of a single
//! CRLF pair. [`LineSplitter`] turns such a chunk sequence into a sequence of
//! complete lines:
//!
//! - terminators (`\n`, `\r\n`, and optionally lone `\r`) are stripped,
//! - mixed CR/LF/CRLF conventions are normalized away,
//! - a terminator split across two chunks is recognized as one terminator,
//! - the trailing unterminated line is held back and emitted on `finish`.
//!
//! ## Architecture
//!
//! ```text
//! +--------------+      push(chunk)      +----------------+
//! |   upstream   | --------------------> |  LineSplitter  |
//! |  (chunked)   | <-------------------- |  buffer+config |
//! +--------------+      Vec<String>      +----------------+
//!                                               |
//!                                               | finish()
//!                                               v
//!                                        final line(s)
//! ```
//!
//! The splitter owns a single `String` buffer holding the unterminated tail of
//! the input seen so far; it never holds a complete line. Each `push` appends
//! the chunk, drains every complete line, and returns them in input order.
//! `finish` consumes the splitter and terminates whatever remains.
//!
//! ## Examples
//!
//! ### One-shot splitting
//!
//! ```
//! use lineseam::LineSplitter;
//!
//! let lines = LineSplitter::new().split("a\nb\r\nc");
//! assert_eq!(lines, ["a", "b", "c"]);
//! ```
//!
//! ### Streaming
//!
//! ```
//! use lineseam::LineSplitter;
//!
//! let mut splitter = LineSplitter::new();
//! assert_eq!(splitter.push("foo\nba"), ["foo"]);
//! assert_eq!(splitter.push("r\nqux"), ["bar"]);
//! assert_eq!(splitter.finish(), ["qux"]);
//! ```
//!
//! ### Classic-Mac line endings
//!
//! Lone `\r` is ordinary content unless [`SplitOptions::allow_cr`] is set:
//!
//! ```
//! use lineseam::{LineSplitter, SplitOptions};
//!
//! let options = SplitOptions { allow_cr: true, ..SplitOptions::default() };
//! let lines = LineSplitter::with_options(options).split("legacy\rmac\rfile");
//! assert_eq!(lines, ["legacy", "mac", "file"]);
//! ```
//!
//! ### Adapting an iterator of chunks
//!
//! ```
//! use lineseam::{LineSplitter, SplitLines};
//!
//! let chunks = ["data: a\nda", "ta: b\n"];
//! let lines: Vec<String> = chunks.into_iter().split_lines(LineSplitter::new()).collect();
//! assert_eq!(lines, ["data: a", "data: b"]);
//! ```
//!
//! ## Scope
//!
//! The splitter does not parse or validate line content, and it does not
//! decode bytes: input is already-decoded `&str` text. Feeding it from a byte
//! source means decoding first, upstream. It is fully synchronous and
//! single-threaded; one splitter serves one stream.

/// Splitter configuration.
pub mod options;
/// Iterator adapter over chunk sources.
pub mod iter;
/// The splitter state machine.
pub mod splitter;

mod scan;


pub use iter::{Lines, SplitLines};
pub use options::SplitOptions;
pub use splitter::LineSplitter;
