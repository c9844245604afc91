//! Case-preserving, punctuation-tolerant word replacement
//!
//! This crate holds the pure algorithms behind swichr: re-casing a substitute
//! word to mirror the occurrence it replaces, and reassembling lines from a
//! chunked byte stream. It performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use swichr_core::{replace, LineAssembler, Replacer};
//!
//! assert_eq!(replace("The CAT sat.", "cat", "dog"), "The DOG sat.");
//!
//! let replacer = Replacer::new("cat", "feline");
//! let mut out = Vec::new();
//! LineAssembler::process([&b"Cat,\nCa"[..], &b"T"[..]], |line| {
//!     let line = String::from_utf8_lossy(line);
//!     out.push(replacer.replace_line(&line).text);
//! });
//! assert_eq!(out, vec!["Feline,", "FeLine"]);
//! ```

#![warn(missing_docs)]

pub mod casing;
pub mod line_assembler;
pub mod punctuation;
pub mod replacer;

pub use casing::{Casing, CasingTemplate};
pub use line_assembler::LineAssembler;
pub use punctuation::{PunctuationSet, DEFAULT_PUNCTUATION};
pub use replacer::{replace, ReplacedLine, Replacer};
