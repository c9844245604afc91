//! Input sources and chunked reading
//!
//! [`Input`] names where the text comes from; [`ChunkReader`] pulls it in
//! fixed-size reads whose boundaries bear no relation to line boundaries.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// Direct text string
    Text(String),
    /// Raw bytes, decoded line by line
    Bytes(Vec<u8>),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, a progress-wrapped file, etc.)
    Reader {
        /// The stream itself
        reader: Box<dyn Read + Send>,
        /// Total size, when the caller knows it
        size_hint: Option<usize>,
    },
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader { size_hint, .. } => f
                .debug_struct("Reader")
                .field("size_hint", size_hint)
                .finish_non_exhaustive(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader {
            reader: Box::new(reader),
            size_hint: None,
        }
    }

    /// Create input from a reader whose total size is known
    pub fn from_sized_reader<R: Read + Send + 'static>(reader: R, size: usize) -> Self {
        Input::Reader {
            reader: Box::new(reader),
            size_hint: Some(size),
        }
    }

    /// Get the size of the input if it is known without reading it
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => std::fs::metadata(path).ok().map(|m| m.len() as usize),
            Input::Reader { size_hint, .. } => *size_hint,
        }
    }

    /// Open the input as a byte stream
    pub fn open(self) -> Result<Box<dyn Read + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
            Input::File(path) => match File::open(&path) {
                Ok(file) => Ok(Box::new(file)),
                Err(source) => Err(EngineError::Open { path, source }),
            },
            Input::Reader { reader, .. } => Ok(reader),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// Reads a stream in chunks of at most `chunk_size` bytes
pub struct ChunkReader<R> {
    reader: R,
    buffer: Vec<u8>,
    bytes_read: u64,
}

impl<R: Read> ChunkReader<R> {
    /// Create a chunk reader
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0; chunk_size.max(1)],
            bytes_read: 0,
        }
    }

    /// Read the next chunk, or `None` at end of stream
    pub fn next_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    self.bytes_read += n as u64;
                    return Ok(Some(&self.buffer[..n]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Total bytes read so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
