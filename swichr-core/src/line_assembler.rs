//! Line reassembly from arbitrarily sized chunks
//!
//! Input arrives in pieces whose boundaries have no relation to line
//! boundaries. The assembler keeps the unterminated tail of the stream and
//! emits each line as soon as its newline has been seen. Splitting happens on
//! raw bytes, so a multi-byte UTF-8 sequence cut by a chunk boundary is
//! rejoined before it is ever decoded.

/// Reassembles newline-delimited lines from a chunked byte stream
#[derive(Debug, Default)]
pub struct LineAssembler {
    /// Unterminated tail of the stream; never contains `b'\n'`
    remainder: Vec<u8>,
    lines_emitted: usize,
}

impl LineAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, calling `on_line` for every line it completes.
    ///
    /// Lines are passed without their trailing newline.
    pub fn push<F>(&mut self, chunk: &[u8], mut on_line: F)
    where
        F: FnMut(&[u8]),
    {
        if chunk.is_empty() {
            return;
        }

        // The old remainder holds no newline, so only new bytes are scanned
        let mut scan_from = self.remainder.len();
        self.remainder.extend_from_slice(chunk);

        let mut last = 0;
        while let Some(offset) = self.remainder[scan_from..]
            .iter()
            .position(|&b| b == b'\n')
        {
            let index = scan_from + offset;
            on_line(&self.remainder[last..index]);
            self.lines_emitted += 1;
            last = index + 1;
            scan_from = last;
        }

        self.remainder.drain(..last);
    }

    /// Signal end of stream, emitting the unterminated tail if there is one
    pub fn finish<F>(&mut self, mut on_line: F)
    where
        F: FnMut(&[u8]),
    {
        if !self.remainder.is_empty() {
            on_line(&self.remainder);
            self.lines_emitted += 1;
            self.remainder.clear();
        }
    }

    /// Drive a whole chunk sequence through a fresh assembler
    pub fn process<I, C, F>(chunks: I, mut on_line: F) -> usize
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
        F: FnMut(&[u8]),
    {
        let mut assembler = Self::new();
        for chunk in chunks {
            assembler.push(chunk.as_ref(), &mut on_line);
        }
        assembler.finish(&mut on_line);
        assembler.lines_emitted()
    }

    /// Number of lines emitted so far
    pub fn lines_emitted(&self) -> usize {
        self.lines_emitted
    }

    /// Bytes buffered awaiting a newline
    pub fn pending_len(&self) -> usize {
        self.remainder.len()
    }

    /// Drop buffered bytes without emitting them
    pub fn discard(&mut self) -> usize {
        let dropped = self.remainder.len();
        self.remainder.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<String> {
        let mut lines = Vec::new();
        LineAssembler::process(chunks, |line| {
            lines.push(String::from_utf8(line.to_vec()).unwrap())
        });
        lines
    }

    #[test]
    fn test_single_chunk() {
        assert_eq!(collect([&b"ab\ncd"[..]]), vec!["ab", "cd"]);
    }

    #[test]
    fn test_every_split_point() {
        let input = b"ab\ncd";
        for split in 0..=input.len() {
            let (a, b) = input.split_at(split);
            assert_eq!(collect([a, b]), vec!["ab", "cd"], "split at {split}");
        }
    }

    #[test]
    fn test_byte_at_a_time() {
        let input = b"one\ntwo\n\nfour";
        let lines = collect(input.chunks(1));
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(collect([&b"ab\n"[..]]), vec!["ab"]);
        assert_eq!(collect([&b"\n\n"[..]]), vec!["", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect([]).is_empty());
        assert!(collect([&b""[..], &b""[..]]).is_empty());
    }

    #[test]
    fn test_multiple_lines_per_chunk() {
        assert_eq!(
            collect([&b"a\nb\nc"[..], &b"d\ne\n"[..]]),
            vec!["a", "b", "cd", "e"]
        );
    }

    #[test]
    fn test_multibyte_split_across_chunks() {
        let input = "café\nnaïve".as_bytes();
        // Split inside the two-byte 'é'
        let (a, b) = input.split_at(4);
        assert_eq!(collect([a, b]), vec!["café", "naïve"]);
    }

    #[test]
    fn test_incremental_state() {
        let mut assembler = LineAssembler::new();
        let mut lines = Vec::new();

        assembler.push(b"par", |l| lines.push(l.to_vec()));
        assert!(lines.is_empty());
        assert_eq!(assembler.pending_len(), 3);

        assembler.push(b"tial\nrest", |l| lines.push(l.to_vec()));
        assert_eq!(lines, vec![b"partial".to_vec()]);
        assert_eq!(assembler.pending_len(), 4);
        assert_eq!(assembler.lines_emitted(), 1);

        assembler.finish(|l| lines.push(l.to_vec()));
        assert_eq!(lines.len(), 2);
        assert_eq!(assembler.pending_len(), 0);
        assert_eq!(assembler.lines_emitted(), 2);
    }

    #[test]
    fn test_discard_drops_tail() {
        let mut assembler = LineAssembler::new();
        assembler.push(b"done\nhalf", |_| {});
        assert_eq!(assembler.discard(), 4);

        let mut emitted = 0;
        assembler.finish(|_| emitted += 1);
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_independent_assemblers() {
        let mut a = LineAssembler::new();
        let mut b = LineAssembler::new();
        let mut out_a = Vec::new();
        let mut out_b = Vec::new();

        a.push(b"x", |l| out_a.push(l.to_vec()));
        b.push(b"y\n", |l| out_b.push(l.to_vec()));
        a.finish(|l| out_a.push(l.to_vec()));

        assert_eq!(out_a, vec![b"x".to_vec()]);
        assert_eq!(out_b, vec![b"y".to_vec()]);
    }
}
