use crate::error::TallyError;
use std::io::Read;

const READ_BLOCK: usize = 64 * 1024;

/// Splits a byte stream into line-aligned chunks of `lines_per_chunk`
/// complete lines. Each chunk excludes its trailing newline byte; the
/// final chunk may hold fewer lines plus any trailing bytes that lack a
/// terminating newline. A line is never split across two chunks.
pub struct Chunker<R: Read> {
    reader: R,
    buf: Vec<u8>,
    lines_per_chunk: usize,
    line_buffer_size: usize,
    // Scan state resumes across refills so buffered bytes are visited once.
    scan_pos: usize,
    newlines: usize,
    last_newline: Option<usize>,
    eof: bool,
    done: bool,
}

impl<R: Read> Chunker<R> {
    pub fn new(reader: R, lines_per_chunk: usize, line_buffer_size: usize) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(READ_BLOCK),
            lines_per_chunk,
            line_buffer_size,
            scan_pos: 0,
            newlines: 0,
            last_newline: None,
            eof: false,
            done: false,
        }
    }

    fn oversized_line(&self) -> TallyError {
        TallyError::Chunk(format!(
            "single line exceeds the {} byte line buffer",
            self.line_buffer_size
        ))
    }

    fn refill(&mut self) -> std::io::Result<usize> {
        let mut block = [0u8; READ_BLOCK];
        let n = self.reader.read(&mut block)?;
        self.buf.extend_from_slice(&block[..n]);
        Ok(n)
    }
}

impl<R: Read> Iterator for Chunker<R> {
    type Item = Result<Vec<u8>, TallyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            while self.scan_pos < self.buf.len() {
                if self.buf[self.scan_pos] == b'\n' {
                    let line_start = self.last_newline.map_or(0, |i| i + 1);
                    if self.scan_pos - line_start > self.line_buffer_size {
                        self.done = true;
                        return Some(Err(self.oversized_line()));
                    }
                    self.newlines += 1;
                    self.last_newline = Some(self.scan_pos);
                    if self.newlines == self.lines_per_chunk {
                        let end = self.scan_pos;
                        let chunk = self.buf[..end].to_vec();
                        self.buf.drain(..=end);
                        self.scan_pos = 0;
                        self.newlines = 0;
                        self.last_newline = None;
                        return Some(Ok(chunk));
                    }
                }
                self.scan_pos += 1;
            }

            // Buffer exhausted without completing a chunk; the partial
            // trailing line is bounded too.
            let line_start = self.last_newline.map_or(0, |i| i + 1);
            if self.buf.len() - line_start > self.line_buffer_size {
                self.done = true;
                return Some(Err(self.oversized_line()));
            }

            if self.eof {
                self.done = true;
                if self.buf.is_empty() {
                    return None;
                }
                let mut chunk = std::mem::take(&mut self.buf);
                if chunk.last() == Some(&b'\n') {
                    chunk.pop();
                }
                if chunk.is_empty() {
                    return None;
                }
                return Some(Ok(chunk));
            }

            match self.refill() {
                Ok(0) => self.eof = true,
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(TallyError::Io(e)));
                }
            }
        }
    }
}
