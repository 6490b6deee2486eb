use crate::options::SplitOptions;
use crate::scan::find_terminator;

/// Per-line transformation applied before the empty-line filter.
type Mapper = Box<dyn Fn(String) -> String>;

/// A stateful splitter turning chunked text into complete lines.
///
/// `LineSplitter` buffers the trailing partial line across chunk boundaries.
/// It processes input incrementally via [`push`](Self::push) or as a whole via
/// [`split`](Self::split); either way, the same lines come out for the same
/// input, no matter how that input was chunked; a chunk boundary may fall
/// anywhere, including between the `\r` and `\n` of one CRLF pair.
///
/// One splitter serves one stream: construct, feed chunks in arrival order,
/// then [`finish`](Self::finish). `finish` takes the splitter by value, so a
/// second flush or a push-after-flush does not compile.
pub struct LineSplitter {
    buffer: String,
    options: SplitOptions,
    mapper: Option<Mapper>,
}

impl Default for LineSplitter {
    /// Creates a splitter with default options and no mapper.
    fn default() -> Self {
        Self::new()
    }
}

impl LineSplitter {
    /// Creates a splitter with default [`SplitOptions`].
    pub fn new() -> Self {
        Self::with_options(SplitOptions::default())
    }

    /// Creates a splitter with the given options.
    pub fn with_options(options: SplitOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
            mapper: None,
        }
    }

    /// Attaches a per-line mapper, replacing the identity default.
    ///
    /// The mapper runs on every extracted line *before* the empty-line check,
    /// so a mapper that returns `""` for a non-empty line causes that line to
    /// be dropped unless [`SplitOptions::return_empty_lines`] is set. A
    /// panicking mapper unwinds through `push`/`finish` and leaves the
    /// splitter unusable; treat that as fatal to the stream.
    ///
    /// ```
    /// use lineseam::LineSplitter;
    ///
    /// let lines = LineSplitter::new()
    ///     .with_mapper(|line| line.trim_end().to_string())
    ///     .split("a  \nb\t\n");
    /// assert_eq!(lines, ["a", "b"]);
    /// ```
    pub fn with_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(String) -> String + 'static,
    {
        self.mapper = Some(Box::new(mapper));
        self
    }

    /// The options this splitter was built with.
    pub fn options(&self) -> SplitOptions {
        self.options
    }

    /// The buffered partial line: content seen but not yet terminated.
    ///
    /// This is what gets discarded if the stream is cancelled without a
    /// [`finish`](Self::finish) call. Invariant: never contains a complete,
    /// terminated line.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feeds one chunk and returns every line completed by it, in input order.
    ///
    /// # Arguments
    ///
    /// * `chunk` - The next piece of the stream. Boundaries are arbitrary; an
    ///   empty chunk is a no-op.
    ///
    /// A `\r` at the very end of the available data is never classified here,
    /// even with `allow_cr`: it stays buffered in case the next chunk starts
    /// with `\n` and completes a CRLF pair.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.buffer.push_str(chunk);
        let lines = self.drain_lines();
        log::trace!(
            "chunk of {} byte(s): {} line(s) out, {} byte(s) pending",
            chunk.len(),
            lines.len(),
            self.buffer.len()
        );
        lines
    }

    /// Consumes the splitter, terminating whatever remains in the buffer.
    ///
    /// Runs the identical extraction algorithm over a synthetic trailing
    /// `"\r\n"`, which resolves a held-back lone `\r` and emits any trailing
    /// unterminated content as a final line. With
    /// [`SplitOptions::return_empty_lines`] set this also emits one empty
    /// line when the buffer is empty: the synthetic terminator closes an
    /// empty final line, exactly as a real trailing `"\r\n"` would.
    pub fn finish(mut self) -> Vec<String> {
        if !self.buffer.is_empty() {
            log::debug!(
                "flushing {} byte(s) of unterminated content",
                self.buffer.len()
            );
        }
        self.buffer.push_str("\r\n");
        self.drain_lines()
    }

    /// One-shot convenience: pushes `input` as a single chunk, then finishes.
    ///
    /// ```
    /// use lineseam::LineSplitter;
    ///
    /// assert_eq!(LineSplitter::new().split("a\r\nb"), ["a", "b"]);
    /// ```
    pub fn split(mut self, input: &str) -> Vec<String> {
        let mut lines = self.push(input);
        lines.extend(self.finish());
        lines
    }

    /// Extracts every complete line from the buffer and drains the consumed
    /// prefix, leaving only the unterminated tail.
    fn drain_lines(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut consumed = 0;

        while let Some(t) = find_terminator(&self.buffer[consumed..], self.options.allow_cr) {
            let raw = self.buffer[consumed..consumed + t.content_len].to_string();
            let line = match &self.mapper {
                Some(map) => map(raw),
                None => raw,
            };
            if self.options.return_empty_lines || !line.is_empty() {
                lines.push(line);
            }
            consumed += t.consumed_len;
        }

        self.buffer.drain(..consumed);
        lines
    }
}
