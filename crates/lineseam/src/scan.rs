//! Terminator location.
//!
//! The CR/LF tie-break lives in one pure function so it can be tested in
//! isolation from the buffering logic.

/// Position of the next line terminator in a scanned slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Terminator {
    /// Byte length of the line content preceding the terminator.
    pub content_len: usize,
    /// Bytes consumed from the slice start, terminator included.
    pub consumed_len: usize,
}

/// Finds the first line terminator in `s`, the unconsumed tail of the working
/// buffer.
///
/// Rules, in precedence order:
///
/// 1. With `allow_cr`, a `\r` terminates a line on its own if it is not the
///    last byte of `s` (a final `\r` cannot be classified yet, because the
///    next chunk may start with `\n`) and it is not the `\r` of a `\r\n` pair.
/// 2. A `\n` terminates a line; an immediately preceding `\r` is stripped with
///    it as a unit.
/// 3. Otherwise there is no terminator in `s` and the caller keeps the tail
///    buffered.
///
/// Both terminators are ASCII, so every returned index is a valid `&str`
/// boundary on arbitrary UTF-8 input.
pub(crate) fn find_terminator(s: &str, allow_cr: bool) -> Option<Terminator> {
    let lf = s.find('\n');

    if allow_cr
        && let Some(cr) = s.find('\r')
        && cr + 1 != s.len()
        && lf.is_none_or(|lf| lf > cr + 1)
    {
        return Some(Terminator {
            content_len: cr,
            consumed_len: cr + 1,
        });
    }

    let lf = lf?;
    let content_len = if lf > 0 && s.as_bytes()[lf - 1] == b'\r' {
        lf - 1
    } else {
        lf
    };
    Some(Terminator {
        content_len,
        consumed_len: lf + 1,
    })
}
