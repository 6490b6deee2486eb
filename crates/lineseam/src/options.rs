use serde::{Deserialize, Serialize};

/// Configuration for a [`LineSplitter`](crate::LineSplitter).
///
/// Fixed at construction; both flags default to `false`. The third
/// configuration knob, the per-line mapper, is a function value and is
/// attached with [`LineSplitter::with_mapper`](crate::LineSplitter::with_mapper)
/// instead of living here, so that `SplitOptions` stays plain data a host can
/// embed in its own config file:
///
/// ```
/// use lineseam::SplitOptions;
///
/// let options: SplitOptions = serde_json::from_str(r#"{ "allow_cr": true }"#)?;
/// assert!(options.allow_cr);
/// assert!(!options.return_empty_lines);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Treat a lone `\r` (not followed by `\n`) as a line terminator.
    ///
    /// When `false`, only `\n` and `\r\n` terminate lines and a bare `\r`
    /// stays in the line content.
    pub allow_cr: bool,

    /// Emit zero-length lines.
    ///
    /// When `false`, lines that are empty after terminator stripping (and
    /// after the mapper ran) are suppressed.
    pub return_empty_lines: bool,
}
