use lineseam::{LineSplitter, SplitOptions};

fn splitter(allow_cr: bool, return_empty_lines: bool) -> LineSplitter {
    LineSplitter::with_options(SplitOptions {
        allow_cr,
        return_empty_lines,
    })
}

#[test]
fn test_terminator_stripping() {
    assert_eq!(LineSplitter::new().split("a\nb\r\nc"), ["a", "b", "c"]);
}

#[test]
fn test_bare_cr_preserved_as_content_by_default() {
    assert_eq!(LineSplitter::new().split("a\rb\n"), ["a\rb"]);
}

#[test]
fn test_bare_cr_terminates_with_allow_cr() {
    assert_eq!(splitter(true, false).split("a\rb\n"), ["a", "b"]);
}

#[test]
fn test_empty_lines_suppressed_by_default() {
    assert_eq!(LineSplitter::new().split("a\n\nb"), ["a", "b"]);
}

#[test]
fn test_empty_lines_emitted_when_requested() {
    assert_eq!(splitter(false, true).split("a\n\nb"), ["a", "", "b"]);
}

#[test]
fn test_trailing_unterminated_content_flushed() {
    let mut s = LineSplitter::new();
    assert!(s.push("abc").is_empty());
    assert_eq!(s.finish(), ["abc"]);
}

#[test]
fn test_mapper_runs_before_empty_line_filter() {
    let lines = LineSplitter::new()
        .with_mapper(|line| line.trim().to_string())
        .split("  \n");
    assert!(lines.is_empty());
}

#[test]
fn test_mapped_empty_lines_emitted_when_requested() {
    let lines = splitter(false, true)
        .with_mapper(|line| line.trim().to_string())
        .split("  \n");
    // One line from the input, one from the synthetic flush terminator.
    assert_eq!(lines, ["", ""]);
}

#[test]
fn test_mapper_transforms_every_line() {
    let lines = LineSplitter::new()
        .with_mapper(|line| line.to_uppercase())
        .split("one\ntwo\r\nthree");
    assert_eq!(lines, ["ONE", "TWO", "THREE"]);
}

#[test]
fn test_mapper_applies_to_flushed_final_line() {
    let mut s = LineSplitter::new().with_mapper(|line| format!("<{line}>"));
    assert_eq!(s.push("a\nb"), ["<a>"]);
    assert_eq!(s.finish(), ["<b>"]);
}

#[test]
fn test_crlf_only_stream() {
    assert!(LineSplitter::new().split("\r\n\r\n").is_empty());
    assert_eq!(splitter(false, true).split("\r\n\r\n"), ["", "", ""]);
}

#[test]
fn test_cr_cr_lf_sequence() {
    // The first \r is bare, the second pairs with the \n.
    assert_eq!(splitter(true, true).split("x\r\r\ny"), ["x", "", "y"]);
    // Without allow_cr the first \r stays in the content.
    assert_eq!(splitter(false, true).split("x\r\r\ny"), ["x\r", "y"]);
}

#[test]
fn test_order_preserved() {
    let input = "3\n1\n2\n1\n";
    assert_eq!(LineSplitter::new().split(input), ["3", "1", "2", "1"]);
}

#[test]
fn test_final_line_with_real_trailing_terminator() {
    // A properly terminated stream gains nothing from the flush.
    let mut s = LineSplitter::new();
    assert_eq!(s.push("a\nb\n"), ["a", "b"]);
    assert!(s.finish().is_empty());
}

#[test]
fn test_multibyte_content() {
    let lines = LineSplitter::new().split("früh\r\n数学\nπ");
    assert_eq!(lines, ["früh", "数学", "π"]);
}
