use redict::line::trim_eol;

#[test]
fn lf_stripped() {
    assert_eq!(trim_eol(b"cat\n"), b"cat");
}

#[test]
fn crlf_stripped() {
    assert_eq!(trim_eol(b"cat\r\n"), b"cat");
}

#[test]
fn repeated_terminators_stripped() {
    assert_eq!(trim_eol(b"cat\n\r\r\n"), b"cat");
}

#[test]
fn no_terminator_untouched() {
    assert_eq!(trim_eol(b"cat"), b"cat");
}

#[test]
fn interior_cr_kept() {
    assert_eq!(trim_eol(b"ca\rt\n"), b"ca\rt");
}

#[test]
fn empty_line() {
    assert_eq!(trim_eol(b""), b"");
}

#[test]
fn all_terminators_strip_to_empty() {
    assert_eq!(trim_eol(b"\r\n\r\n"), b"");
}
