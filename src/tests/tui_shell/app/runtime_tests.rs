use super::*;

#[test]
fn console_needs_both_ends_on_a_terminal() {
    assert!(require_tty(true, true).is_ok());

    let err = require_tty(false, true).unwrap_err().to_string();
    assert!(err.contains("stdin is not a TTY"), "{}", err);
    assert!(err.contains("appdeck list"));

    let err = require_tty(true, false).unwrap_err().to_string();
    assert!(err.contains("stdout is redirected"), "{}", err);
}
