use super::*;

#[test]
fn line_class_carries_severity_modifier() {
    assert_eq!(line_class(Severity::Info), "terminal-line info");
    assert_eq!(line_class(Severity::Success), "terminal-line success");
    assert_eq!(line_class(Severity::Error), "terminal-line error");
}
