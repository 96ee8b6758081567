use super::*;

#[test]
fn severity_deserializes_from_lowercase() {
    let sev: Severity = serde_json::from_str("\"warning\"").unwrap();
    assert_eq!(sev, Severity::Warning);

    let sev: Severity = serde_json::from_str("\"disabled\"").unwrap();
    assert_eq!(sev, Severity::Disabled);
}

#[test]
fn severity_rejects_unknown_with_alternatives() {
    let err = serde_json::from_str::<Severity>("\"fatal\"").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("error"));
    assert!(msg.contains("warning"));
    assert!(msg.contains("disabled"));
}

#[test]
fn severity_is_enabled() {
    assert!(Severity::Error.is_enabled());
    assert!(Severity::Warning.is_enabled());
    assert!(!Severity::Disabled.is_enabled());
}

#[test]
fn default_severity_is_error() {
    assert_eq!(Severity::default(), Severity::Error);
}
