#![cfg(feature = "serde")]

use reqver::{Requirement, Version};

#[test]
fn test_version_serializes_as_string() {
    let version = Version::must_parse("1.2.3-rc.1+build.7");
    assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.2.3-rc.1+build.7\"");

    let back: Version = serde_json::from_str("\"1.2.3-rc.1+build.7\"").unwrap();
    assert_eq!(back.to_string(), "1.2.3-rc.1+build.7");
}

#[test]
fn test_requirement_serializes_as_source() {
    let requirement = Requirement::must_parse(">= 1.0.0 and < 2.0.0");
    assert_eq!(
        serde_json::to_string(&requirement).unwrap(),
        "\">= 1.0.0 and < 2.0.0\""
    );

    let back: Requirement = serde_json::from_str("\"~> 2.1\"").unwrap();
    assert_eq!(back.source(), "~> 2.1");
}

#[test]
fn test_invalid_input_is_a_deserialization_error() {
    let err = serde_json::from_str::<Version>("\"1.2\"").unwrap_err();
    assert!(err.to_string().contains("Invalid version string"));
    assert!(serde_json::from_str::<Requirement>("\"== == 1.0.0\"").is_err());
}
