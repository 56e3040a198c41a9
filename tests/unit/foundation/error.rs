use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        MotionError::unknown_easing("easeSideways")
            .to_string()
            .contains("unknown easing 'easeSideways'")
    );
    assert!(
        MotionError::filter_missing(&ScopeId::document(), "svg-motion-blur")
            .to_string()
            .contains("environment error:")
    );
    assert!(
        MotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_environment_errors_are_fatal() {
    assert!(MotionError::filter_missing(&ScopeId::document(), "f").is_fatal());
    assert!(!MotionError::unknown_easing("nope").is_fatal());
    assert!(!MotionError::config("x").is_fatal());
}

#[test]
fn json_errors_map_to_serde() {
    let err: MotionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, MotionError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
