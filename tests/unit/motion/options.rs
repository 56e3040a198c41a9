use super::*;
use crate::foundation::error::MotionError;

#[test]
fn empty_options_resolve_to_defaults() {
    let resolved = MotionBlurOptions::new().resolve().unwrap();
    assert_eq!(resolved, ResolvedOptions::default());
    assert_eq!(resolved.duration_ms, 1000.0);
    assert_eq!(resolved.easing, Ease::OutExpo);
    assert!(resolved.use_motion_blur);
    assert_eq!(resolved.blur_multiplier, 1.0);
    assert!(!resolved.block_movement);
    assert!(!resolved.apply_toggle);
    assert_eq!(resolved.doc_root, ScopeId::document());
}

#[test]
fn json_uses_camel_case_names() {
    let opts = MotionBlurOptions::from_json(
        r#"{
            "durationMs": 300,
            "x": 100,
            "y": 50,
            "easing": "easeInOutQuad",
            "useMotionBlur": false,
            "blurMultiplier": 2.5,
            "blockMovement": true,
            "applyToggle": true,
            "docRoot": "sidebar"
        }"#,
    )
    .unwrap();
    let r = opts.resolve().unwrap();
    assert_eq!(r.duration_ms, 300.0);
    assert_eq!(r.relative, Vec2::new(100.0, 50.0));
    assert_eq!(r.easing, Ease::InOutQuad);
    assert!(!r.use_motion_blur);
    assert_eq!(r.blur_multiplier, 2.5);
    assert!(r.block_movement);
    assert!(r.apply_toggle);
    assert_eq!(r.doc_root, ScopeId::new("sidebar"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = MotionBlurOptions::from_json(r#"{ "duration": 300 }"#).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
}

#[test]
fn unknown_easing_fails_resolution() {
    let err = MotionBlurOptions::new()
        .easing_name("easeOutWobble")
        .resolve()
        .unwrap_err();
    assert!(matches!(err, MotionError::UnknownEasing(_)));
}

#[test]
fn negative_blur_multiplier_is_a_configuration_error() {
    let err = MotionBlurOptions::new()
        .blur_multiplier(-0.5)
        .resolve()
        .unwrap_err();
    assert!(matches!(err, MotionError::Config(ref m) if m.contains("blurMultiplier")));
    assert!(!err.is_fatal());

    let err = MotionBlurOptions::from_json(r#"{ "blurMultiplier": -2 }"#)
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, MotionError::Config(_)));

    let zero = MotionBlurOptions::new().blur_multiplier(0.0).resolve().unwrap();
    assert_eq!(zero.blur_multiplier, 0.0);
}

#[test]
fn absolute_needs_both_axes() {
    let mut opts = MotionBlurOptions::new();
    opts.x_absolute = Some(40.0);
    assert_eq!(opts.resolve().unwrap().absolute, None);

    let r = MotionBlurOptions::new().to(40.0, 0.0).resolve().unwrap();
    assert_eq!(r.absolute, Some(Vec2::new(40.0, 0.0)));
}

#[test]
fn builder_sets_every_field() {
    let opts = MotionBlurOptions::new()
        .duration_ms(250.0)
        .by(1.0, 2.0)
        .to(3.0, 4.0)
        .toggle(true)
        .easing(Ease::InBounce)
        .motion_blur(false)
        .blur_multiplier(0.5)
        .block_movement(true)
        .doc_root(ScopeId::new("root"));
    let intent = opts.resolve().unwrap().position_intent();
    assert_eq!(intent.relative, Vec2::new(1.0, 2.0));
    assert_eq!(intent.absolute, Some(Vec2::new(3.0, 4.0)));
    assert!(intent.toggle);

    let json = serde_json::to_string(&opts).unwrap();
    let back = MotionBlurOptions::from_json(&json).unwrap();
    assert_eq!(back, opts);
    assert!(json.contains("\"easing\":\"easeInBounce\""));
}

#[test]
fn omitted_fields_are_not_serialized() {
    let json = serde_json::to_string(&MotionBlurOptions::new().by(5.0, 0.0)).unwrap();
    assert_eq!(json, r#"{"x":5.0,"y":0.0}"#);
}
