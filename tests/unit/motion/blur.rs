use super::*;
use crate::host::headless::HeadlessDocument;

#[test]
fn first_sample_is_zero() {
    let mut tracker = BlurTracker::new(ScopeId::document(), 1.0);
    assert_eq!(tracker.advance(Vec2::new(40.0, -12.0)), BlurRadius::ZERO);
    assert_eq!(tracker.previous(), Some(Vec2::new(40.0, -12.0)));
}

#[test]
fn radius_tracks_frame_to_frame_change() {
    let mut tracker = BlurTracker::new(ScopeId::document(), 2.0);
    tracker.advance(Vec2::new(0.0, 0.0));
    assert_eq!(tracker.advance(Vec2::new(3.0, -1.2)), BlurRadius::new(6, 2));
    assert_eq!(tracker.advance(Vec2::new(3.0, -1.2)), BlurRadius::ZERO);
    assert_eq!(tracker.advance(Vec2::new(1.0, 0.0)), BlurRadius::new(4, 2));
}

#[test]
fn zero_displacement_is_a_real_first_sample() {
    let mut tracker = BlurTracker::new(ScopeId::document(), 1.0);
    tracker.advance(Vec2::ZERO);
    assert_eq!(tracker.advance(Vec2::new(10.0, 0.0)), BlurRadius::new(10, 0));
}

#[test]
fn attach_is_idempotent_per_scope() {
    let doc = HeadlessDocument::new();
    let scope = ScopeId::document();
    let a = doc.create_element(Vec2::ZERO);
    let b = doc.create_element(Vec2::ZERO);

    assert!(attach_motion_blur(&doc, &scope, &a));
    assert!(!attach_motion_blur(&doc, &scope, &b));
    assert_eq!(doc.filter_count(&scope), 1);
    assert_eq!(doc.filter(a).as_deref(), Some("url(#svg-motion-blur)"));
    assert_eq!(doc.filter(b).as_deref(), Some("url(#svg-motion-blur)"));
}

#[test]
fn apply_writes_radius_to_the_shared_filter() {
    let doc = HeadlessDocument::new();
    let scope = ScopeId::document();
    let el = doc.create_element(Vec2::ZERO);
    attach_motion_blur(&doc, &scope, &el);

    let mut tracker = BlurTracker::new(scope.clone(), 1.0);
    tracker.apply(&doc, Vec2::ZERO).unwrap();
    let r = tracker.apply(&doc, Vec2::new(0.0, 7.4)).unwrap();
    assert_eq!(r, BlurRadius::new(0, 7));
    assert_eq!(doc.std_deviation(&scope), Some(BlurRadius::new(0, 7)));

    tracker.reset(&doc, &el).unwrap();
    assert_eq!(doc.std_deviation(&scope), Some(BlurRadius::ZERO));
    assert_eq!(doc.filter(el), None);
    assert_eq!(doc.filter_count(&scope), 1);
}

#[test]
fn missing_filter_is_fatal() {
    let doc = HeadlessDocument::new();
    let scope = ScopeId::document();
    let el = doc.create_element(Vec2::ZERO);
    attach_motion_blur(&doc, &scope, &el);
    doc.remove_filters(&scope);

    let mut tracker = BlurTracker::new(scope, 1.0);
    let err = tracker.apply(&doc, Vec2::ZERO).unwrap_err();
    assert!(err.is_fatal());

    let err = tracker.reset(&doc, &el).unwrap_err();
    assert!(matches!(err, MotionError::FilterMissing { .. }));
    assert_eq!(doc.filter(el), None);
}

#[test]
fn svg_markup_carries_ids_and_radius() {
    let def = BlurFilterDef::default();
    let svg = def.to_svg();
    assert!(svg.contains(r#"id="motion-blur-svg""#));
    assert!(svg.contains(r#"<filter id="svg-motion-blur">"#));
    assert!(svg.contains(r#"stdDeviation="0 0""#));
    assert_eq!(def.reference(), "url(#svg-motion-blur)");
}
