use super::*;
use crate::host::{ElementData, ToggleStore};

#[test]
fn writes_are_recorded_in_order() {
    let doc = HeadlessDocument::new();
    let el = doc.create_element(Vec2::new(3.0, 4.0));
    assert_eq!(doc.computed_offset(&el), Vec2::new(3.0, 4.0));

    doc.write_offset(&el, Vec2::new(5.0, 6.0));
    doc.write_offset(&el, Vec2::new(7.0, 8.0));
    assert_eq!(doc.offset(el), Some(Vec2::new(7.0, 8.0)));
    assert_eq!(doc.writes(el), vec![Vec2::new(5.0, 6.0), Vec2::new(7.0, 8.0)]);
}

#[test]
fn unknown_elements_read_as_origin() {
    let doc = HeadlessDocument::new();
    assert_eq!(doc.computed_offset(&ElementId(9)), Vec2::ZERO);
    assert!(doc.element(ElementId(9)).is_none());
}

#[test]
fn element_data_is_a_toggle_store() {
    let doc = HeadlessDocument::new();
    let el = doc.create_element(Vec2::ZERO);
    let mut slot = ElementData::new(&doc, &el, "toggle");
    assert_eq!(slot.get(), None);
    slot.set("1,2".to_owned());
    assert_eq!(doc.data(&el, "toggle").as_deref(), Some("1,2"));
    slot.clear();
    assert_eq!(doc.data(&el, "toggle"), None);
}

#[test]
fn std_deviation_requires_a_filter() {
    let doc = HeadlessDocument::new();
    let scope = ScopeId::document();
    let def = BlurFilterDef::default();
    assert!(!doc.set_std_deviation(&scope, &def.filter_id, BlurRadius::new(1, 1)));

    doc.append_filter(&scope, &def);
    assert!(doc.contains_id(&scope, &def.container_id));
    assert!(doc.set_std_deviation(&scope, &def.filter_id, BlurRadius::new(2, 0)));
    assert_eq!(doc.std_deviation(&scope), Some(BlurRadius::new(2, 0)));
    assert_eq!(doc.blur_history(&scope), vec![BlurRadius::new(2, 0)]);

    doc.remove_filters(&scope);
    assert!(!doc.contains_id(&scope, &def.container_id));
    assert!(!doc.set_std_deviation(&scope, &def.filter_id, BlurRadius::ZERO));
}

#[test]
fn scopes_are_independent() {
    let doc = HeadlessDocument::new();
    doc.append_filter(&ScopeId::new("panel"), &BlurFilterDef::default());
    assert_eq!(doc.filter_count(&ScopeId::new("panel")), 1);
    assert_eq!(doc.filter_count(&ScopeId::document()), 0);
}

#[test]
fn stepped_frames_advance_by_interval() {
    let frames = SteppedFrames::new(100.0, 16.0);
    let a = pollster::block_on(frames.next_frame());
    let b = pollster::block_on(frames.next_frame());
    assert_eq!((a, b), (100.0, 116.0));
    assert_eq!(frames.delivered(), 2);
}
