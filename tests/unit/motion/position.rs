use super::*;

fn relative(x: f64, y: f64) -> PositionIntent {
    PositionIntent {
        relative: Vec2::new(x, y),
        ..PositionIntent::default()
    }
}

fn no_marker() -> Option<String> {
    None
}

#[test]
fn relative_is_used_as_given() {
    let mut store: Option<String> = None;
    let d = resolve_displacement(Vec2::new(5.0, 5.0), &relative(30.0, -10.0), &mut store);
    assert_eq!(d, Vec2::new(30.0, -10.0));
    assert_eq!(store, None);
}

#[test]
fn absolute_converts_against_origin() {
    let intent = PositionIntent {
        absolute: Some(Vec2::new(110.0, 70.0)),
        ..PositionIntent::default()
    };
    let d = resolve_displacement(Vec2::new(10.0, 20.0), &intent, &mut no_marker());
    assert_eq!(d, Vec2::new(100.0, 50.0));
}

#[test]
fn relative_wins_over_absolute_when_non_zero() {
    let intent = PositionIntent {
        relative: Vec2::new(0.0, 4.0),
        absolute: Some(Vec2::new(110.0, 70.0)),
        toggle: false,
    };
    let d = resolve_displacement(Vec2::new(10.0, 20.0), &intent, &mut no_marker());
    assert_eq!(d, Vec2::new(0.0, 4.0));
}

#[test]
fn absolute_zero_target_is_honored() {
    let intent = PositionIntent {
        absolute: Some(Vec2::ZERO),
        ..PositionIntent::default()
    };
    let d = resolve_displacement(Vec2::new(10.0, 20.0), &intent, &mut no_marker());
    assert_eq!(d, Vec2::new(-10.0, -20.0));
}

#[test]
fn toggle_twice_is_identity() {
    let mut store: Option<String> = None;
    let intent = PositionIntent {
        toggle: true,
        ..relative(100.0, 50.0)
    };

    let first = resolve_displacement(Vec2::ZERO, &intent, &mut store);
    assert_eq!(first, Vec2::new(100.0, 50.0));
    assert_eq!(store.as_deref(), Some("100,50"));

    let second = resolve_displacement(first, &intent, &mut store);
    assert_eq!(second, Vec2::new(-100.0, -50.0));
    assert_eq!(store, None);
    assert_eq!(first + second, Vec2::ZERO);
}

#[test]
fn toggle_without_request_leaves_marker_alone() {
    let mut store = Some("9,9".to_owned());
    let d = resolve_displacement(Vec2::ZERO, &relative(1.0, 2.0), &mut store);
    assert_eq!(d, Vec2::new(1.0, 2.0));
    assert_eq!(store.as_deref(), Some("9,9"));
}

#[test]
fn empty_marker_is_treated_as_absent() {
    let mut store = Some(String::new());
    let intent = PositionIntent {
        toggle: true,
        ..relative(40.0, 0.0)
    };
    let d = resolve_displacement(Vec2::ZERO, &intent, &mut store);
    assert_eq!(d, Vec2::new(40.0, 0.0));
    assert_eq!(store.as_deref(), Some("40,0"));
}

#[test]
fn malformed_marker_components_read_as_zero() {
    assert_eq!(parse_toggle_marker("abc,12"), Vec2::new(0.0, 12.0));
    assert_eq!(parse_toggle_marker("7"), Vec2::new(7.0, 0.0));
    assert_eq!(parse_toggle_marker(""), Vec2::ZERO);
    assert_eq!(parse_toggle_marker("NaN,inf"), Vec2::ZERO);
    assert_eq!(parse_toggle_marker(" 2.5 , -3 "), Vec2::new(2.5, -3.0));

    let mut store = Some("oops,4".to_owned());
    let intent = PositionIntent {
        toggle: true,
        ..PositionIntent::default()
    };
    let d = resolve_displacement(Vec2::ZERO, &intent, &mut store);
    assert_eq!(d, Vec2::new(0.0, -4.0));
    assert!(d.x.is_sign_positive());
}

#[test]
fn marker_format_matches_parse() {
    let v = Vec2::new(12.5, -3.0);
    assert_eq!(format_toggle_marker(v), "12.5,-3");
    assert_eq!(parse_toggle_marker(&format_toggle_marker(v)), v);
}
