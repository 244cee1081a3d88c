//! End-to-end tests for the body diagram through the public API.
//!
//! Run with: cargo test --test body_test

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use body_highlighter::state::{KeyboardEvent, MouseEvent};
use body_highlighter::{
    ActivationEvent, BodyConfig, BodyPartData, BodyPartSlug, BodyProps, Border, ClickCallback,
    DISABLED_COLOR, Diagram, FocusRing, Gender, Selection, Side, body,
};

// =============================================================================
// HELPERS
// =============================================================================

fn config_with(data: Vec<BodyPartData>, disabled: Vec<BodyPartSlug>) -> BodyConfig {
    BodyConfig {
        data,
        disabled_parts: disabled,
        ..Default::default()
    }
}

fn counting_callback() -> (ClickCallback, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    let callback: ClickCallback = Rc::new(move |_, _| count_clone.set(count_clone.get() + 1));
    (callback, count)
}

fn first_index(diagram: &Diagram, slug: BodyPartSlug) -> usize {
    diagram
        .shapes_for(slug)
        .next()
        .map(|(index, _)| index)
        .expect("slug is drawn")
}

// =============================================================================
// FRAME
// =============================================================================

#[test]
fn renders_male_front_by_default() {
    let tree = BodyConfig::default().render(None).into_tree();
    assert_eq!(tree.label, "male-body-front");
    assert!(!tree.shapes.is_empty());
}

#[test]
fn labels_all_four_views() {
    for (gender, side, label) in [
        (Gender::Male, Side::Front, "male-body-front"),
        (Gender::Male, Side::Back, "male-body-back"),
        (Gender::Female, Side::Front, "female-body-front"),
        (Gender::Female, Side::Back, "female-body-back"),
    ] {
        let config = BodyConfig {
            gender,
            side,
            ..Default::default()
        };
        assert_eq!(config.render(None).tree().label, label);
    }
}

#[test]
fn applies_scale_to_dimensions() {
    for (scale, width, height) in [(0.5, 100.0, 200.0), (1.0, 200.0, 400.0), (2.0, 400.0, 800.0)] {
        let config = BodyConfig {
            scale,
            ..Default::default()
        };
        let tree = config.render(None).into_tree();
        assert_eq!((tree.width, tree.height), (width, height));
    }
}

// =============================================================================
// FILLS
// =============================================================================

#[test]
fn highlights_with_specified_color() {
    let diagram = config_with(vec![BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")], vec![]).render(None);

    for shape in diagram.shapes() {
        if shape.slug == BodyPartSlug::LeftBiceps {
            assert_eq!(shape.fill, "#ff0000");
            assert_eq!(shape.tab_index, 0);
        } else {
            assert_eq!(shape.fill, "#3f3f3f");
        }
    }
}

#[test]
fn highlights_multiple_parts_with_different_colors() {
    let diagram = config_with(
        vec![
            BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000"),
            BodyPartData::new(BodyPartSlug::Abs, "#00ff00"),
            BodyPartData::new(BodyPartSlug::LeftQuadriceps, "#0000ff"),
        ],
        vec![],
    )
    .render(None);

    for (slug, color) in [
        (BodyPartSlug::LeftBiceps, "#ff0000"),
        (BodyPartSlug::Abs, "#00ff00"),
        (BodyPartSlug::LeftQuadriceps, "#0000ff"),
    ] {
        assert!(diagram.shapes_for(slug).all(|(_, shape)| shape.fill == color));
    }
}

#[test]
fn applies_default_fill_to_unhighlighted_parts() {
    let config = BodyConfig {
        default_fill: "#123456".to_string(),
        ..Default::default()
    };
    assert!(config.render(None).shapes().iter().all(|shape| shape.fill == "#123456"));
}

#[test]
fn disabled_beats_highlight() {
    let diagram = config_with(
        vec![BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")],
        vec![BodyPartSlug::LeftBiceps],
    )
    .render(None);

    for (_, shape) in diagram.shapes_for(BodyPartSlug::LeftBiceps) {
        assert_eq!(shape.fill, DISABLED_COLOR);
        assert_eq!(shape.tab_index, -1);
        assert!(shape.aria_disabled);
    }
}

#[test]
fn hidden_parts_not_rendered() {
    let config = BodyConfig {
        data: vec![BodyPartData::new(BodyPartSlug::Head, "#ff0000")],
        disabled_parts: vec![BodyPartSlug::Head],
        hidden_parts: vec![BodyPartSlug::Head],
        ..Default::default()
    };
    let diagram = config.render(None);
    assert_eq!(diagram.shapes_for(BodyPartSlug::Head).count(), 0);
    assert!(diagram.shapes_for(BodyPartSlug::Abs).count() > 0);

    let svg = diagram.to_svg().unwrap();
    assert!(!svg.contains(r#"data-testid="head""#));
    assert!(svg.contains(r#"data-testid="abs""#));
}

// =============================================================================
// ACTIVATION
// =============================================================================

#[test]
fn click_reports_slug_and_event() {
    let calls: Rc<RefCell<Vec<(BodyPartSlug, ActivationEvent)>>> = Rc::new(RefCell::new(Vec::new()));
    let calls_clone = calls.clone();
    let callback: ClickCallback = Rc::new(move |slug, event| {
        calls_clone.borrow_mut().push((slug, event.clone()));
    });

    let diagram = BodyConfig::default().render(Some(callback));
    let index = first_index(&diagram, BodyPartSlug::LeftBiceps);
    assert!(diagram.click(index, MouseEvent::click(42.0, 84.0)));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, BodyPartSlug::LeftBiceps);
    let mouse = calls[0].1.as_mouse().expect("mouse event");
    assert_eq!((mouse.x, mouse.y), (42.0, 84.0));
}

#[test]
fn enter_and_space_activate_once_each() {
    let (callback, count) = counting_callback();
    let diagram = BodyConfig::default().render(Some(callback));
    let index = first_index(&diagram, BodyPartSlug::Abs);

    assert!(diagram.key_down(index, &mut KeyboardEvent::new("Enter")));
    assert_eq!(count.get(), 1);
    assert!(diagram.key_down(index, &mut KeyboardEvent::new(" ")));
    assert_eq!(count.get(), 2);
    assert!(!diagram.key_down(index, &mut KeyboardEvent::new("Escape")));
    assert_eq!(count.get(), 2);
}

#[test]
fn disabled_parts_never_activate() {
    let (callback, count) = counting_callback();
    let diagram = config_with(vec![], vec![BodyPartSlug::LeftBiceps]).render(Some(callback));

    for (index, _) in diagram.shapes_for(BodyPartSlug::LeftBiceps) {
        diagram.click(index, MouseEvent::click(0.0, 0.0));
        diagram.key_down(index, &mut KeyboardEvent::new("Enter"));
        diagram.key_down(index, &mut KeyboardEvent::new(" "));
    }
    assert_eq!(count.get(), 0);
}

#[test]
fn every_path_of_a_region_activates() {
    let (callback, count) = counting_callback();
    let diagram = BodyConfig::default().render(Some(callback));

    let indices: Vec<usize> = diagram.shapes_for(BodyPartSlug::Abs).map(|(i, _)| i).collect();
    assert!(indices.len() > 1);
    for index in &indices {
        diagram.click(*index, MouseEvent::click(0.0, 0.0));
    }
    assert_eq!(count.get(), indices.len());
}

// =============================================================================
// ACCESSIBILITY
// =============================================================================

#[test]
fn shapes_are_labelled_buttons() {
    let diagram = BodyConfig::default().render(None);
    for shape in diagram.shapes() {
        assert_eq!(shape.role, "button");
        assert_eq!(shape.aria_label, shape.slug.as_str().replace('-', " "));
    }
    let (_, biceps) = diagram.shapes_for(BodyPartSlug::LeftBiceps).next().unwrap();
    assert_eq!(biceps.aria_label, "left biceps");
}

#[test]
fn tab_order_skips_disabled_parts() {
    let (callback, count) = counting_callback();
    let config = BodyConfig {
        side: Side::Back,
        disabled_parts: vec![BodyPartSlug::LeftNeck],
        ..Default::default()
    };
    let diagram = config.render(Some(callback));
    let mut ring = FocusRing::new();

    // Tab through the whole ring once
    let focusable = diagram.tree().focusable_indices();
    let mut visited = Vec::new();
    for _ in 0..focusable.len() {
        assert!(ring.route_key(&diagram, &mut KeyboardEvent::new("Tab")));
        visited.push(ring.focused().unwrap());
    }
    assert_eq!(visited, focusable);
    assert!(visited
        .iter()
        .all(|&i| diagram.shapes()[i].slug != BodyPartSlug::LeftNeck));

    // Wraps around to the first
    ring.route_key(&diagram, &mut KeyboardEvent::new("Tab"));
    assert_eq!(ring.focused(), focusable.first().copied());

    assert!(ring.route_key(&diagram, &mut KeyboardEvent::new(" ")));
    assert_eq!(count.get(), 1);
}

// =============================================================================
// DETERMINISM AND SCENARIOS
// =============================================================================

#[test]
fn identical_props_identical_output() {
    let config = config_with(
        vec![BodyPartData::new(BodyPartSlug::RightCalves, "#abcdef")],
        vec![BodyPartSlug::LeftFeet],
    );
    assert_eq!(config.render(None).tree(), config.render(None).tree());
    assert_eq!(
        config.render(None).to_svg().unwrap(),
        config.render(None).to_svg().unwrap()
    );
}

#[test]
fn border_none_removes_outline() {
    let config = BodyConfig {
        border: Border::None,
        ..Default::default()
    };
    assert!(!config.render(None).to_svg().unwrap().contains("stroke="));
}

#[test]
fn config_file_to_svg() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{
            "data": [{{"slug": "left-biceps", "color": "#ff0000"}}, {{"slug": "wings", "color": "#000"}}],
            "gender": "female",
            "scale": 1.5,
            "disabledParts": ["right-biceps"]
        }}"##
    )
    .unwrap();

    let config = BodyConfig::from_path(file.path()).unwrap();
    let svg = config.render(None).to_svg().unwrap();
    assert!(svg.contains(r#"aria-label="female-body-front""#));
    assert!(svg.contains(r#"width="300""#));
    assert!(svg.contains(r#"height="600""#));
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(r#"aria-disabled="true""#));
}

#[test]
fn reactive_component_with_selection() {
    let selection = Selection::new();
    let component = body(BodyProps {
        data: selection.data_prop(),
        on_click: Some(selection.click_handler()),
        ..Default::default()
    });

    let diagram = component.diagram();
    let index = first_index(&diagram, BodyPartSlug::Abs);

    diagram.click(index, MouseEvent::click(0.0, 0.0));
    assert!(selection.contains(BodyPartSlug::Abs));
    let tree = component.tree();
    assert!(tree.shapes_for(BodyPartSlug::Abs).all(|(_, s)| s.fill == "#ff6b6b"));

    // Second activation toggles it back off
    diagram.key_down(index, &mut KeyboardEvent::new("Enter"));
    assert!(!selection.contains(BodyPartSlug::Abs));
    let tree = component.tree();
    assert!(tree.shapes_for(BodyPartSlug::Abs).all(|(_, s)| s.fill == "#3f3f3f"));
}
