//! SVG output for a [`DiagramTree`].
//!
//! ```text
//! <svg xmlns=".." width=".." height=".." viewBox=".." role="img" aria-label="male-body-front">
//!   <path d=".." fill="none" stroke="#dfdfdf"/>            (outline, unless border is none)
//!   <path d=".." fill=".." style="cursor: pointer" role="button" tabindex="0"
//!         aria-label="left biceps" data-testid="left-biceps"/>
//!   ...
//! </svg>
//! ```

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::diagram::{DiagramTree, FRAME_ROLE, Shape};
use crate::error::{Error, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `tree` to an SVG document string.
pub fn to_svg_string(tree: &DiagramTree) -> Result<String> {
    let mut output = Vec::new();
    write_svg(tree, &mut output)?;
    String::from_utf8(output).map_err(|e| Error::Xml(e.to_string()))
}

/// Stream `tree` as SVG into `writer`.
pub fn write_svg<W: Write>(tree: &DiagramTree, writer: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    let width = format_number(tree.width);
    let height = format_number(tree.height);
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", tree.view_box));
    root.push_attribute(("role", FRAME_ROLE));
    root.push_attribute(("aria-label", tree.label.as_str()));
    write_event(&mut writer, Event::Start(root))?;

    if let Some(stroke) = tree.border.color() {
        for path in tree.outline {
            let mut outline = BytesStart::new("path");
            outline.push_attribute(("d", *path));
            outline.push_attribute(("fill", "none"));
            outline.push_attribute(("stroke", stroke));
            write_event(&mut writer, Event::Empty(outline))?;
        }
    }

    for shape in &tree.shapes {
        write_event(&mut writer, Event::Empty(shape_element(shape)))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("svg")))
}

fn shape_element(shape: &Shape) -> BytesStart<'static> {
    let style = format!("cursor: {}", shape.cursor.as_str());
    let tab_index = shape.tab_index.to_string();

    let mut elem = BytesStart::new("path");
    elem.push_attribute(("d", shape.path));
    elem.push_attribute(("fill", shape.fill.as_str()));
    elem.push_attribute(("style", style.as_str()));
    elem.push_attribute(("role", shape.role));
    elem.push_attribute(("tabindex", tab_index.as_str()));
    elem.push_attribute(("aria-label", shape.aria_label.as_str()));
    if shape.aria_disabled {
        elem.push_attribute(("aria-disabled", "true"));
    }
    elem.push_attribute(("data-testid", shape.test_id()));
    elem
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

/// Shortest decimal form: `200`, `100`, `150.5`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.4}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RenderOptions, render_tree};
    use crate::resolver::resolve;
    use crate::types::{BodyPartData, BodyPartSlug, Border, DEFAULT_FILL, DISABLED_COLOR};

    fn svg(options: RenderOptions, highlights: &[BodyPartData], disabled: &[BodyPartSlug]) -> String {
        let resolver = resolve(highlights, disabled.iter().copied(), DEFAULT_FILL);
        to_svg_string(&render_tree(&options, &resolver)).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(200.0), "200");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(150.5), "150.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_frame_attributes() {
        let out = svg(RenderOptions::default(), &[], &[]);
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"width="200""#));
        assert!(out.contains(r#"height="400""#));
        assert!(out.contains(r#"viewBox="0 0 200 400""#));
        assert!(out.contains(r#"role="img""#));
        assert!(out.contains(r#"aria-label="male-body-front""#));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_scaled_frame() {
        let out = svg(
            RenderOptions {
                scale: 0.5,
                ..Default::default()
            },
            &[],
            &[],
        );
        assert!(out.contains(r#"width="100""#));
        assert!(out.contains(r#"height="200""#));
    }

    #[test]
    fn test_shape_attributes() {
        let out = svg(
            RenderOptions::default(),
            &[BodyPartData::new(BodyPartSlug::Abs, "#ff0000")],
            &[BodyPartSlug::LeftBiceps],
        );
        assert!(out.contains(r##"fill="#ff0000""##));
        assert!(out.contains(r#"data-testid="abs""#));
        assert!(out.contains(r#"aria-label="left biceps""#));
        assert!(out.contains(&format!(r#"fill="{}""#, DISABLED_COLOR)));
        assert!(out.contains(r#"aria-disabled="true""#));
        assert!(out.contains(r#"tabindex="-1""#));
        assert!(out.contains("cursor: default"));
        assert!(out.contains("cursor: pointer"));
    }

    #[test]
    fn test_border_none_drops_outline() {
        let with = svg(RenderOptions::default(), &[], &[]);
        assert!(with.contains(r##"stroke="#dfdfdf""##));

        let without = svg(
            RenderOptions {
                border: Border::None,
                ..Default::default()
            },
            &[],
            &[],
        );
        assert!(!without.contains("stroke="));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let out = svg(
            RenderOptions::default(),
            &[BodyPartData::new(BodyPartSlug::Abs, "\"><script>")],
            &[],
        );
        assert!(!out.contains("<script>"));
    }
}
