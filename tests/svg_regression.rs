//! SVG regression tests
//!
//! These check document-level invariants across a set of preset borders:
//! every reference resolves to exactly one definition, definitions are
//! never duplicated, and output is byte-stable across runs.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use knotwork::{
    render, render_with_config, BorderSpec, CornerStyle, Emblem, EmblemPlacement, Pattern,
    RenderConfig,
};

fn presets() -> Vec<(&'static str, BorderSpec)> {
    let base = BorderSpec::new(600.0, 800.0)
        .with_cell_size(25.0)
        .with_inset(15.0);
    vec![
        ("braid-round-2", base.clone()),
        (
            "braid-sharp-3",
            base.clone()
                .with_thickness(3)
                .with_corner_style(CornerStyle::Sharp),
        ),
        (
            "twist-x-box-3",
            base.clone()
                .with_thickness(3)
                .with_pattern(Pattern::TwistX)
                .with_corner_style(CornerStyle::Box),
        ),
        (
            "twist-y-ribbon-3",
            base.clone()
                .with_thickness(3)
                .with_pattern(Pattern::TwistY)
                .with_ribbon("#fcd34d"),
        ),
        (
            "box-1",
            base.clone().with_thickness(1).with_pattern(Pattern::Box),
        ),
        (
            "braid-emblem-3",
            base.with_thickness(3)
                .with_emblem(Emblem::new(EmblemPlacement::BottomCenter).with_scale(0.6)),
        ),
    ]
}

/// Collect every value of `attr="..."` in document order
fn attr_values<'a>(svg: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!(r#"{}=""#, attr);
    let mut out = vec![];
    let mut rest = svg;
    while let Some(start) = rest.find(&needle) {
        rest = &rest[start + needle.len()..];
        if let Some(end) = rest.find('"') {
            out.push(&rest[..end]);
            rest = &rest[end..];
        }
    }
    out
}

#[test]
fn test_every_reference_resolves() {
    for (name, spec) in presets() {
        let svg = render(&spec);
        let ids: BTreeSet<&str> = attr_values(&svg, "id").into_iter().collect();

        for href in attr_values(&svg, "href") {
            let target = href.trim_start_matches('#');
            assert!(ids.contains(target), "{}: dangling href {}", name, href);
        }
        for mask in attr_values(&svg, "mask") {
            let target = mask
                .trim_start_matches("url(#")
                .trim_end_matches(')');
            assert!(ids.contains(target), "{}: dangling mask {}", name, mask);
        }
    }
}

#[test]
fn test_definitions_are_unique_and_used() {
    for (name, spec) in presets() {
        let svg = render(&spec);
        let ids = attr_values(&svg, "id");
        let unique: BTreeSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "{}: duplicate definition", name);

        for id in &unique {
            let referenced = svg.contains(&format!("#{}\"", id))
                || svg.contains(&format!("#{})", id));
            assert!(referenced, "{}: unused definition {}", name, id);
        }
    }
}

#[test]
fn test_output_is_stable() {
    for (name, spec) in presets() {
        assert_eq!(render(&spec), render(&spec), "{}", name);
    }
}

#[test]
fn test_tile_group_count_matches_layout() {
    for (name, spec) in presets() {
        let layout = knotwork::compute(&spec);
        let svg = render(&spec);
        assert_eq!(
            svg.matches(r#"class="knot-tile "#).count(),
            layout.tiles.len(),
            "{}",
            name
        );
        assert_eq!(svg.matches(r#"class="knot-border""#).count(), 1, "{}", name);
    }
}

#[test]
fn test_masks_only_where_strands_cross() {
    let by_name: Vec<(&str, bool)> = presets()
        .into_iter()
        .map(|(name, spec)| (name, render(&spec).contains("<mask ")))
        .collect();
    assert_eq!(
        by_name,
        vec![
            ("braid-round-2", false),
            ("braid-sharp-3", true),
            ("twist-x-box-3", true),
            ("twist-y-ribbon-3", true),
            ("box-1", false),
            ("braid-emblem-3", true),
        ]
    );
}

#[test]
fn test_two_borders_on_one_page_do_not_collide() {
    let spec = BorderSpec::new(300.0, 300.0).with_thickness(3);
    let left = render_with_config(&spec, &RenderConfig::new().with_id_prefix("left"));
    let right = render_with_config(&spec, &RenderConfig::new().with_id_prefix("right"));

    let left_ids: BTreeSet<&str> = attr_values(&left, "id").into_iter().collect();
    let right_ids: BTreeSet<&str> = attr_values(&right, "id").into_iter().collect();
    assert!(!left_ids.is_empty());
    assert!(left_ids.is_disjoint(&right_ids));
}
