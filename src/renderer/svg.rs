//! SVG generation from border layouts
//!
//! The document holds one shared catalogue of path and mask definitions and
//! one group per tile that references them by id. Output size grows with the
//! number of distinct definitions plus the tile count, not their product.

use std::collections::BTreeSet;

use crate::layout::BorderLayout;
use crate::spec::BorderSpec;

use super::geometry::{Glyph, UNIT};
use super::weave::{self, GeometryKey, MaskKey, StrandPaint, WeaveMetrics};
use super::SvgConfig;

/// Shared definitions for one render, memoized by glyph and mask key.
///
/// Ids are derived from the `GeometryKey`, so a catalogue never hands out a
/// definition sized for another configuration. The catalogue lives only for
/// the render that built it.
#[derive(Debug, Clone)]
pub struct GeometryCatalogue {
    key: GeometryKey,
    gap: f64,
    id_prefix: String,
    glyphs: BTreeSet<Glyph>,
    masks: BTreeSet<MaskKey>,
}

impl GeometryCatalogue {
    pub fn new(key: GeometryKey, gap: f64, id_prefix: impl Into<String>) -> Self {
        Self {
            key,
            gap,
            id_prefix: id_prefix.into(),
            glyphs: BTreeSet::new(),
            masks: BTreeSet::new(),
        }
    }

    pub fn key(&self) -> GeometryKey {
        self.key
    }

    /// Register a glyph and return its definition id
    pub fn path_id(&mut self, glyph: Glyph) -> String {
        self.glyphs.insert(glyph);
        self.glyph_id(glyph)
    }

    /// Register a mask and return its definition id
    pub fn mask_id(&mut self, mask: MaskKey) -> String {
        self.masks.insert(mask);
        self.mask_def_id(mask)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn mask_count(&self) -> usize {
        self.masks.len()
    }

    fn glyph_id(&self, glyph: Glyph) -> String {
        if glyph.is_styled() {
            format!(
                "{}-path-{}-{}",
                self.id_prefix,
                glyph.name(),
                self.key.style.as_str()
            )
        } else {
            format!("{}-path-{}", self.id_prefix, glyph.name())
        }
    }

    fn mask_def_id(&self, mask: MaskKey) -> String {
        format!("{}-{}", self.id_prefix, mask.name())
    }

    /// Write every registered definition, paths first, in a stable order
    fn write_defs(&self, builder: &mut SvgBuilder) {
        for glyph in &self.glyphs {
            builder.add_path_def(&self.glyph_id(*glyph), glyph.path_data(self.key.style));
        }
        for mask in &self.masks {
            builder.add_mask_def(&self.mask_def_id(*mask), mask.over.path_data(), self.gap);
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn pad(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, names: &[&str]) -> String {
        match &self.config.class_prefix {
            Some(prefix) => {
                let list = names
                    .iter()
                    .map(|n| format!("{}{}", prefix, n))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#" class="{}""#, escape_xml(&list))
            }
            None => String::new(),
        }
    }

    /// Add a shared path definition
    pub fn add_path_def(&mut self, id: &str, d: &str) {
        self.defs.push(format!(
            r#"{}<path id="{}" d="{}"/>"#,
            self.pad(2),
            escape_xml(id),
            d
        ));
    }

    /// Add an occlusion mask: everything visible except a band of width
    /// `gap` along `cut`
    pub fn add_mask_def(&mut self, id: &str, cut: &str, gap: f64) {
        let nl = self.newline();
        self.defs.push(format!(
            r#"{}<mask id="{}" maskUnits="userSpaceOnUse">{nl}{}<rect x="-50" y="-50" width="200" height="200" fill="white"/>{nl}{}<path d="{}" stroke="black" stroke-width="{}" fill="none" stroke-linecap="round"/>{nl}{}</mask>"#,
            self.pad(2),
            escape_xml(id),
            self.pad(3),
            self.pad(3),
            cut,
            num(gap),
            self.pad(2),
        ));
    }

    /// Open a group with raw attributes (leading space included)
    pub fn start_group(&mut self, attrs: &str) {
        self.elements
            .push(format!("{}<g{}>", self.pad(self.indent), attrs));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.pad(self.indent)));
    }

    /// Reference a shared path with a stroke
    pub fn add_use(&mut self, href: &str, stroke: &str, width: f64) {
        self.elements.push(format!(
            r##"{}<use href="#{}" stroke="{}" stroke-width="{}"/>"##,
            self.pad(self.indent),
            escape_xml(href),
            escape_xml(stroke),
            num(width)
        ));
    }

    /// Draw one strand, with its ribbon when the paint has one
    pub fn add_strand(&mut self, href: &str, mask: Option<&str>, paint: &StrandPaint) {
        if let Some(mask) = mask {
            self.start_group(&format!(r#" mask="url(#{})""#, escape_xml(mask)));
        }
        self.add_use(href, &paint.color, paint.width);
        if let Some((color, width)) = &paint.ribbon {
            self.add_use(href, color, *width);
        }
        if mask.is_some() {
            self.end_group();
        }
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let (w, h) = (num(width), num(height));
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" overflow="visible" pointer-events="none">"#
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(&self.pad(1));
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(&self.pad(1));
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a border layout to an SVG string
pub fn render_svg(layout: &BorderLayout, spec: &BorderSpec, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    if layout.tiles.is_empty() {
        return builder.build(layout.width, layout.height);
    }

    let metrics = WeaveMetrics::new(spec.stroke_width, spec.cell_size);
    let key = GeometryKey::for_spec(spec);
    let paint = StrandPaint::for_spec(spec, &metrics);
    let mut catalogue = GeometryCatalogue::new(key, metrics.gap, config.id_prefix.clone());
    let scale = spec.cell_size / UNIT;

    let border_attrs = format!(
        r#"{} fill="none" stroke-linecap="round" stroke-linejoin="{}" stroke-miterlimit="10""#,
        builder.class_attr(&["border"]),
        paint.line_join
    );
    builder.start_group(&border_attrs);

    for woven in weave::weave(&layout.tiles, key.gap_id) {
        let archetype = woven.tile.archetype.to_string();
        let tile_attrs = format!(
            r#"{} transform="translate({}, {}) scale({})""#,
            builder.class_attr(&["tile", &archetype]),
            num(woven.tile.x),
            num(woven.tile.y),
            num(scale)
        );
        builder.start_group(&tile_attrs);
        for strand in &woven.strands {
            let href = catalogue.path_id(strand.glyph);
            let mask = strand.mask.map(|m| catalogue.mask_id(m));
            builder.add_strand(&href, mask.as_deref(), &paint);
        }
        builder.end_group();
    }

    builder.end_group();
    catalogue.write_defs(&mut builder);

    tracing::debug!(
        tiles = layout.tiles.len(),
        paths = catalogue.glyph_count(),
        masks = catalogue.mask_count(),
        id_prefix = %config.id_prefix,
        "assembled border svg"
    );

    builder.build(layout.width, layout.height)
}

/// Format a number with at most three decimals and no trailing zeros
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute, Corner, Side};
    use crate::renderer::geometry::Diagonal;
    use crate::spec::{CornerStyle, Pattern};

    fn small_spec() -> BorderSpec {
        BorderSpec::new(100.0, 100.0).with_cell_size(20.0)
    }

    fn render(spec: &BorderSpec) -> String {
        render_svg(&compute(spec), spec, &SvgConfig::default())
    }

    #[test]
    fn test_num() {
        assert_eq!(num(15.0), "15");
        assert_eq!(num(37.5), "37.5");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(100.0 / 30.0), "3.333");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(f64::NAN), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml(r#"x" onload="y"#), "x&quot; onload=&quot;y");
    }

    #[test]
    fn test_empty_layout_renders_sized_document() {
        let spec = BorderSpec::new(0.0, 300.0);
        let svg = render(&spec);
        assert!(svg.contains(r#"width="0" height="300""#));
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("<g"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_root_is_sized_and_inert() {
        let svg = render(&small_spec());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="100" height="100" viewBox="0 0 100 100""#));
        assert!(svg.contains(r#"pointer-events="none""#));
    }

    #[test]
    fn test_one_group_per_tile() {
        let spec = small_spec();
        let layout = compute(&spec);
        let svg = render_svg(&layout, &spec, &SvgConfig::default());
        assert_eq!(svg.matches(r#"class="knot-tile "#).count(), layout.tiles.len());
        assert!(svg.contains(r#"transform="translate(0, 0) scale(0.2)""#));
    }

    #[test]
    fn test_definitions_are_shared() {
        // 5x5, thickness 2: every edge and corner glyph, no crossings
        let svg = render(&small_spec());
        assert_eq!(svg.matches("<path id=").count(), 12);
        assert_eq!(svg.matches("<mask").count(), 0);
        assert!(svg.contains(r##"href="#knot-path-corner-tl-round""##));
    }

    #[test]
    fn test_crossings_reference_masks() {
        let spec = BorderSpec::new(180.0, 180.0)
            .with_cell_size(20.0)
            .with_thickness(3);
        let svg = render(&spec);
        assert_eq!(svg.matches("<mask id=").count(), 2);
        assert!(svg.contains(r#"<mask id="knot-mask-2750-falling-over""#));
        assert!(svg.contains(r##"mask="url(#knot-mask-2750-rising-over)""##));
        assert!(svg.contains(r#"stroke-width="27.5""#));
        assert!(svg.contains(r#"<path id="knot-path-diagonal-rising" d="M0,100 L100,0"/>"#));
    }

    #[test]
    fn test_mask_ids_follow_stroke_width() {
        let thin = BorderSpec::new(180.0, 180.0)
            .with_cell_size(20.0)
            .with_thickness(3);
        let thick = thin.clone().with_stroke("currentColor", 6.0);
        assert!(render(&thin).contains("knot-mask-2750-"));
        let svg = render(&thick);
        assert!(svg.contains("knot-mask-4250-"));
        assert!(!svg.contains("knot-mask-2750-"));
    }

    #[test]
    fn test_ribbon_doubles_uses() {
        let plain = render(&small_spec());
        let ribbon = render(&small_spec().with_ribbon("#fcd34d"));
        assert_eq!(
            ribbon.matches("<use ").count(),
            2 * plain.matches("<use ").count()
        );
        assert!(ribbon.contains(r##"stroke="#fcd34d" stroke-width="6""##));
    }

    #[test]
    fn test_corner_style_in_ids_and_join() {
        let svg = render(&small_spec().with_corner_style(CornerStyle::Sharp));
        assert!(svg.contains("knot-path-edge-top-sharp"));
        assert!(svg.contains(r#"stroke-linejoin="miter""#));
        assert!(!svg.contains("-round\""));
    }

    #[test]
    fn test_id_prefix_and_compact_output() {
        let spec = small_spec();
        let config = SvgConfig::new()
            .with_id_prefix("b2")
            .with_pretty_print(false)
            .with_standalone(false)
            .without_class_prefix();
        let svg = render_svg(&compute(&spec), &spec, &config);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(svg.contains(r##"href="#b2-path-edge-top-round""##));
        assert!(!svg.contains("class="));
    }

    #[test]
    fn test_catalogue_memoizes() {
        let key = GeometryKey {
            style: CornerStyle::Box,
            gap_id: 100,
        };
        let mut catalogue = GeometryCatalogue::new(key, 1.0, "k");
        let a = catalogue.path_id(Glyph::Edge(Side::Top));
        let b = catalogue.path_id(Glyph::Edge(Side::Top));
        catalogue.path_id(Glyph::InnerCorner(Corner::TopLeft));
        catalogue.path_id(Glyph::Diagonal(Diagonal::Rising));
        assert_eq!(a, b);
        assert_eq!(a, "k-path-edge-top-box");
        assert_eq!(catalogue.glyph_count(), 3);

        let mask = MaskKey {
            over: Diagonal::Falling,
            gap_id: 100,
        };
        assert_eq!(catalogue.mask_id(mask), "k-mask-100-falling-over");
        catalogue.mask_id(mask);
        assert_eq!(catalogue.mask_count(), 1);
        assert_eq!(catalogue.key(), key);
    }

    #[test]
    fn test_box_pattern_has_no_masks() {
        let spec = BorderSpec::new(180.0, 180.0)
            .with_cell_size(20.0)
            .with_thickness(3)
            .with_pattern(Pattern::Box);
        let svg = render(&spec);
        assert!(!svg.contains("<mask"));
        assert!(svg.contains("knot-box-v"));
        assert!(svg.contains("knot-box-h"));
    }
}
