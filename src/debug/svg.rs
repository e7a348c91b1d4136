use std::sync::Arc;

use crate::{
    foundation::core::{Rect, Size},
    foundation::error::{FlexError, FlexResult},
    layout::collect::LayoutMap,
};

/// Translucent fills cycled over the entries of a layout.
pub const PALETTE: [&str; 15] = [
    "rgba(0,0,0,0.1)",
    "rgba(255,0,0,0.1)",
    "rgba(0,255,0,0.1)",
    "rgba(0,0,255,0.1)",
    "rgba(255,255,0,0.1)",
    "rgba(255,0,255,0.1)",
    "rgba(0,255,255,0.1)",
    "rgba(255,165,0,0.1)",
    "rgba(128,0,128,0.1)",
    "rgba(0,128,0,0.1)",
    "rgba(128,0,0,0.1)",
    "rgba(0,0,128,0.1)",
    "rgba(128,128,0,0.1)",
    "rgba(139,69,19,0.1)",
    "rgba(70,130,180,0.1)",
];

const TITLE_HEIGHT: f64 = 24.0;
const LABEL_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for [`layout_to_svg`].
pub struct SvgOptions {
    /// Heading drawn above the layout.
    pub title: Option<String>,
    /// Root size; drawn as a black outline when set.
    pub frame: Option<Size>,
    /// Empty margin around the drawing.
    pub padding: f64,
    /// Draw each entry's key inside its rectangle.
    pub labels: bool,
    /// Canvas fill.
    pub background: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            title: None,
            frame: None,
            padding: 10.0,
            labels: true,
            background: "white".to_string(),
        }
    }
}

impl SvgOptions {
    /// Default options: white background, labels on, 10px padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Outline a root of the given size at the origin.
    pub fn frame(mut self, width: f64, height: f64) -> Self {
        self.frame = Some(Size::new(width, height));
        self
    }

    /// Set the margin.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Toggle key labels.
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }
}

/// Draw a collected layout as labelled rectangles.
///
/// Rectangles use the coordinates reported by the map, so nested entries are drawn relative
/// to the origin rather than to their parent.
pub fn layout_to_svg(layout: &LayoutMap, opts: &SvgOptions) -> String {
    let bounds = drawing_bounds(layout, opts.frame);
    let pad = opts.padding.max(0.0);
    let title_h = if opts.title.is_some() {
        TITLE_HEIGHT
    } else {
        0.0
    };
    let width = (bounds.width() + 2.0 * pad).max(1.0);
    let height = (bounds.height() + 2.0 * pad + title_h).max(1.0);

    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
        ),
    );
    push_line(
        &mut out,
        format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(width),
            fmt_num(height),
            escape_xml(&opts.background),
        ),
    );
    if let Some(title) = &opts.title {
        push_line(
            &mut out,
            format!(
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="14">{}</text>"#,
                fmt_num(pad),
                fmt_num(pad + 14.0),
                escape_xml(title),
            ),
        );
    }

    push_line(
        &mut out,
        format!(
            r#"  <g transform="translate({} {})">"#,
            fmt_num(pad - bounds.x0),
            fmt_num(pad + title_h - bounds.y0),
        ),
    );
    if let Some(frame) = opts.frame {
        push_line(
            &mut out,
            format!(
                r#"    <rect x="0" y="0" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
                fmt_num(frame.width),
                fmt_num(frame.height),
            ),
        );
    }
    for (i, (key, node)) in layout.iter().enumerate() {
        let r = node.rect().abs();
        push_line(
            &mut out,
            format!(
                r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="black" stroke-width="0.5"/>"#,
                fmt_num(r.x0),
                fmt_num(r.y0),
                fmt_num(r.width()),
                fmt_num(r.height()),
                PALETTE[i % PALETTE.len()],
            ),
        );
        if opts.labels {
            let c = r.center();
            push_line(
                &mut out,
                format!(
                    r#"    <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                    fmt_num(c.x),
                    fmt_num(c.y),
                    fmt_num(LABEL_SIZE),
                    escape_xml(key),
                ),
            );
        }
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

/// Rasterize an SVG document into straight-alpha RGBA8.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn render_png(svg: &str, scale: f32) -> FlexResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FlexError::validation(format!(
            "scale must be finite and > 0 (got {scale})"
        )));
    }

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| FlexError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        FlexError::render(format!("cannot allocate {width}x{height} pixmap"))
    })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| FlexError::render("pixmap byte length mismatch"))
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

fn drawing_bounds(layout: &LayoutMap, frame: Option<Size>) -> Rect {
    let mut bounds = frame.map(|f| Rect::from_origin_size((0.0, 0.0), f));
    for (_, node) in layout.iter() {
        let r = node.rect().abs();
        bounds = Some(match bounds {
            Some(b) => b.union(r),
            None => r,
        });
    }
    bounds.unwrap_or(Rect::ZERO)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.3}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/debug/svg.rs"]
mod tests;
