use crate::layout::{CategoryLayout, CellLayout, Layout};
use crate::theme::Theme;
use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;
use tracing::warn;

#[cfg(feature = "png")]
use crate::config::RenderConfig;

/// Logo bytes pre-encoded as a PNG data URI for inline embedding.
#[derive(Debug, Clone)]
pub struct Logo {
    pub data_uri: String,
}

/// Reads the logo image if present. A missing logo is logged and skipped;
/// the diagram renders without it.
pub fn load_logo(path: &Path) -> Option<Logo> {
    match std::fs::read(path) {
        Ok(bytes) => Some(Logo {
            data_uri: format!("data:image/png;base64,{}", BASE64.encode(bytes)),
        }),
        Err(err) => {
            warn!("logo {} not embedded: {err}", path.display());
            None
        }
    }
}

pub fn render_svg(layout: &Layout, theme: &Theme, logo: Option<&Logo>) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" font-family=\"{}\">",
        escape_xml(&theme.font_family)
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\"/>",
        layout.border.x,
        layout.border.y,
        layout.border.width,
        layout.border.height,
        theme.border_color
    ));

    if let Some(logo) = logo {
        svg.push_str(&format!(
            "<image x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" href=\"{}\"/>",
            layout.logo_slot.x,
            layout.logo_slot.y,
            layout.logo_slot.width,
            layout.logo_slot.height,
            logo.data_uri
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"start\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        layout.title_x,
        layout.title_y,
        theme.title_font_size,
        theme.title_color,
        escape_xml(&layout.title)
    ));

    for column in &layout.columns {
        category_svg(&mut svg, column, theme);
    }
    if let Some(band) = &layout.band {
        category_svg(&mut svg, band, theme);
    }

    svg.push_str("</svg>");
    svg
}

fn category_svg(svg: &mut String, category: &CategoryLayout, theme: &Theme) {
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>",
        category.frame.x,
        category.frame.y,
        category.frame.width,
        category.frame.height,
        theme.box_background,
        theme.cell_border
    ));

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        category.title_x,
        category.title_y,
        theme.category_font_size,
        theme.category_color,
        escape_xml(&category.title)
    ));

    for cell in &category.cells {
        cell_svg(svg, cell, theme);
    }
}

fn cell_svg(svg: &mut String, cell: &CellLayout, theme: &Theme) {
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>",
        cell.frame.x,
        cell.frame.y,
        cell.frame.width,
        cell.frame.height,
        theme.cell_background,
        theme.cell_border
    ));

    let text = &cell.text;
    for (idx, line) in text.lines.iter().take(text.visible).enumerate() {
        let y = text.first_line_y + idx as f32 * text.line_height;
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-size=\"{}\" fill=\"{}\">{}</text>",
            text.x,
            theme.tools_font_size,
            theme.tools_color,
            escape_xml(line)
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        text.x,
        text.title_y,
        theme.subcategory_font_size,
        theme.subcategory_color,
        escape_xml(&cell.title)
    ));
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

/// Rasterizes the SVG markup to PNG at `render_cfg.scale` times the canvas
/// size. Failures here are fatal to the run.
#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &RenderConfig,
    theme: &Theme,
) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme.font_family.clone();
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.scale.max(0.1);
    let size = tree.size();
    let pixmap_width = ((size.width() * scale).round() as u32).max(1);
    let pixmap_height = ((size.height() * scale).round() as u32).max(1);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(pixmap_width, pixmap_height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
