pub mod text;

use crate::catalog::{self, Category, Subcategory, ToolCatalog};
use crate::config::LayoutConfig;
use crate::text_metrics::{CharWidthHeuristic, TextMeasure};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A cell rectangle plus the text-fitting budget derived from it. Computed
/// once per render and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl LayoutBox {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Wrapped tool lines positioned inside a cell. `visible` counts the lines
/// that fit the vertical budget; anything past it is clipped at render time.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub visible: usize,
    pub x: f32,
    pub first_line_y: f32,
    pub line_height: f32,
    pub title_y: f32,
}

#[derive(Debug, Clone)]
pub struct CellLayout {
    pub title: String,
    pub frame: Rect,
    pub text: TextBlock,
}

/// One category column, or the platform band. Same drawing primitives, the
/// geometry differs.
#[derive(Debug, Clone)]
pub struct CategoryLayout {
    pub title: String,
    pub title_x: f32,
    pub title_y: f32,
    pub frame: Rect,
    pub cells: Vec<CellLayout>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub title_x: f32,
    pub title_y: f32,
    pub border: Rect,
    pub logo_slot: Rect,
    pub columns: Vec<CategoryLayout>,
    pub band: Option<CategoryLayout>,
}

/// Computes the full diagram geometry using the theme's character-width
/// heuristic for wrapping.
pub fn compute_layout(
    catalog: &ToolCatalog,
    title: &str,
    theme: &Theme,
    config: &LayoutConfig,
) -> Layout {
    let measure = CharWidthHeuristic::new(theme.char_width_coefficient);
    compute_layout_with(catalog, title, theme, config, &measure)
}

/// As [`compute_layout`], with a caller-supplied width measurer.
pub fn compute_layout_with(
    catalog: &ToolCatalog,
    title: &str,
    theme: &Theme,
    config: &LayoutConfig,
    measure: &dyn TextMeasure,
) -> Layout {
    let width = config.width;
    let height = config.height;
    let content_width = width - config.margin_left - config.margin_right;
    let content_height = height - config.margin_top - config.margin_bottom;

    let border = Rect {
        x: config.margin_left,
        y: config.margin_top,
        width: content_width,
        height: content_height,
    };

    let logo_slot = Rect {
        x: width - config.margin_right - config.logo_width,
        y: config.margin_top - 40.0,
        width: config.logo_width,
        height: config.logo_height,
    };

    let column_categories: Vec<&Category> = catalog.columns().collect();
    let column_count = column_categories.len().max(1) as f32;
    let column_width = content_width / column_count;
    let column_height = content_height - config.platform_height - config.column_header_height;

    let mut columns = Vec::with_capacity(column_categories.len());
    for (i, category) in column_categories.iter().enumerate() {
        let x = config.margin_left + i as f32 * column_width;
        let y = config.margin_top + config.column_header_height;

        let frame = Rect {
            x: x + 10.0,
            y,
            width: column_width - 20.0,
            height: column_height - 50.0,
        };

        let mut cells = Vec::with_capacity(category.subcategories.len());
        if !category.subcategories.is_empty() {
            let sub_height = (column_height - 70.0) / category.subcategories.len() as f32;
            for (j, subcategory) in category.subcategories.iter().enumerate() {
                let cell_box = LayoutBox {
                    x: x + 20.0,
                    y: y + j as f32 * sub_height + 15.0,
                    width: column_width - 40.0,
                    height: sub_height - 10.0,
                    max_width: column_width - config.tools_padding,
                    max_height: sub_height - 2.0 * config.subcategory_padding - 10.0,
                };
                cells.push(layout_cell(subcategory, cell_box, theme, config, measure));
            }
        }

        columns.push(CategoryLayout {
            title: category.name.clone(),
            title_x: x + column_width / 2.0,
            title_y: y - 10.0,
            frame,
            cells,
        });
    }

    let band = catalog.band().map(|category| {
        let band_y = height - config.margin_bottom - config.platform_height - 10.0;
        let band_width = content_width - 20.0;
        let frame = Rect {
            x: config.margin_left + 10.0,
            y: band_y,
            width: band_width,
            height: config.platform_height,
        };

        let mut cells = Vec::with_capacity(category.subcategories.len());
        if !category.subcategories.is_empty() {
            let sub_width = band_width / category.subcategories.len() as f32;
            for (i, subcategory) in category.subcategories.iter().enumerate() {
                let cell_box = LayoutBox {
                    x: config.margin_left + 20.0 + i as f32 * sub_width,
                    y: band_y + 10.0,
                    width: sub_width - 20.0,
                    height: config.platform_height - 20.0,
                    max_width: sub_width - config.tools_padding,
                    max_height: config.platform_height - 40.0,
                };
                cells.push(layout_cell(subcategory, cell_box, theme, config, measure));
            }
        }

        CategoryLayout {
            title: category.name.clone(),
            title_x: width / 2.0,
            title_y: band_y - 12.0,
            frame,
            cells,
        }
    });

    Layout {
        width,
        height,
        title: title.to_string(),
        title_x: config.margin_left + 10.0,
        title_y: config.margin_top - 20.0,
        border,
        logo_slot,
        columns,
        band,
    }
}

fn layout_cell(
    subcategory: &Subcategory,
    cell_box: LayoutBox,
    theme: &Theme,
    config: &LayoutConfig,
    measure: &dyn TextMeasure,
) -> CellLayout {
    let formatted = catalog::format_tools_list(&subcategory.tools);
    let lines = text::wrap_tools_list(
        &formatted,
        cell_box.max_width,
        theme.tools_font_size,
        measure,
    );

    // Center the block vertically: 25px title band above the first tools
    // line, subcategory title 10px into the block.
    let line_height = config.line_height;
    let total_height = lines.len() as f32 * line_height;
    let start_y = cell_box.y + (cell_box.height - (total_height + 25.0)) / 2.0 + 5.0;

    let visible = lines
        .iter()
        .enumerate()
        .take_while(|(i, _)| (*i as f32) * line_height < cell_box.max_height)
        .count();

    CellLayout {
        title: subcategory.name.clone(),
        frame: cell_box.rect(),
        text: TextBlock {
            lines,
            visible,
            x: cell_box.x + cell_box.width / 2.0,
            first_line_y: start_y + 25.0,
            line_height,
            title_y: start_y + 10.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{commercial_catalog, ToolCatalog, BAND_CATEGORY};

    fn sample_catalog() -> ToolCatalog {
        let mut catalog = ToolCatalog::with_main_categories();
        for name in crate::catalog::COLUMN_CATEGORIES {
            let category = catalog.category_mut(name).expect("canonical category");
            category.push_subcategory(
                "Streaming",
                vec!["Apache Kafka".to_string(), "Redpanda".to_string()],
            );
            category.push_subcategory("Batch", vec!["Apache Spark".to_string()]);
        }
        let band = catalog.category_mut(BAND_CATEGORY).expect("band");
        band.push_subcategory("Orchestration", vec!["Airflow".to_string()]);
        band.push_subcategory("Catalog", vec!["DataHub".to_string()]);
        catalog
    }

    fn layout(catalog: &ToolCatalog) -> Layout {
        compute_layout(
            catalog,
            "OSS Data Tools Landscape",
            &Theme::oss(),
            &LayoutConfig::default(),
        )
    }

    #[test]
    fn columns_span_the_content_width() {
        let catalog = sample_catalog();
        let layout = layout(&catalog);
        let config = LayoutConfig::default();
        let content_width = config.width - config.margin_left - config.margin_right;

        assert_eq!(layout.columns.len(), 4);
        // Frames are inset 10px each side of equal-width column slots.
        let total: f32 = layout
            .columns
            .iter()
            .map(|column| column.frame.width + 20.0)
            .sum();
        assert!((total - content_width).abs() < 0.01);
    }

    #[test]
    fn column_cells_share_height_equally() {
        let catalog = sample_catalog();
        let layout = layout(&catalog);
        let column = &layout.columns[0];
        assert_eq!(column.cells.len(), 2);
        assert!((column.cells[0].frame.height - column.cells[1].frame.height).abs() < 0.01);
        assert!(column.cells[0].frame.y < column.cells[1].frame.y);
    }

    #[test]
    fn band_cells_share_width_equally() {
        let catalog = sample_catalog();
        let layout = layout(&catalog);
        let band = layout.band.expect("band layout");
        let cell_count = band.cells.len() as f32;
        assert_eq!(band.cells.len(), 2);
        // Cells are inset 20px inside equal-width slots of the band frame.
        let total: f32 = band.cells.iter().map(|cell| cell.frame.width + 20.0).sum();
        assert!((total - band.frame.width).abs() < 0.01 * cell_count);
    }

    #[test]
    fn band_sits_above_the_bottom_margin() {
        let catalog = sample_catalog();
        let config = LayoutConfig::default();
        let layout = layout(&catalog);
        let band = layout.band.expect("band layout");
        let expected_y =
            config.height - config.margin_bottom - config.platform_height - 10.0;
        assert!((band.frame.y - expected_y).abs() < 0.01);
        assert!((band.frame.height - config.platform_height).abs() < 0.01);
    }

    #[test]
    fn empty_subcategory_contributes_no_lines() {
        let mut catalog = ToolCatalog::with_main_categories();
        catalog
            .category_mut("Storage")
            .expect("canonical category")
            .push_subcategory("Object Storage", Vec::new());
        let layout = layout(&catalog);
        let storage = layout
            .columns
            .iter()
            .find(|column| column.title == "Storage")
            .expect("storage column");
        let cell = &storage.cells[0];
        assert!(cell.text.lines.is_empty());
        assert_eq!(cell.text.visible, 0);
    }

    #[test]
    fn vendor_prefix_stripped_in_cell_lines() {
        let catalog = sample_catalog();
        let layout = layout(&catalog);
        let joined = layout.columns[0].cells[0].text.lines.join(" ");
        assert!(joined.contains("Kafka"));
        assert!(!joined.contains("Apache"));
    }

    #[test]
    fn visible_lines_respect_the_vertical_budget() {
        let layout = layout(commercial_catalog());
        for column in &layout.columns {
            for cell in &column.cells {
                assert!(cell.text.visible <= cell.text.lines.len());
            }
        }
    }

    #[test]
    fn missing_column_category_is_skipped() {
        let mut catalog = sample_catalog();
        catalog.categories.retain(|c| c.name != "Storage");
        let layout = layout(&catalog);
        assert_eq!(layout.columns.len(), 3);
    }
}
