use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which landscape to render. The OSS edition reads markdown tables from the
/// data directory; the commercial edition uses the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Edition {
    Oss,
    Commercial,
}

impl Edition {
    pub fn theme(self) -> Theme {
        match self {
            Self::Oss => Theme::oss(),
            Self::Commercial => Theme::commercial(),
        }
    }

    pub fn diagram_title(self) -> &'static str {
        match self {
            Self::Oss => "OSS Data Tools Landscape",
            Self::Commercial => "Commercial Data Tools Landscape",
        }
    }

    pub fn svg_file_name(self) -> &'static str {
        match self {
            Self::Oss => "data_infrastructure.svg",
            Self::Commercial => "commercial_infrastructure.svg",
        }
    }

    pub fn png_file_name(self) -> &'static str {
        match self {
            Self::Oss => "platform.png",
            Self::Commercial => "commercial_platform.png",
        }
    }

    /// The commercial landscape ships at double resolution (2400x1600).
    pub fn default_scale(self) -> f32 {
        match self {
            Self::Oss => 1.0,
            Self::Commercial => 2.0,
        }
    }
}

/// Canvas dimensions and the fixed padding constants of the grid. All
/// sizing is division by count; nothing adapts to text volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub platform_height: f32,
    pub line_height: f32,
    pub subcategory_padding: f32,
    pub tools_padding: f32,
    pub logo_width: f32,
    pub logo_height: f32,
    /// Vertical room reserved above the columns for category titles.
    pub column_header_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin_top: 50.0,
            margin_right: 50.0,
            margin_bottom: 50.0,
            margin_left: 50.0,
            platform_height: 140.0,
            line_height: 16.0,
            subcategory_padding: 10.0,
            tools_padding: 10.0,
            logo_width: 150.0,
            logo_height: 50.0,
            column_header_height: 40.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    /// Raster scale factor applied when exporting PNG.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            theme: edition.theme(),
            layout: LayoutConfig::default(),
            render: RenderConfig {
                scale: edition.default_scale(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    width: Option<f32>,
    height: Option<f32>,
    scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    title_font_size: Option<f32>,
    category_font_size: Option<f32>,
    subcategory_font_size: Option<f32>,
    tools_font_size: Option<f32>,
    char_width_coefficient: Option<f32>,
    background: Option<String>,
    border_color: Option<String>,
    title_color: Option<String>,
    category_color: Option<String>,
    subcategory_color: Option<String>,
    tools_color: Option<String>,
    box_background: Option<String>,
    cell_background: Option<String>,
    cell_border: Option<String>,
}

/// Edition defaults, optionally overridden by a JSON config file with
/// camelCase theme variables.
pub fn load_config(path: Option<&Path>, edition: Edition) -> anyhow::Result<Config> {
    let mut config = Config::for_edition(edition);
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "commercial" {
            config.theme = Theme::commercial();
        } else if theme_name == "oss" || theme_name == "default" {
            config.theme = Theme::oss();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.title_font_size {
            config.theme.title_font_size = v;
        }
        if let Some(v) = vars.category_font_size {
            config.theme.category_font_size = v;
        }
        if let Some(v) = vars.subcategory_font_size {
            config.theme.subcategory_font_size = v;
        }
        if let Some(v) = vars.tools_font_size {
            config.theme.tools_font_size = v;
        }
        if let Some(v) = vars.char_width_coefficient {
            config.theme.char_width_coefficient = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.border_color {
            config.theme.border_color = v;
        }
        if let Some(v) = vars.title_color {
            config.theme.title_color = v;
        }
        if let Some(v) = vars.category_color {
            config.theme.category_color = v;
        }
        if let Some(v) = vars.subcategory_color {
            config.theme.subcategory_color = v;
        }
        if let Some(v) = vars.tools_color {
            config.theme.tools_color = v;
        }
        if let Some(v) = vars.box_background {
            config.theme.box_background = v;
        }
        if let Some(v) = vars.cell_background {
            config.theme.cell_background = v;
        }
        if let Some(v) = vars.cell_border {
            config.theme.cell_border = v;
        }
    }

    if let Some(width) = parsed.width {
        config.layout.width = width;
        config.render.width = width;
    }
    if let Some(height) = parsed.height {
        config.layout.height = height;
        config.render.height = height;
    }
    if let Some(scale) = parsed.scale {
        config.render.scale = scale;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn edition_defaults() {
        let oss = Config::for_edition(Edition::Oss);
        assert_eq!(oss.render.scale, 1.0);
        assert_eq!(oss.theme.category_color, "#56D696");

        let commercial = Config::for_edition(Edition::Commercial);
        assert_eq!(commercial.render.scale, 2.0);
        assert_eq!(commercial.theme.tools_font_size, 11.0);
    }

    #[test]
    fn edition_output_names() {
        assert_eq!(Edition::Oss.svg_file_name(), "data_infrastructure.svg");
        assert_eq!(Edition::Oss.png_file_name(), "platform.png");
        assert_eq!(
            Edition::Commercial.svg_file_name(),
            "commercial_infrastructure.svg"
        );
        assert_eq!(Edition::Commercial.png_file_name(), "commercial_platform.png");
    }

    #[test]
    fn missing_config_path_uses_edition_defaults() {
        let config = load_config(None, Edition::Commercial).expect("defaults");
        assert_eq!(config.theme.background, "#fff5e6");
    }

    #[test]
    fn config_file_overrides_theme_variables() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        // Hex color values contain `"#`, so the raw string needs the
        // double-hash delimiter.
        write!(
            file,
            r##"{{
                "theme": "oss",
                "themeVariables": {{
                    "categoryColor": "#123456",
                    "toolsFontSize": 10,
                    "charWidthCoefficient": 0.5
                }},
                "scale": 3.0,
                "width": 1600
            }}"##
        )
        .expect("write config");

        let config = load_config(Some(file.path()), Edition::Oss).expect("load");
        assert_eq!(config.theme.category_color, "#123456");
        assert_eq!(config.theme.tools_font_size, 10.0);
        assert_eq!(config.theme.char_width_coefficient, 0.5);
        assert_eq!(config.render.scale, 3.0);
        assert_eq!(config.layout.width, 1600.0);
        assert_eq!(config.render.width, 1600.0);
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");
        assert!(load_config(Some(file.path()), Edition::Oss).is_err());
    }
}
