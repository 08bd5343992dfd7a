use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub title_font_size: f32,
    pub category_font_size: f32,
    pub subcategory_font_size: f32,
    pub tools_font_size: f32,
    /// Average character width as a fraction of the font size. Drives the
    /// width estimate used by the text wrapper.
    pub char_width_coefficient: f32,
    pub background: String,
    pub border_color: String,
    pub title_color: String,
    pub category_color: String,
    pub subcategory_color: String,
    pub tools_color: String,
    pub box_background: String,
    pub cell_background: String,
    pub cell_border: String,
}

impl Theme {
    /// Mint-on-white palette of the open-source landscape.
    pub fn oss() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            title_font_size: 24.0,
            category_font_size: 20.0,
            subcategory_font_size: 14.0,
            tools_font_size: 12.0,
            char_width_coefficient: 0.6,
            background: "#f0fffa".to_string(),
            border_color: "#000000".to_string(),
            title_color: "#000000".to_string(),
            category_color: "#56D696".to_string(),
            subcategory_color: "#000000".to_string(),
            tools_color: "#000000".to_string(),
            box_background: "#FFFFFF".to_string(),
            cell_background: "#F5F5F5".to_string(),
            cell_border: "#E0E0E0".to_string(),
        }
    }

    /// Orange palette of the commercial landscape. Smaller tools font and a
    /// tighter width coefficient to fit the longer vendor names.
    pub fn commercial() -> Self {
        Self {
            tools_font_size: 11.0,
            char_width_coefficient: 0.55,
            background: "#fff5e6".to_string(),
            category_color: "#E67E22".to_string(),
            box_background: "#ffffff".to_string(),
            cell_background: "#FFF8F0".to_string(),
            ..Self::oss()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::oss()
    }
}
