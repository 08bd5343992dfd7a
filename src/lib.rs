pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use catalog::ToolCatalog;
pub use config::{Config, Edition, LayoutConfig, RenderConfig, load_config};
pub use layout::{Layout, compute_layout};
pub use render::render_svg;
pub use theme::Theme;
