use crate::catalog::{Subcategory, ToolCatalog};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Markdown file per category, at fixed names inside the data directory.
pub const CATEGORY_FILES: [(&str, &str); 5] = [
    ("01.ingestion_and_transport.md", "Ingestion and Transport"),
    ("02.storage.md", "Storage"),
    ("03.query_and_processing.md", "Query and Processing"),
    ("04.analysis_and_output.md", "Analysis and Output"),
    ("05.platform_management.md", "Platform Management"),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads every category file from `data_dir`. A missing or unreadable file
/// leaves its category empty and generation continues.
pub fn load_catalog(data_dir: &Path) -> ToolCatalog {
    let mut catalog = ToolCatalog::with_main_categories();
    for (file_name, category_name) in CATEGORY_FILES {
        match read_category_file(&data_dir.join(file_name)) {
            Ok(subcategories) => {
                if let Some(category) = catalog.category_mut(category_name) {
                    category.subcategories = subcategories;
                }
            }
            Err(err) => {
                warn!("{err}; leaving {category_name:?} empty");
            }
        }
    }
    catalog
}

pub fn read_category_file(path: &Path) -> Result<Vec<Subcategory>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_category_markdown(&content))
}

/// Splits on `###` heading markers; the first line of each section is the
/// subcategory title, tool names are the second pipe-delimited cell of each
/// table row. The row filter keeps the legacy substring checks (`Tool |`,
/// `---|`) so existing landscape files parse identically.
pub fn parse_category_markdown(content: &str) -> Vec<Subcategory> {
    let mut subcategories = Vec::new();

    for section in content.split("###") {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let Some(title) = section.lines().next().map(str::trim) else {
            continue;
        };

        let tools: Vec<String> = section
            .lines()
            .filter(|line| line.contains('|'))
            .filter(|line| !line.contains("Tool |") && !line.contains("---|"))
            .filter_map(|line| line.split('|').nth(1))
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        if !tools.is_empty() {
            subcategories.push(Subcategory {
                name: title.to_string(),
                tools,
            });
        }
    }

    subcategories
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORAGE_MD: &str = r#"## Storage

### Object Storage

| Tool | Description |
|------|-------------|
| MinIO | S3-compatible object store |
| Apache Ozone | Scalable object store |

### Lake Formats

| Tool | Description |
|------|-------------|
| Apache Iceberg | Open table format |
| Delta Lake | ACID table storage |
"#;

    #[test]
    fn parses_sections_and_table_cells() {
        let subcategories = parse_category_markdown(STORAGE_MD);
        assert_eq!(subcategories.len(), 2);
        assert_eq!(subcategories[0].name, "Object Storage");
        assert_eq!(subcategories[0].tools, vec!["MinIO", "Apache Ozone"]);
        assert_eq!(subcategories[1].name, "Lake Formats");
        assert_eq!(subcategories[1].tools, vec!["Apache Iceberg", "Delta Lake"]);
    }

    #[test]
    fn header_and_separator_rows_are_skipped() {
        let md = "### Only Headers\n\n| Tool | Description |\n|---|---|\n";
        assert!(parse_category_markdown(md).is_empty());
    }

    #[test]
    fn section_without_tools_is_omitted() {
        let md = "### Prose Only\n\nNo table here.\n\n### Real\n\n| Kafka | streaming |\n";
        let subcategories = parse_category_markdown(md);
        assert_eq!(subcategories.len(), 1);
        assert_eq!(subcategories[0].name, "Real");
    }

    #[test]
    fn unpiped_leading_cell_takes_second_column() {
        // Without a leading pipe, the tool name lands in the second cell.
        let md = "### Odd Rows\n\nKafka | streaming\n";
        let subcategories = parse_category_markdown(md);
        assert_eq!(subcategories[0].tools, vec!["streaming"]);
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(parse_category_markdown("").is_empty());
        assert!(parse_category_markdown("## Heading only\n").is_empty());
    }

    #[test]
    fn load_catalog_tolerates_missing_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("02.storage.md"), STORAGE_MD).expect("write fixture");

        let catalog = load_catalog(dir.path());
        let storage = catalog.category("Storage").expect("storage category");
        assert_eq!(storage.subcategories.len(), 2);

        // The four other files are absent; their categories stay empty.
        let ingestion = catalog
            .category("Ingestion and Transport")
            .expect("ingestion category");
        assert!(ingestion.subcategories.is_empty());
    }
}
