use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Column categories, rendered left to right.
pub const COLUMN_CATEGORIES: [&str; 4] = [
    "Ingestion and Transport",
    "Storage",
    "Query and Processing",
    "Analysis and Output",
];

/// The band category, rendered as a full-width row near the bottom.
pub const BAND_CATEGORY: &str = "Platform Management";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

/// Ordered category -> subcategory -> tool names. Order is insertion order;
/// the category set is fixed to the four columns plus the band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCatalog {
    pub categories: Vec<Category>,
}

impl ToolCatalog {
    /// Catalog with the canonical categories present and empty.
    pub fn with_main_categories() -> Self {
        let mut categories: Vec<Category> = COLUMN_CATEGORIES
            .iter()
            .map(|name| Category::empty(*name))
            .collect();
        categories.push(Category::empty(BAND_CATEGORY));
        Self { categories }
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// The four column categories, in render order. Categories missing from
    /// the catalog are skipped rather than invented.
    pub fn columns(&self) -> impl Iterator<Item = &Category> {
        COLUMN_CATEGORIES
            .iter()
            .filter_map(|name| self.category(name))
    }

    pub fn band(&self) -> Option<&Category> {
        self.category(BAND_CATEGORY)
    }
}

impl Category {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    pub fn push_subcategory(&mut self, name: impl Into<String>, tools: Vec<String>) {
        self.subcategories.push(Subcategory {
            name: name.into(),
            tools,
        });
    }
}

/// Strips every `Apache ` vendor prefix ("Apache Flink" -> "Flink").
pub fn clean_tool_name(tool: &str) -> String {
    let mut out = String::with_capacity(tool.len());
    let mut rest = tool;
    while let Some(pos) = rest.find("Apache") {
        let after = &rest[pos + "Apache".len()..];
        if after.starts_with(char::is_whitespace) {
            out.push_str(&rest[..pos]);
            rest = after.trim_start();
        } else {
            out.push_str(&rest[..pos + "Apache".len()]);
            rest = after;
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Comma-joined display list with vendor prefixes stripped.
pub fn format_tools_list(tools: &[String]) -> String {
    tools
        .iter()
        .map(|tool| clean_tool_name(tool))
        .collect::<Vec<_>>()
        .join(", ")
}

static COMMERCIAL_CATALOG: Lazy<ToolCatalog> = Lazy::new(build_commercial_catalog);

/// Built-in commercial-edition dataset.
pub fn commercial_catalog() -> &'static ToolCatalog {
    &COMMERCIAL_CATALOG
}

fn build_commercial_catalog() -> ToolCatalog {
    fn subcat(name: &str, tools: &[&str]) -> Subcategory {
        Subcategory {
            name: name.to_string(),
            tools: tools.iter().map(|tool| (*tool).to_string()).collect(),
        }
    }
    fn category(name: &str, subcategories: Vec<Subcategory>) -> Category {
        Category {
            name: name.to_string(),
            subcategories,
        }
    }

    ToolCatalog {
        categories: vec![
            category(
                "Ingestion and Transport",
                vec![
                    subcat(
                        "ETL/ELT Platforms",
                        &[
                            "Fivetran",
                            "Stitch",
                            "Matillion",
                            "Informatica IDMC",
                            "Hevo Data",
                            "Rivery",
                            "AWS Glue",
                            "Azure Data Factory",
                        ],
                    ),
                    subcat(
                        "Event Streaming",
                        &[
                            "Confluent Cloud",
                            "Amazon Kinesis",
                            "Azure Event Hubs",
                            "Google Pub/Sub",
                            "Amazon MSK",
                            "Solace",
                            "WarpStream",
                        ],
                    ),
                    subcat(
                        "Log & Observability",
                        &[
                            "Splunk",
                            "Datadog",
                            "New Relic",
                            "Elastic Cloud",
                            "Sumo Logic",
                            "Cribl",
                            "Coralogix",
                        ],
                    ),
                    subcat(
                        "CDC Solutions",
                        &[
                            "Striim",
                            "Arcion",
                            "Qlik Replicate",
                            "HVR",
                            "AWS DMS",
                            "Google Datastream",
                        ],
                    ),
                ],
            ),
            category(
                "Storage",
                vec![
                    subcat(
                        "Cloud Data Warehouses",
                        &[
                            "Snowflake",
                            "BigQuery",
                            "Redshift",
                            "Azure Synapse",
                            "Databricks SQL",
                            "Firebolt",
                            "Teradata Vantage",
                        ],
                    ),
                    subcat(
                        "Data Lakehouse",
                        &[
                            "Databricks Lakehouse",
                            "Dremio Cloud",
                            "Starburst Galaxy",
                            "Onehouse",
                            "Tabular",
                        ],
                    ),
                    subcat(
                        "Object Storage",
                        &[
                            "Amazon S3",
                            "Azure Blob",
                            "Google Cloud Storage",
                            "Wasabi",
                            "Cloudflare R2",
                        ],
                    ),
                    subcat(
                        "Real-time OLAP",
                        &[
                            "ClickHouse Cloud",
                            "Rockset",
                            "SingleStore",
                            "Imply (Druid)",
                            "Tinybird",
                            "Propel",
                        ],
                    ),
                ],
            ),
            category(
                "Query and Processing",
                vec![
                    subcat(
                        "Stream Processing",
                        &[
                            "Confluent ksqlDB",
                            "Kinesis Analytics",
                            "Azure Stream Analytics",
                            "Google Dataflow",
                            "Decodable",
                            "Materialize Cloud",
                        ],
                    ),
                    subcat(
                        "Batch Processing",
                        &["Databricks", "AWS EMR", "Google Dataproc", "Qubole", "Cloudera"],
                    ),
                    subcat(
                        "Transformation",
                        &["dbt Cloud", "Coalesce", "Dataform", "Prophecy", "Alteryx"],
                    ),
                    subcat(
                        "Query Engines",
                        &["Starburst Galaxy", "Dremio", "Athena", "Snowflake", "BigQuery"],
                    ),
                ],
            ),
            category(
                "Analysis and Output",
                vec![
                    subcat(
                        "Enterprise BI",
                        &[
                            "Tableau",
                            "Power BI",
                            "Looker",
                            "Qlik Sense",
                            "ThoughtSpot",
                            "MicroStrategy",
                            "Domo",
                        ],
                    ),
                    subcat(
                        "Modern BI",
                        &["Mode", "Sigma", "Hex", "Preset", "Lightdash", "Omni"],
                    ),
                    subcat(
                        "Monitoring",
                        &[
                            "Grafana Cloud",
                            "Datadog Dashboards",
                            "New Relic",
                            "Elastic Kibana",
                            "Chronosphere",
                        ],
                    ),
                    subcat(
                        "Product Analytics",
                        &[
                            "Amplitude",
                            "Mixpanel",
                            "Heap",
                            "Pendo",
                            "FullStory",
                            "Posthog Cloud",
                        ],
                    ),
                ],
            ),
            category(
                BAND_CATEGORY,
                vec![
                    subcat(
                        "Orchestration",
                        &[
                            "Astronomer",
                            "Dagster Cloud",
                            "Prefect Cloud",
                            "dbt Cloud",
                            "Kestra Cloud",
                            "Google Composer",
                        ],
                    ),
                    subcat(
                        "Data Catalog",
                        &[
                            "Alation",
                            "Collibra",
                            "Atlan",
                            "Secoda",
                            "Select Star",
                            "Unity Catalog",
                            "Dataplex",
                        ],
                    ),
                    subcat(
                        "Data Quality",
                        &[
                            "Monte Carlo",
                            "Bigeye",
                            "Soda Cloud",
                            "Anomalo",
                            "Metaplane",
                            "Great Expectations Cloud",
                        ],
                    ),
                    subcat(
                        "Security & Access",
                        &["Immuta", "Privacera", "BigID", "Securiti", "Satori", "Okera"],
                    ),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_tool_name_strips_vendor_prefix() {
        assert_eq!(clean_tool_name("Apache Flink"), "Flink");
        assert_eq!(clean_tool_name("Apache  Kafka"), "Kafka");
        assert_eq!(clean_tool_name("Kafka"), "Kafka");
    }

    #[test]
    fn clean_tool_name_strips_every_occurrence() {
        assert_eq!(clean_tool_name("Apache Hive / Apache Impala"), "Hive / Impala");
    }

    #[test]
    fn clean_tool_name_leaves_embedded_word_alone() {
        // Only the prefix followed by whitespace is a vendor marker.
        assert_eq!(clean_tool_name("ApacheCon"), "ApacheCon");
    }

    #[test]
    fn format_tools_list_joins_with_comma() {
        let tools = vec![
            "Kafka".to_string(),
            "Apache Flink".to_string(),
            "Spark".to_string(),
        ];
        assert_eq!(format_tools_list(&tools), "Kafka, Flink, Spark");
    }

    #[test]
    fn canonical_catalog_has_columns_and_band() {
        let catalog = ToolCatalog::with_main_categories();
        assert_eq!(catalog.columns().count(), 4);
        assert!(catalog.band().is_some());
        assert_eq!(catalog.categories.len(), 5);
    }

    #[test]
    fn columns_preserve_canonical_order() {
        let catalog = ToolCatalog::with_main_categories();
        let names: Vec<_> = catalog.columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, COLUMN_CATEGORIES);
    }

    #[test]
    fn commercial_catalog_is_fully_populated() {
        let catalog = commercial_catalog();
        assert_eq!(catalog.categories.len(), 5);
        for category in &catalog.categories {
            assert!(
                !category.subcategories.is_empty(),
                "{} has no subcategories",
                category.name
            );
            for subcategory in &category.subcategories {
                assert!(!subcategory.tools.is_empty());
            }
        }
    }
}
