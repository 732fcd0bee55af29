//! Configuration for the scripted demo run

use std::path::Path;

use catalog_adapter::DuplicatePolicy;
use catalog_domain::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Demo configuration (`--config <file>`)
///
/// Every field falls back to the stock run: Laptop and Smartphone are
/// added, product 1 is fetched, then removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Products added in order before the first listing
    pub products: Vec<Product>,

    /// Product fetched by id after the first listing
    pub fetch_id: ProductId,

    /// Product removed before the second listing
    pub remove_id: ProductId,

    /// Reject products whose id is already stored
    pub unique_ids: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            products: vec![Product::new(1, "Laptop"), Product::new(2, "Smartphone")],
            fetch_id: ProductId::new(1),
            remove_id: ProductId::new(1),
            unique_ids: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from a file. `.yaml`/`.yml` are read as YAML,
    /// anything else as JSON.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }

    /// Builder: set whether duplicate product ids are rejected
    pub fn with_unique_ids(mut self, unique_ids: bool) -> Self {
        self.unique_ids = unique_ids;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.unique_ids {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_matches_stock_run() {
        let config = DemoConfig::default();

        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0], Product::new(1, "Laptop"));
        assert_eq!(config.fetch_id, ProductId::new(1));
        assert_eq!(config.remove_id, ProductId::new(1));
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Allow);
    }

    #[test]
    fn test_config_parse_json() {
        let file = write_config(
            ".json",
            r#"{
                "products": [
                    { "id": 10, "name": "Keyboard" },
                    { "id": 11 }
                ],
                "fetchId": 11,
                "uniqueIds": true
            }"#,
        );

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.products,
            vec![Product::new(10, "Keyboard"), Product::unnamed(11)]
        );
        assert_eq!(config.fetch_id, ProductId::new(11));
        // Missing keys fall back to defaults
        assert_eq!(config.remove_id, ProductId::new(1));
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_with_unique_ids() {
        let config = DemoConfig::default().with_unique_ids(true);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Reject);

        let config = config.with_unique_ids(false);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Allow);
    }

    #[test]
    fn test_config_parse_yaml() {
        let file = write_config(
            ".yml",
            "products:\n  - id: 3\n    name: Tablet\nremoveId: 3\n",
        );

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.products, vec![Product::new(3, "Tablet")]);
        assert_eq!(config.remove_id, ProductId::new(3));
        assert_eq!(config.fetch_id, ProductId::new(1));
    }

    #[test]
    fn test_malformed_config() {
        let file = write_config(".json", "{ \"products\": 5 }");

        let err = DemoConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = DemoConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
