//! Schema catalog: page identifier to filter-field layout.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracing::error;

use super::builtins;
use super::types::{FieldKind, PageSchema, PageSummary};
use crate::error::{CatalogError, CatalogResult};

/// Read-only catalog of per-page filter schemas.
///
/// Built-in schemas for the seven report pages are registered on creation.
/// Registration validates structure once so the renderer can trust every
/// schema it gets back.
pub struct SchemaCatalog {
    pages: RwLock<HashMap<String, PageSchema>>,
}

impl SchemaCatalog {
    /// Create a catalog with the built-in report pages.
    pub fn new() -> Self {
        let catalog = Self {
            pages: RwLock::new(HashMap::new()),
        };
        catalog.register_builtins();
        catalog
    }

    /// Create an empty catalog, for callers supplying their own pages.
    pub fn empty() -> Self {
        Self {
            pages: RwLock::new(HashMap::new()),
        }
    }

    /// Register a page schema.
    ///
    /// # Errors
    /// Returns error if the page is already registered, a field name repeats
    /// within the combined primary+advanced list, or a select field has no
    /// options.
    pub fn register(&self, page: impl Into<String>, schema: PageSchema) -> CatalogResult<()> {
        let page = page.into();
        if page.is_empty() {
            return Err(CatalogError::Invalid {
                message: "Page identifier is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for field in schema.all_fields() {
            if field.name.is_empty() {
                return Err(CatalogError::Invalid {
                    message: format!("Page '{}' has a field with an empty name", page),
                });
            }
            if !seen.insert(field.name.clone()) {
                return Err(CatalogError::DuplicateField {
                    page,
                    field: field.name.clone(),
                });
            }
            if let FieldKind::Select { ref options } = field.kind {
                if options.is_empty() {
                    return Err(CatalogError::EmptySelect {
                        page,
                        field: field.name.clone(),
                    });
                }
            }
        }

        let mut pages = self.pages.write().unwrap();
        if pages.contains_key(&page) {
            return Err(CatalogError::DuplicatePage { page });
        }

        pages.insert(page, schema);
        Ok(())
    }

    /// Get a page's schema, or `None` for an unknown page identifier.
    ///
    /// Lookup-miss recovery is the renderer's job, not the catalog's.
    pub fn get(&self, page: &str) -> Option<PageSchema> {
        self.pages.read().unwrap().get(page).cloned()
    }

    /// All registered page identifiers, sorted.
    pub fn pages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.pages.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    /// Brief summaries for every registered page, sorted by identifier.
    pub fn summaries(&self) -> Vec<PageSummary> {
        let pages = self.pages.read().unwrap();
        let mut summaries: Vec<_> = pages
            .iter()
            .map(|(page, schema)| PageSummary {
                page: page.clone(),
                primary_count: schema.primary.len(),
                advanced_count: schema.advanced.len(),
            })
            .collect();
        summaries.sort_by(|a, b| a.page.cmp(&b.page));
        summaries
    }

    /// Number of registered pages.
    pub fn count(&self) -> usize {
        self.pages.read().unwrap().len()
    }

    fn register_builtins(&self) {
        let schemas = [
            ("transactions", builtins::transactions_schema()),
            ("bets", builtins::bets_schema()),
            ("players", builtins::players_schema()),
            ("commission_records", builtins::commission_records_schema()),
            ("deposits", builtins::deposits_schema()),
            ("withdrawals", builtins::withdrawals_schema()),
            ("risk_alerts", builtins::risk_alerts_schema()),
        ];

        for (page, schema) in schemas {
            if let Err(e) = self.register(page, schema) {
                error!(
                    page,
                    error = %e,
                    "Failed to register builtin schema - this indicates a programming error"
                );
            }
        }
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{FieldDescriptor, SelectOption};

    fn test_schema() -> PageSchema {
        PageSchema::new(
            vec![FieldDescriptor::date("start_date", "开始日期")],
            vec![FieldDescriptor::text("order_no", "订单号")],
        )
    }

    #[test]
    fn test_catalog_new_has_builtin_pages() {
        let catalog = SchemaCatalog::new();
        assert_eq!(catalog.count(), 7);
        for page in [
            "transactions",
            "bets",
            "players",
            "commission_records",
            "deposits",
            "withdrawals",
            "risk_alerts",
        ] {
            assert!(catalog.get(page).is_some(), "missing builtin page {}", page);
        }
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = SchemaCatalog::new();
        assert!(catalog.get("announcements").is_none());
    }

    #[test]
    fn test_catalog_register_and_get() {
        let catalog = SchemaCatalog::empty();
        catalog.register("settlement", test_schema()).unwrap();

        let schema = catalog.get("settlement").unwrap();
        assert_eq!(schema.primary.len(), 1);
        assert_eq!(schema.advanced.len(), 1);
    }

    #[test]
    fn test_catalog_duplicate_page_fails() {
        let catalog = SchemaCatalog::empty();
        catalog.register("settlement", test_schema()).unwrap();

        let result = catalog.register("settlement", test_schema());
        assert!(matches!(result, Err(CatalogError::DuplicatePage { .. })));
    }

    #[test]
    fn test_catalog_rejects_empty_page_id() {
        let catalog = SchemaCatalog::empty();
        let result = catalog.register("", test_schema());
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_catalog_rejects_duplicate_field_across_lists() {
        let catalog = SchemaCatalog::empty();
        let schema = PageSchema::new(
            vec![FieldDescriptor::text("username", "会员账号")],
            vec![FieldDescriptor::number("username", "用户ID")],
        );
        let result = catalog.register("broken", schema);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateField { ref field, .. }) if field == "username"
        ));
    }

    #[test]
    fn test_catalog_rejects_empty_select() {
        let catalog = SchemaCatalog::empty();
        let schema = PageSchema::new(
            vec![FieldDescriptor::select("status", "全部状态", vec![])],
            vec![],
        );
        let result = catalog.register("broken", schema);
        assert!(matches!(
            result,
            Err(CatalogError::EmptySelect { ref field, .. }) if field == "status"
        ));
    }

    #[test]
    fn test_bets_game_type_options() {
        let catalog = SchemaCatalog::new();
        let schema = catalog.get("bets").unwrap();

        let game_type = schema
            .primary
            .iter()
            .find(|f| f.name == "game_type")
            .expect("bets should have a game_type field");

        match game_type.kind {
            FieldKind::Select { ref options } => {
                let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                assert!(values.contains(&"百家乐"));
                assert!(values.contains(&"龙虎"));
            }
            _ => panic!("game_type should be a select field"),
        }
    }

    #[test]
    fn test_builtin_field_order_is_stable() {
        let catalog = SchemaCatalog::new();
        let schema = catalog.get("transactions").unwrap();
        let names: Vec<_> = schema.primary.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["start_date", "end_date", "type", "status"]);
    }

    #[test]
    fn test_players_vip_levels() {
        let catalog = SchemaCatalog::new();
        let schema = catalog.get("players").unwrap();
        let vip = schema
            .primary
            .iter()
            .find(|f| f.name == "vip_level")
            .unwrap();
        match vip.kind {
            FieldKind::Select { ref options } => {
                assert_eq!(options.len(), 7);
                assert_eq!(options[0], SelectOption::new("0", "VIP0"));
                assert_eq!(options[6], SelectOption::new("6", "VIP6"));
            }
            _ => panic!("vip_level should be a select field"),
        }
    }

    #[test]
    fn test_catalog_pages_sorted() {
        let catalog = SchemaCatalog::new();
        let pages = catalog.pages();
        let mut sorted = pages.clone();
        sorted.sort();
        assert_eq!(pages, sorted);
        assert_eq!(pages.len(), 7);
    }

    #[test]
    fn test_catalog_summaries() {
        let catalog = SchemaCatalog::new();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), 7);

        let bets = summaries.iter().find(|s| s.page == "bets").unwrap();
        assert_eq!(bets.primary_count, 4);
        assert_eq!(bets.advanced_count, 5);
    }

    #[test]
    fn test_catalog_default() {
        let catalog = SchemaCatalog::default();
        assert_eq!(catalog.count(), 7);
    }
}
