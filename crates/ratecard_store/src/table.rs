//! Named rate tables and the per-model table set.
//!
//! Each pricing model owns an ordered, never-empty list of [`RateTable`]s and
//! remembers which one is active. Quotes and edits always go through the
//! active table.

use std::fmt;

use ratecard_core::types::Route;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Name given to the table every model starts with.
pub const DEFAULT_TABLE_NAME: &str = "Standard Table";

/// A named grid of routes sharing the store's bracket limits.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    /// Opaque identifier, unique within its model
    pub id: String,
    /// Display name
    pub name: String,
    /// Route rows in editor order
    pub rows: Vec<Route>,
}

impl RateTable {
    /// A fresh table with a generated id and one blank row.
    pub fn new(name: impl Into<String>, brackets: usize) -> Self {
        Self {
            id: generate_table_id(),
            name: name.into(),
            rows: vec![Route::empty(brackets)],
        }
    }

    /// Resize every row's rate cells to `brackets`.
    pub fn align(&mut self, brackets: usize) {
        for row in &mut self.rows {
            row.rates.resize(brackets);
        }
    }
}

/// Generate an id in the `p_<hex>` form used by exported documents.
pub fn generate_table_id() -> String {
    format!("p_{}", Uuid::new_v4().simple())
}

/// The tables belonging to one pricing model.
///
/// The list is never empty. `active_id` may name a table that no longer
/// exists (e.g. after import); lookups then fall back to the first table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTables {
    #[serde(rename = "activeId")]
    active_id: String,
    #[serde(rename = "profiles", with = "profiles_as_map")]
    tables: Vec<RateTable>,
}

impl ModelTables {
    /// A set holding only the default table.
    pub fn new(brackets: usize) -> Self {
        let table = RateTable::new(DEFAULT_TABLE_NAME, brackets);
        Self {
            active_id: table.id.clone(),
            tables: vec![table],
        }
    }

    /// Tables in creation order.
    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }

    /// Id of the active table, repaired to the first table if stale.
    pub fn active_id(&self) -> &str {
        &self.tables[self.active_index()].id
    }

    /// The active table.
    pub fn active(&self) -> &RateTable {
        &self.tables[self.active_index()]
    }

    /// The active table, repairing a stale active id first.
    pub fn active_mut(&mut self) -> &mut RateTable {
        let index = self.active_index();
        self.active_id = self.tables[index].id.clone();
        &mut self.tables[index]
    }

    fn active_index(&self) -> usize {
        self.tables
            .iter()
            .position(|t| t.id == self.active_id)
            .unwrap_or(0)
    }

    /// Append a table and make it active.
    pub fn create(&mut self, name: impl Into<String>, brackets: usize) -> &RateTable {
        let table = RateTable::new(name, brackets);
        self.active_id = table.id.clone();
        self.tables.push(table);
        let last = self.tables.len() - 1;
        &self.tables[last]
    }

    /// Remove the active table and activate the first remaining one.
    ///
    /// Returns `None` when the active table is the only one.
    pub fn remove_active(&mut self) -> Option<RateTable> {
        if self.tables.len() <= 1 {
            return None;
        }
        let removed = self.tables.remove(self.active_index());
        self.active_id = self.tables[0].id.clone();
        Some(removed)
    }

    /// Activate the table whose id, or failing that whose name, equals `key`.
    ///
    /// Returns the activated table, or `None` if nothing matched.
    pub fn select(&mut self, key: &str) -> Option<&RateTable> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == key)
            .or_else(|| self.tables.iter().position(|t| t.name == key))?;
        self.active_id = self.tables[index].id.clone();
        Some(&self.tables[index])
    }

    /// Restore invariants after deserialisation: non-empty, valid active id,
    /// rate cells aligned with `brackets`.
    pub(crate) fn normalise(&mut self, brackets: usize) {
        if self.tables.is_empty() {
            *self = Self::new(brackets);
            return;
        }
        let index = self.active_index();
        self.active_id = self.tables[index].id.clone();
        self.align(brackets);
    }

    pub(crate) fn align(&mut self, brackets: usize) {
        for table in &mut self.tables {
            table.align(brackets);
        }
    }
}

/// Serialises tables as an id-keyed object that keeps document order.
mod profiles_as_map {
    use super::*;

    #[derive(Serialize)]
    struct TableBodyRef<'a> {
        name: &'a str,
        rows: &'a [Route],
    }

    #[derive(Deserialize)]
    struct TableBody {
        #[serde(default)]
        name: String,
        #[serde(default)]
        rows: Vec<Route>,
    }

    pub fn serialize<S: Serializer>(tables: &[RateTable], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(tables.len()))?;
        for table in tables {
            map.serialize_entry(
                &table.id,
                &TableBodyRef {
                    name: &table.name,
                    rows: &table.rows,
                },
            )?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RateTable>, D::Error> {
        struct ProfilesVisitor;

        impl<'de> Visitor<'de> for ProfilesVisitor {
            type Value = Vec<RateTable>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of table id to table")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tables = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, body)) = access.next_entry::<String, TableBody>()? {
                    tables.push(RateTable {
                        id,
                        name: body.name,
                        rows: body.rows,
                    });
                }
                Ok(tables)
            }
        }

        deserializer.deserialize_map(ProfilesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_new_model_tables_has_default_table() {
        let tables = ModelTables::new(4);
        assert_eq!(tables.tables().len(), 1);
        assert_eq!(tables.active().name, DEFAULT_TABLE_NAME);
        assert_eq!(tables.active().rows.len(), 1);
        assert_eq!(tables.active().rows[0].rates.len(), 4);
        assert_eq!(tables.active_id(), tables.tables()[0].id);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = generate_table_id();
        let b = generate_table_id();
        assert!(a.starts_with("p_"));
        assert_ne!(a, b);
    }

    // ========================================================================
    // Create / Select / Remove
    // ========================================================================

    #[test]
    fn test_create_activates_new_table() {
        let mut tables = ModelTables::new(2);
        let id = tables.create("VIP Rates", 2).id.clone();
        assert_eq!(tables.tables().len(), 2);
        assert_eq!(tables.active_id(), id);
        assert_eq!(tables.active().name, "VIP Rates");
    }

    #[test]
    fn test_select_by_id_then_name() {
        let mut tables = ModelTables::new(2);
        let first_id = tables.tables()[0].id.clone();
        tables.create("VIP Rates", 2);

        assert_eq!(tables.select(&first_id).unwrap().name, DEFAULT_TABLE_NAME);
        assert_eq!(tables.select("VIP Rates").unwrap().name, "VIP Rates");
        assert!(tables.select("nope").is_none());
        assert_eq!(tables.active().name, "VIP Rates");
    }

    #[test]
    fn test_remove_active_falls_back_to_first() {
        let mut tables = ModelTables::new(2);
        tables.create("B", 2);
        tables.create("C", 2);
        tables.select("B");

        let removed = tables.remove_active().unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(tables.active().name, DEFAULT_TABLE_NAME);
    }

    #[test]
    fn test_remove_last_table_refused() {
        let mut tables = ModelTables::new(2);
        assert!(tables.remove_active().is_none());
        assert_eq!(tables.tables().len(), 1);
    }

    // ========================================================================
    // Active Id Repair
    // ========================================================================

    #[test]
    fn test_stale_active_id_resolves_to_first() {
        let mut tables = ModelTables::new(2);
        tables.create("B", 2);
        tables.active_id = "missing".to_string();

        assert_eq!(tables.active().name, DEFAULT_TABLE_NAME);
        tables.active_mut();
        assert_eq!(tables.active_id, tables.tables()[0].id);
    }

    // ========================================================================
    // Serialisation
    // ========================================================================

    #[test]
    fn test_profiles_serialise_as_id_keyed_object() {
        let tables = ModelTables::new(1);
        let json = serde_json::to_value(&tables).unwrap();
        let id = tables.active_id().to_string();

        assert_eq!(json["activeId"], id.as_str());
        assert_eq!(json["profiles"][&id]["name"], DEFAULT_TABLE_NAME);
        assert_eq!(json["profiles"][&id]["rows"][0]["dest"], "");
    }

    #[test]
    fn test_profiles_keep_document_order() {
        let json = r#"{
            "activeId": "p_b",
            "profiles": {
                "p_z": { "name": "Zulu", "rows": [] },
                "p_b": { "name": "Bravo", "rows": [
                    { "origin": "MNL", "dest": "CEB", "rates": [10, null] }
                ] }
            }
        }"#;
        let mut tables: ModelTables = serde_json::from_str(json).unwrap();
        tables.normalise(3);

        let names: Vec<_> = tables.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zulu", "Bravo"]);
        assert_eq!(tables.active().name, "Bravo");
        assert_eq!(tables.active().rows[0].rates.as_slice(), &[Some(10.0), None, None]);
    }

    #[test]
    fn test_normalise_empty_profiles() {
        let json = r#"{ "activeId": "gone", "profiles": {} }"#;
        let mut tables: ModelTables = serde_json::from_str(json).unwrap();
        tables.normalise(2);
        assert_eq!(tables.tables().len(), 1);
        assert_eq!(tables.active().name, DEFAULT_TABLE_NAME);
    }
}
