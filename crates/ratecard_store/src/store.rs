//! The rate card store: shared bracket limits plus tables for every model.
//!
//! All bracket limits are global. Adding a bracket pads every row of every
//! table of every model with an unset cell, so rate vectors stay aligned
//! with the limits at all times.

use std::collections::HashSet;

use ratecard_core::types::{parse_rate_input, BracketLimits, PricingModel, Route};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::table::{ModelTables, RateTable};

/// In-memory rate card state.
///
/// # Examples
///
/// ```
/// use ratecard_core::types::PricingModel;
/// use ratecard_store::RateCardStore;
///
/// let mut store = RateCardStore::new();
/// store.set_route(PricingModel::Fixed, 0, "MNL", "CEB").unwrap();
/// store.set_rate(PricingModel::Fixed, 0, 1, "12.5").unwrap();
///
/// let table = store.active_table(PricingModel::Fixed);
/// assert_eq!(table.rows[0].rates.get(1), Some(12.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateCardStore {
    limits: BracketLimits,
    models: [ModelTables; 7],
}

impl Default for RateCardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RateCardStore {
    /// A store with the default limits and one blank table per model.
    pub fn new() -> Self {
        Self::with_limits(BracketLimits::default())
    }

    /// A store with the given limits and one blank table per model.
    pub fn with_limits(limits: BracketLimits) -> Self {
        let brackets = limits.len();
        Self {
            limits,
            models: std::array::from_fn(|_| ModelTables::new(brackets)),
        }
    }

    /// Rebuild a store from parts, restoring every invariant.
    ///
    /// Models missing from `models` get a default table.
    pub(crate) fn from_parts(
        limits: BracketLimits,
        models: impl IntoIterator<Item = (PricingModel, ModelTables)>,
    ) -> Self {
        let mut store = Self::with_limits(limits);
        let brackets = store.limits.len();
        for (model, mut tables) in models {
            tables.normalise(brackets);
            store.models[model.index()] = tables;
        }
        store
    }

    /// Shared bracket limits.
    pub fn limits(&self) -> &BracketLimits {
        &self.limits
    }

    /// Replace the bracket limits, realigning every rate vector.
    pub fn replace_limits(&mut self, limits: BracketLimits) {
        info!(limits = %limits, "Replacing bracket limits");
        self.limits = limits;
        let brackets = self.limits.len();
        for tables in &mut self.models {
            tables.align(brackets);
        }
    }

    /// Tables of `model`.
    pub fn tables(&self, model: PricingModel) -> &ModelTables {
        &self.models[model.index()]
    }

    fn tables_mut(&mut self, model: PricingModel) -> &mut ModelTables {
        &mut self.models[model.index()]
    }

    /// Every model with its tables, in [`PricingModel::ALL`] order.
    pub fn models(&self) -> impl Iterator<Item = (PricingModel, &ModelTables)> {
        PricingModel::ALL.into_iter().zip(self.models.iter())
    }

    /// The active table of `model`.
    pub fn active_table(&self, model: PricingModel) -> &RateTable {
        self.tables(model).active()
    }

    /// The active table of `model`, mutable.
    pub(crate) fn active_table_mut(&mut self, model: PricingModel) -> &mut RateTable {
        self.tables_mut(model).active_mut()
    }

    // ========================================================================
    // Brackets
    // ========================================================================

    /// Append a bracket 50kg above the last one and pad every row.
    ///
    /// Returns the new limit.
    pub fn add_bracket(&mut self) -> f64 {
        let limit = self.limits.push_next();
        for tables in &mut self.models {
            tables.align(self.limits.len());
        }
        info!(limit, brackets = self.limits.len(), "Added bracket");
        limit
    }

    /// Change one limit. The value must be a positive number.
    ///
    /// Ascending order is not enforced.
    pub fn set_limit(&mut self, index: usize, value: f64) -> StoreResult<()> {
        self.limits.set(index, value)?;
        debug!(index, value, "Updated bracket limit");
        Ok(())
    }

    // ========================================================================
    // Rows
    // ========================================================================

    fn row_mut(&mut self, model: PricingModel, row: usize) -> StoreResult<&mut Route> {
        let table = self.active_table_mut(model);
        let len = table.rows.len();
        table
            .rows
            .get_mut(row)
            .ok_or(StoreError::RowOutOfRange { row, len })
    }

    /// Set one rate cell from user text. Blank text clears the cell.
    pub fn set_rate(
        &mut self,
        model: PricingModel,
        row: usize,
        column: usize,
        input: &str,
    ) -> StoreResult<Option<f64>> {
        let rate = parse_rate_input(input)?;
        let brackets = self.limits.len();
        if column >= brackets {
            return Err(StoreError::ColumnOutOfRange {
                column,
                len: brackets,
            });
        }
        let route = self.row_mut(model, row)?;
        route.rates.resize(brackets);
        route.rates.set(column, rate);
        debug!(%model, row, column, ?rate, "Updated rate");
        Ok(rate)
    }

    /// Set a row's origin and destination.
    pub fn set_route(
        &mut self,
        model: PricingModel,
        row: usize,
        origin: &str,
        destination: &str,
    ) -> StoreResult<()> {
        let route = self.row_mut(model, row)?;
        route.origin = origin.to_string();
        route.destination = destination.to_string();
        debug!(%model, row, origin, destination, "Updated route");
        Ok(())
    }

    /// Append a blank row to the active table. Returns its index.
    pub fn add_row(&mut self, model: PricingModel) -> usize {
        let brackets = self.limits.len();
        let table = self.active_table_mut(model);
        table.rows.push(Route::empty(brackets));
        let index = table.rows.len() - 1;
        debug!(%model, row = index, "Added row");
        index
    }

    /// Delete a row of the active table. The last row cannot be deleted.
    pub fn delete_row(&mut self, model: PricingModel, row: usize) -> StoreResult<Route> {
        let table = self.active_table_mut(model);
        let len = table.rows.len();
        if row >= len {
            return Err(StoreError::RowOutOfRange { row, len });
        }
        if len == 1 {
            return Err(StoreError::LastRow);
        }
        let removed = table.rows.remove(row);
        debug!(%model, row, "Deleted row");
        Ok(removed)
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Create a table for `model` and make it active. Returns the new id.
    pub fn create_table(&mut self, model: PricingModel, name: &str) -> StoreResult<String> {
        let name = non_blank(name)?;
        let brackets = self.limits.len();
        let id = self.tables_mut(model).create(name, brackets).id.clone();
        info!(%model, table = name, id = %id, "Created table");
        Ok(id)
    }

    /// Rename the active table of `model`.
    pub fn rename_table(&mut self, model: PricingModel, name: &str) -> StoreResult<()> {
        let name = non_blank(name)?;
        let table = self.active_table_mut(model);
        info!(%model, from = %table.name, to = name, "Renamed table");
        table.name = name.to_string();
        Ok(())
    }

    /// Delete the active table of `model`; the first remaining table becomes
    /// active. The only table of a model cannot be deleted.
    pub fn delete_table(&mut self, model: PricingModel) -> StoreResult<RateTable> {
        let removed = self
            .tables_mut(model)
            .remove_active()
            .ok_or(StoreError::LastTable(model))?;
        info!(%model, table = %removed.name, "Deleted table");
        Ok(removed)
    }

    /// Activate a table of `model` by id or by name.
    pub fn select_table(&mut self, model: PricingModel, key: &str) -> StoreResult<&RateTable> {
        match self.models[model.index()].select(key) {
            Some(table) => {
                debug!(%model, table = %table.name, "Selected table");
                Ok(table)
            }
            None => Err(StoreError::UnknownTable {
                model,
                table: key.to_string(),
            }),
        }
    }

    // ========================================================================
    // Lookup helpers
    // ========================================================================

    /// Distinct non-empty origins of the active table, in first-seen order.
    pub fn origins(&self, model: PricingModel) -> Vec<String> {
        distinct(self.active_table(model).rows.iter().map(|r| r.origin.as_str()))
    }

    /// Distinct non-empty destinations of the active table, in first-seen order.
    pub fn destinations(&self, model: PricingModel) -> Vec<String> {
        distinct(
            self.active_table(model)
                .rows
                .iter()
                .map(|r| r.destination.as_str()),
        )
    }
}

fn non_blank(name: &str) -> StoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(StoreError::BlankName)
    } else {
        Ok(trimmed)
    }
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .filter(|n| !n.is_empty() && seen.insert(*n))
        .map(str::to_string)
        .collect()
}
