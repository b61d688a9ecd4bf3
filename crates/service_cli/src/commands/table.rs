//! Table command implementation
//!
//! Lists, shows and manages the named tables of a model.

use clap::Subcommand;
use ratecard_core::types::PricingModel;

use super::Session;
use crate::Result;

/// `ratecard table` actions
#[derive(Debug, Clone, Subcommand)]
pub enum TableAction {
    /// List the tables of a model, marking the active one
    List {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,
    },

    /// Print the active table as a grid
    Show {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,
    },

    /// Create a table and make it active
    New {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Table name
        name: String,
    },

    /// Rename the active table
    Rename {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// New name
        name: String,
    },

    /// Delete the active table
    Delete {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,
    },

    /// Make a table active by id or name
    Select {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Table id or name
        table: String,
    },
}

impl TableAction {
    /// Returns true if the action edits the store.
    pub fn mutates(&self) -> bool {
        !matches!(self, TableAction::List { .. } | TableAction::Show { .. })
    }
}

/// Tables of `model`, active one marked with `*`.
pub fn render_list(session: &Session, model: PricingModel) -> String {
    let tables = session.store.tables(model);
    let active = tables.active_id();
    tables
        .tables()
        .iter()
        .map(|t| {
            let marker = if t.id == active { '*' } else { ' ' };
            format!("{} {}  ({}, {} route(s))", marker, t.name, t.id, t.rows.len())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The active table of `model`: one row per route, one column per bracket.
pub fn render_grid(session: &Session, model: PricingModel) -> String {
    let limits = session.store.limits();
    let table = session.store.active_table(model);

    let mut header = vec!["#".to_string(), "Origin".to_string(), "Dest".to_string()];
    header.extend((0..limits.len()).filter_map(|i| limits.label(i)));

    let mut lines = vec![format!("{} [{}]", table.name, model), header.join("\t")];
    for (i, row) in table.rows.iter().enumerate() {
        let mut cells = vec![i.to_string(), row.origin.clone(), row.destination.clone()];
        cells.extend((0..limits.len()).map(|c| match row.rates.get(c) {
            Some(rate) => rate.to_string(),
            None => "-".to_string(),
        }));
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

/// Run the table command
pub fn run(session: &mut Session, action: TableAction) -> Result<()> {
    match action {
        TableAction::List { model } => println!("{}", render_list(session, model)),
        TableAction::Show { model } => println!("{}", render_grid(session, model)),
        TableAction::New { model, name } => {
            let id = session.store.create_table(model, &name)?;
            println!("Created table '{}' ({}) for {}", name.trim(), id, model);
        }
        TableAction::Rename { model, name } => {
            session.store.rename_table(model, &name)?;
            println!("Renamed active {} table to '{}'", model, name.trim());
        }
        TableAction::Delete { model } => {
            let removed = session.store.delete_table(model)?;
            let active = session.store.active_table(model);
            println!(
                "Deleted table '{}'; '{}' is now active",
                removed.name, active.name
            );
        }
        TableAction::Select { model, table } => {
            let selected = session.store.select_table(model, &table)?;
            println!("Active {} table: {}", model, selected.name);
        }
    }
    Ok(())
}
