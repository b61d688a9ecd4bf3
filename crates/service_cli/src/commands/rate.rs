//! Rate command implementation
//!
//! Edits rate cells of a model's active table.

use clap::Subcommand;
use ratecard_core::types::PricingModel;

use super::Session;
use crate::Result;

/// `ratecard rate` actions
#[derive(Debug, Clone, Subcommand)]
pub enum RateAction {
    /// Set or clear one rate cell
    Set {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Row index (0-based)
        row: usize,

        /// Bracket index (0-based)
        column: usize,

        /// Rate; omit to clear the cell
        value: Option<String>,
    },
}

/// Run the rate command
pub fn run(session: &mut Session, action: RateAction) -> Result<()> {
    match action {
        RateAction::Set {
            model,
            row,
            column,
            value,
        } => {
            let input = value.unwrap_or_default();
            match session.store.set_rate(model, row, column, &input)? {
                Some(rate) => println!("Row {} bracket {}: {}", row, column, rate),
                None => println!("Row {} bracket {}: cleared", row, column),
            }
        }
    }
    Ok(())
}
