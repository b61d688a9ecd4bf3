//! Limits command implementation
//!
//! Shows and edits the bracket limits shared by every model.

use clap::Subcommand;
use tracing::info;

use super::Session;
use crate::Result;

/// `ratecard limits` actions
#[derive(Debug, Clone, Subcommand)]
pub enum LimitsAction {
    /// Print every bracket with its weight range
    Show,

    /// Append a bracket 50kg above the last one
    Add,

    /// Change one limit
    Set {
        /// Bracket index (0-based)
        index: usize,

        /// New upper limit (kg)
        value: f64,
    },
}

impl LimitsAction {
    /// Returns true if the action edits the store.
    pub fn mutates(&self) -> bool {
        !matches!(self, LimitsAction::Show)
    }
}

/// One line per bracket: index, upper limit and range label.
pub fn render(session: &Session) -> String {
    let limits = session.store.limits();
    if limits.is_empty() {
        return "No brackets configured".to_string();
    }
    (0..limits.len())
        .filter_map(|i| Some(format!("{:>3}  {}", i, limits.label(i)?)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the limits command
pub fn run(session: &mut Session, action: LimitsAction) -> Result<()> {
    match action {
        LimitsAction::Show => println!("{}", render(session)),
        LimitsAction::Add => {
            let limit = session.store.add_bracket();
            info!(limit, "Bracket added");
            println!("Added bracket up to {}kg", limit);
        }
        LimitsAction::Set { index, value } => {
            session.store.set_limit(index, value)?;
            println!("Bracket {} now ends at {}kg", index, value);
        }
    }
    Ok(())
}
