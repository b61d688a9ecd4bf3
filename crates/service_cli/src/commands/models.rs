//! Models command implementation
//!
//! Lists every pricing model with its formula and active table.

use ratecard_core::types::PricingModel;

use super::Session;

/// One line per model.
pub fn render(session: &Session) -> String {
    PricingModel::ALL
        .into_iter()
        .map(|model| {
            let tables = session.store.tables(model);
            let active = tables.active();
            format!(
                "{:<14} {:<58} [{}] {} table(s), {} route(s)",
                model.key(),
                model.formula(),
                active.name,
                tables.tables().len(),
                active.rows.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the models command
pub fn run(session: &Session) {
    println!("{}", render(session));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::session;

    #[test]
    fn test_lists_every_model() {
        let (_dir, mut session) = session();
        session
            .store
            .create_table(PricingModel::Excess, "Promo")
            .unwrap();

        let text = render(&session);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("fixed "));
        assert!(lines[0].contains("[Standard Table] 1 table(s), 1 route(s)"));
        assert!(lines[6].contains("[Promo] 2 table(s)"));
    }
}
