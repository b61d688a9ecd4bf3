//! Quote command implementation
//!
//! Prices a shipment against the active table of a model.

use clap::{Args, ValueEnum};
use ratecard_core::math::{ChargeBasis, Dimensions};
use ratecard_core::types::PricingModel;
use ratecard_pricing::quote::{quote, Quote, QuoteRequest, RateSheet};
use serde::Serialize;
use tracing::{debug, info};

use super::Session;
use crate::{CliError, Result};

/// Output format for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments of `ratecard quote`
#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Pricing model (fixed, flat, minFixed, cumulative, minCumulative, minExcess, excess)
    #[arg(short, long, default_value = "fixed")]
    pub model: PricingModel,

    /// Origin
    #[arg(short, long)]
    pub origin: String,

    /// Destination
    #[arg(short, long = "dest")]
    pub destination: String,

    /// Actual weight (kg)
    #[arg(short, long, default_value_t = 0.0)]
    pub weight: f64,

    /// Length (cm)
    #[arg(long, default_value_t = 0.0)]
    pub length: f64,

    /// Width (cm)
    #[arg(long, default_value_t = 0.0)]
    pub width: f64,

    /// Height (cm)
    #[arg(long, default_value_t = 0.0)]
    pub height: f64,

    /// Volumetric divisor (defaults to the configured divisor)
    #[arg(long)]
    pub divisor: Option<f64>,

    /// Weight to bill on (actual, volumetric)
    #[arg(short, long, default_value = "actual")]
    pub basis: ChargeBasis,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A priced quote with its presentation fields.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteOutput {
    pub table: String,
    pub origin: String,
    pub destination: String,
    pub currency: &'static str,
    pub formatted: String,
    pub description: String,
    #[serde(flatten)]
    pub quote: Quote,
}

impl QuoteOutput {
    /// Human-readable lines.
    pub fn render_text(&self) -> String {
        let weights = &self.quote.weights;
        format!(
            "{}\n{}\nVol. Wt.: {}kg | CBM: {:.4} | Table: {}",
            self.formatted, self.description, weights.volumetric, weights.cbm, self.table
        )
    }
}

/// Build the pricing request from command arguments.
pub fn request(session: &Session, args: &QuoteArgs) -> Result<QuoteRequest> {
    let divisor = args.divisor.unwrap_or(session.config.volume_divisor);
    if !(divisor.is_finite() && divisor > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "Volume divisor must be positive, got {}",
            divisor
        )));
    }

    Ok(QuoteRequest::new(
        args.model,
        args.origin.trim(),
        args.destination.trim(),
        args.weight,
    )
    .with_dimensions(Dimensions::new(args.length, args.width, args.height))
    .with_divisor(divisor)
    .with_basis(args.basis))
}

/// Price the request against the model's active table.
pub fn price(session: &Session, args: &QuoteArgs) -> Result<QuoteOutput> {
    let request = request(session, args)?;
    let table = session.store.active_table(request.model);
    let sheet = RateSheet {
        name: &table.name,
        limits: session.store.limits(),
        routes: &table.rows,
    };
    debug!(
        model = %request.model,
        table = %table.name,
        origin = %request.origin,
        destination = %request.destination,
        "Pricing quote"
    );

    let quote = quote(&request, &sheet)?;
    let currency = session.currency();
    Ok(QuoteOutput {
        table: table.name.clone(),
        origin: request.origin,
        destination: request.destination,
        currency: currency.code(),
        formatted: currency.format_amount(quote.price),
        description: quote.description(),
        quote,
    })
}

/// Run the quote command
pub fn run(session: &Session, args: &QuoteArgs) -> Result<()> {
    let output = price(session, args)?;
    info!(price = output.quote.price, model = %output.quote.model, "Quote priced");

    match args.format {
        OutputFormat::Text => println!("{}", output.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::session;
    use ratecard_pricing::QuoteError;

    fn args(model: PricingModel, weight: f64) -> QuoteArgs {
        QuoteArgs {
            model,
            origin: "MNL".to_string(),
            destination: "CEB".to_string(),
            weight,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            divisor: None,
            basis: ChargeBasis::Actual,
            format: OutputFormat::Text,
        }
    }

    fn seeded(model: PricingModel, rates: &[&str]) -> (tempfile::TempDir, Session) {
        let (dir, mut session) = session();
        session.store.set_route(model, 0, "MNL", "CEB").unwrap();
        for (column, rate) in rates.iter().enumerate() {
            session.store.set_rate(model, 0, column, rate).unwrap();
        }
        (dir, session)
    }

    #[test]
    fn test_quote_fixed_text() {
        let (_dir, session) = seeded(PricingModel::Fixed, &["10", "8", "7", "5"]);
        let output = price(&session, &args(PricingModel::Fixed, 60.0)).unwrap();

        assert_eq!(output.quote.price, 480.0);
        assert_eq!(output.formatted, "Php 480.00");
        assert_eq!(
            output.description,
            "fixed | Act. Wt. (60kg) | [Bracket: 51-100kg]"
        );
        assert!(output.render_text().starts_with("Php 480.00\n"));
    }

    #[test]
    fn test_quote_volumetric_basis() {
        let (_dir, session) = seeded(PricingModel::Flat, &["100", "200", "300", "400"]);
        let mut args = args(PricingModel::Flat, 5.0);
        args.length = 100.0;
        args.width = 60.0;
        args.height = 60.0;
        args.basis = ChargeBasis::Volumetric;

        let output = price(&session, &args).unwrap();
        assert_eq!(output.quote.weights.volumetric, 60.0);
        assert_eq!(output.quote.price, 200.0);
        assert!(output.description.contains("Vol. Wt. (60kg)"));
    }

    #[test]
    fn test_quote_errors_carry_headlines() {
        let (_dir, session) = seeded(PricingModel::Fixed, &["10", "", "7", "5"]);

        let err = price(&session, &args(PricingModel::Fixed, 75.0)).unwrap_err();
        assert!(matches!(err, CliError::Quote(QuoteError::MissingRate { bracket: 1 })));
        assert!(err.to_string().starts_with("Invalid Rate: "));

        let err = price(&session, &args(PricingModel::Fixed, 900.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Over Limit: Weight (900kg) exceeds 500kg limit"
        );

        let mut other = args(PricingModel::Fixed, 10.0);
        other.destination = "DVO".to_string();
        let err = price(&session, &other).unwrap_err();
        assert!(err.to_string().starts_with("Route Not Found: "));

        let err = price(&session, &args(PricingModel::Fixed, 0.0)).unwrap_err();
        assert!(matches!(err, CliError::Quote(QuoteError::NonPositiveWeight { .. })));
    }

    #[test]
    fn test_quote_rejects_bad_divisor() {
        let (_dir, session) = seeded(PricingModel::Fixed, &["10"]);
        let mut args = args(PricingModel::Fixed, 10.0);
        args.divisor = Some(0.0);
        assert!(matches!(
            price(&session, &args),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_quote_json_shape() {
        let (_dir, session) = seeded(PricingModel::MinExcess, &["300", "12"]);
        let output = price(&session, &args(PricingModel::MinExcess, 70.0)).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["price"], 540.0);
        assert_eq!(json["model"], "minExcess");
        assert_eq!(json["currency"], "PHP");
        assert_eq!(json["table"], "Standard Table");
        assert_eq!(json["weights"]["basis"], "actual");
    }
}
