//! Quote command - compute a one-shot estimate.

use anyhow::{bail, Context, Result};
use seocalc_core::{
    find_service, format_usd, Calculator, QuoteExporter, RETAINER_LABEL, SERVICE_CATALOG,
};

use crate::QuoteArgs;

pub async fn run(args: QuoteArgs, json: bool) -> Result<()> {
    let mut calculator = Calculator::new();

    for spec in &args.services {
        let (id, quantity) = parse_service_spec(spec)?;
        if find_service(id).is_none() {
            bail!("Unknown service id {:?} (run `seocalc services` for the catalog)", id);
        }
        calculator.set_quantity(id, quantity);
    }

    calculator.set_duration(args.duration);
    calculator.set_competition(args.competition.parse()?);
    calculator.set_business_size(args.business_size.parse()?);
    calculator.set_geographies(args.geographies);
    calculator.set_retainer(args.retainer);

    let payload = calculator.export_payload();
    tracing::debug!(total = payload.total_cost, lines = payload.breakdown.len(), "computed quote");

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_quote(&calculator);
    }

    if let Some(dir) = args.export {
        let path = QuoteExporter::new(dir)
            .export(&payload)
            .await
            .context("Failed to write export file")?;
        println!("\nSaved results to {}", path.display());
    }

    Ok(())
}

fn print_quote(calculator: &Calculator) {
    let quote = calculator.quote();

    if quote.is_empty() {
        println!("Nothing selected. Add services with -s ID=QTY or enable --retainer.");
        return;
    }

    println!("{:<26} COST", "LINE ITEM");
    println!("{}", "-".repeat(40));

    // Catalog order first, the retainer line last.
    for service in &SERVICE_CATALOG {
        if let Some(cost) = quote.line(service.name) {
            println!("{:<26} {}", service.name, format_usd(cost));
        }
    }
    if let Some(cost) = quote.line(RETAINER_LABEL) {
        println!("{:<26} {}", RETAINER_LABEL, format_usd(cost));
    }

    println!("{}", "-".repeat(40));
    println!("{:<26} {}", "Total", format_usd(quote.total));
    println!(
        "{:<26} {}",
        "Monthly average",
        format_usd(quote.monthly_average(calculator.selection().project_duration))
    );
}

/// Parse an `ID=QTY` service spec. A bare `ID` means quantity 1.
fn parse_service_spec(spec: &str) -> Result<(&str, u32)> {
    match spec.split_once('=') {
        Some((id, qty)) => {
            let quantity = qty
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity {:?} for service {:?}", qty, id.trim()))?;
            Ok((id.trim(), quantity))
        }
        None => Ok((spec.trim(), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_spec() {
        assert_eq!(parse_service_spec("on-page-seo=2").unwrap(), ("on-page-seo", 2));
        assert_eq!(parse_service_spec(" link-building = 10 ").unwrap(), ("link-building", 10));
        assert_eq!(parse_service_spec("technical-seo").unwrap(), ("technical-seo", 1));
    }

    #[test]
    fn test_parse_service_spec_rejects_bad_quantity() {
        assert!(parse_service_spec("on-page-seo=lots").is_err());
        assert!(parse_service_spec("on-page-seo=-1").is_err());
    }
}
