//! Example: Price a sample SEO project and print the breakdown.

use seocalc_core::{format_usd, BusinessSize, Calculator, CompetitionLevel, RETAINER_LABEL, SERVICE_CATALOG};

fn main() {
    let mut calculator = Calculator::new();
    calculator.set_quantity("on-page-seo", 4);
    calculator.set_quantity("content-creation", 8);
    calculator.set_quantity("analytics-reporting", 1);
    calculator.set_competition(CompetitionLevel::High);
    calculator.set_business_size(BusinessSize::Medium);
    calculator.set_duration(12);
    calculator.set_geographies(2);
    calculator.set_retainer(true);

    let quote = calculator.quote();

    println!("{:<26} {}", "LINE ITEM", "COST");
    println!("{}", "-".repeat(40));

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
