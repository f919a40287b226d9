//! Services command - show the service catalog.

use anyhow::Result;
use seocalc_core::{ServiceCategory, SERVICE_CATALOG};

pub fn run(category: Option<String>, json: bool) -> Result<()> {
    let mut services: Vec<_> = SERVICE_CATALOG.iter().collect();

    if let Some(ref raw) = category {
        let category: ServiceCategory = raw.parse()?;
        services.retain(|s| s.category == category);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    if services.is_empty() {
        println!("No services in this category.");
        return Ok(());
    }

    // Table header
    println!(
        "{:<20} {:<22} {:<12} {:<14} DESCRIPTION",
        "ID", "NAME", "PRICE", "CATEGORY"
    );
    println!("{}", "-".repeat(110));

    for service in &services {
        println!(
            "{:<20} {:<22} {:<12} {:<14} {}",
            service.id,
            service.name,
            service.display_price(),
            service.category.display_name(),
            truncate(service.description, 48)
        );
    }

    println!("\nTotal: {} services", services.len());
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…", &s[..max - 1])
    }
}
