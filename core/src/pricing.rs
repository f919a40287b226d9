//! The pricing engine.
//!
//! A single pure function maps the current selection and the static catalog
//! to a total cost with a per-line breakdown. The multiplier tables and the
//! recurring-service exemption are fixed product rules carried over
//! literally from the original price sheet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CalculatorSelection, Service};

/// Base monthly fee for the ongoing-management retainer, before multipliers.
pub const RETAINER_BASE_MONTHLY: f64 = 2000.0;

/// Breakdown label for the retainer line.
pub const RETAINER_LABEL: &str = "Monthly Retainer";

/// Surcharge per additional target geography (20% each, uncapped).
const GEOGRAPHY_SURCHARGE_STEP: f64 = 0.2;

/// Duration at which one-time services are priced at face value.
const DURATION_BASELINE_MONTHS: f64 = 6.0;

/// Cap on the duration scaling factor, reached at 12 months.
const DURATION_FACTOR_CAP: f64 = 2.0;

/// Services billed per month and therefore exempt from duration scaling.
const RECURRING_SERVICE_IDS: [&str; 2] = ["local-seo", "analytics-reporting"];

/// Whether a service is billed monthly rather than as one-time work.
pub fn is_recurring(service_id: &str) -> bool {
    RECURRING_SERVICE_IDS.contains(&service_id)
}

// ============================================================================
// Quote
// ============================================================================

/// A computed cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Quote {
    /// Total cost; always the exact sum of the breakdown values.
    pub total: f64,
    /// Cost per line, keyed by display label.
    pub breakdown: BTreeMap<String, f64>,
}

impl Quote {
    /// Whether the quote has no line items.
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }

    /// Cost recorded for a breakdown label, if present.
    pub fn line(&self, label: &str) -> Option<f64> {
        self.breakdown.get(label).copied()
    }

    /// Average monthly spend over the given project duration.
    pub fn monthly_average(&self, months: u32) -> f64 {
        if months == 0 {
            0.0
        } else {
            self.total / months as f64
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Compute a quote for the given selection against a catalog.
///
/// Pure and infallible. Services with quantity zero (or absent from the
/// selection) contribute nothing and never appear in the breakdown. Inputs
/// are assumed pre-bounded by the calling UI; the engine does not clamp.
///
/// Per selected service: base price x quantity, then the competition,
/// business-size and geography multipliers, then - for one-time services
/// only - a duration factor of min(duration / 6, 2). The retainer, when
/// enabled, adds a single line of 2000 x competition x business-size
/// multipliers per month of the project.
pub fn compute_quote(selection: &CalculatorSelection, catalog: &[Service]) -> Quote {
    let competition = selection.competition_level.multiplier();
    let business = selection.business_size.multiplier();
    let geography =
        1.0 + selection.target_geographies.saturating_sub(1) as f64 * GEOGRAPHY_SURCHARGE_STEP;
    let duration_factor =
        (selection.project_duration as f64 / DURATION_BASELINE_MONTHS).min(DURATION_FACTOR_CAP);

    let mut breakdown = BTreeMap::new();

    for service in catalog {
        let quantity = selection.quantity(service.id);
        if quantity == 0 {
            continue;
        }

        let mut line = service.base_price * quantity as f64;
        line *= competition;
        line *= business;
        line *= geography;
        // Recurring services are already priced per month.
        if !is_recurring(service.id) {
            line *= duration_factor;
        }

        // Duplicate labels overwrite; harmless since catalog ids are unique.
        breakdown.insert(service.name.to_string(), line);
    }

    if selection.monthly_retainer {
        let monthly = RETAINER_BASE_MONTHLY * competition * business;
        breakdown.insert(
            RETAINER_LABEL.to_string(),
            monthly * selection.project_duration as f64,
        );
    }

    // Summing the recorded values keeps the total/breakdown invariant exact.
    let total = breakdown.values().sum();
    Quote { total, breakdown }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessSize, CompetitionLevel, SERVICE_CATALOG};

    fn quote(selection: &CalculatorSelection) -> Quote {
        compute_quote(selection, &SERVICE_CATALOG)
    }

    #[test]
    fn test_empty_selection() {
        let q = quote(&CalculatorSelection::new());
        assert!(q.is_empty());
        assert_eq!(q.total, 0.0);
    }

    #[test]
    fn test_zero_quantity_excluded() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 0);
        selection.set_quantity("link-building", 5);

        let q = quote(&selection);
        assert!(q.line("On-Page SEO").is_none());
        assert!(q.line("Link Building").is_some());
        assert_eq!(q.breakdown.len(), 1);
    }

    #[test]
    fn test_worked_example_on_page_seo() {
        // 500 x 2 x 1.3 (medium) x 1.0 (small) x 1.0 (1 geo) x min(6/6, 2)
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 2);

        let q = quote(&selection);
        assert_eq!(q.line("On-Page SEO"), Some(1300.0));
        assert_eq!(q.total, 1300.0);
    }

    #[test]
    fn test_worked_example_retainer() {
        // 2000 x 1.6 (high) x 2.0 (enterprise) = 6400/month, over 12 months
        let mut selection = CalculatorSelection::new();
        selection.monthly_retainer = true;
        selection.competition_level = CompetitionLevel::High;
        selection.business_size = BusinessSize::Enterprise;
        selection.project_duration = 12;

        let q = quote(&selection);
        assert_eq!(q.line(RETAINER_LABEL), Some(76800.0));
        assert_eq!(q.total, 76800.0);
    }

    #[test]
    fn test_total_is_sum_of_breakdown() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 3);
        selection.set_quantity("technical-seo", 1);
        selection.set_quantity("content-creation", 7);
        selection.set_quantity("local-seo", 2);
        selection.monthly_retainer = true;
        selection.competition_level = CompetitionLevel::High;
        selection.business_size = BusinessSize::Medium;
        selection.target_geographies = 4;
        selection.project_duration = 9;

        let q = quote(&selection);
        let sum: f64 = q.breakdown.values().sum();
        assert_eq!(q.total, sum);
    }

    #[test]
    fn test_geography_surcharge_linear() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("technical-seo", 1);

        let base = quote(&selection).total;
        selection.target_geographies = 3; // 1 + 2 * 0.2 = 1.4
        assert_eq!(quote(&selection).total, base * 1.4);

        selection.target_geographies = 10; // no cap: 1 + 9 * 0.2 = 2.8
        assert_eq!(quote(&selection).total, base * 2.8);
    }

    #[test]
    fn test_duration_cap_for_one_time_services() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 2);

        selection.project_duration = 6;
        let at_6 = quote(&selection).total;

        selection.project_duration = 12;
        let at_12 = quote(&selection).total;

        selection.project_duration = 24;
        let at_24 = quote(&selection).total;

        // Cap reached at 12 months; 6 months is exactly half.
        assert_eq!(at_12, at_24);
        assert_eq!(at_6 * 2.0, at_12);
    }

    #[test]
    fn test_recurring_services_ignore_duration() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("local-seo", 1);
        selection.set_quantity("analytics-reporting", 2);

        selection.project_duration = 3;
        let short = quote(&selection);

        selection.project_duration = 24;
        let long = quote(&selection);

        assert_eq!(short.line("Local SEO"), long.line("Local SEO"));
        assert_eq!(
            short.line("Analytics & Reporting"),
            long.line("Analytics & Reporting")
        );
    }

    #[test]
    fn test_recurring_services_still_multiplied() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("local-seo", 1);

        let base = quote(&selection).total;
        selection.business_size = BusinessSize::Enterprise;
        assert_eq!(quote(&selection).total, base * 2.0);
    }

    #[test]
    fn test_monotonic_in_multipliers() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 2);
        selection.set_quantity("local-seo", 1);
        selection.monthly_retainer = true;

        let base = quote(&selection).total;

        for level in CompetitionLevel::ALL {
            let mut s = selection.clone();
            s.competition_level = level;
            if level.multiplier() >= CompetitionLevel::Medium.multiplier() {
                assert!(quote(&s).total >= base);
            }
        }

        let mut bigger = selection.clone();
        bigger.business_size = BusinessSize::Enterprise;
        assert!(quote(&bigger).total >= base);

        let mut wider = selection.clone();
        wider.target_geographies = 2;
        assert!(quote(&wider).total >= base);
    }

    #[test]
    fn test_retainer_scales_with_duration_unbounded() {
        let mut selection = CalculatorSelection::new();
        selection.monthly_retainer = true;

        selection.project_duration = 12;
        let at_12 = quote(&selection).total;

        // No duration cap on the retainer; it is a per-month fee.
        selection.project_duration = 24;
        assert_eq!(quote(&selection).total, at_12 * 2.0);
    }

    #[test]
    fn test_is_recurring() {
        assert!(is_recurring("local-seo"));
        assert!(is_recurring("analytics-reporting"));
        assert!(!is_recurring("on-page-seo"));
    }

    #[test]
    fn test_monthly_average() {
        let mut selection = CalculatorSelection::new();
        selection.set_quantity("on-page-seo", 2);

        let q = quote(&selection);
        assert_eq!(q.monthly_average(6), q.total / 6.0);
        assert_eq!(Quote::default().monthly_average(0), 0.0);
    }
}
