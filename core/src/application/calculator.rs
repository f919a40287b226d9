//! Calculator session service.
//!
//! Owns the mutable selection for one interactive session and keeps the
//! derived quote in sync: every mutation recomputes the quote, so readers
//! always observe a total/breakdown pair consistent with the current
//! inputs. Front ends (TUI, one-shot CLI) only go through this service.
//!
//! Out-of-range values are clamped here, at the input boundary; the pricing
//! engine itself assumes bounded input.

use std::ops::RangeInclusive;

use crate::domain::{
    BusinessSize, CalculatorSelection, CompetitionLevel, Service, DURATION_RANGE, GEOGRAPHY_RANGE,
    SERVICE_CATALOG,
};
use crate::export::ExportPayload;
use crate::pricing::{compute_quote, Quote};

/// Stateful calculator for one session.
pub struct Calculator {
    catalog: &'static [Service],
    selection: CalculatorSelection,
    quote: Quote,
}

impl Calculator {
    /// Create a calculator over the built-in catalog with default inputs.
    pub fn new() -> Self {
        Self::with_catalog(&SERVICE_CATALOG)
    }

    /// Create a calculator over a custom catalog (for testing).
    pub fn with_catalog(catalog: &'static [Service]) -> Self {
        let selection = CalculatorSelection::default();
        let quote = compute_quote(&selection, catalog);
        Self {
            catalog,
            selection,
            quote,
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &CalculatorSelection {
        &self.selection
    }

    /// The quote derived from the current selection.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// The catalog this calculator prices against.
    pub fn catalog(&self) -> &'static [Service] {
        self.catalog
    }

    fn recompute(&mut self) {
        self.quote = compute_quote(&self.selection, self.catalog);
        tracing::debug!(
            total = self.quote.total,
            lines = self.quote.breakdown.len(),
            "quote recomputed"
        );
    }

    /// Set the quantity for a service id.
    ///
    /// Quantities arrive already coerced to a non-negative integer by the
    /// input layer (free-text entry parses with a zero fallback).
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        self.selection.set_quantity(id, quantity);
        self.recompute();
    }

    /// Adjust a service quantity by a signed step, flooring at zero.
    pub fn adjust_quantity(&mut self, id: &str, delta: i32) {
        let next = self.selection.quantity(id).saturating_add_signed(delta);
        self.set_quantity(id, next);
    }

    /// Set the project duration, clamped to 3-24 months.
    pub fn set_duration(&mut self, months: u32) {
        self.selection.project_duration = clamp_to(months, DURATION_RANGE);
        self.recompute();
    }

    /// Adjust the project duration by a signed step.
    pub fn adjust_duration(&mut self, delta: i32) {
        self.set_duration(self.selection.project_duration.saturating_add_signed(delta));
    }

    /// Set the competition level.
    pub fn set_competition(&mut self, level: CompetitionLevel) {
        self.selection.competition_level = level;
        self.recompute();
    }

    /// Cycle to the next competition level.
    pub fn cycle_competition(&mut self) {
        self.set_competition(self.selection.competition_level.next());
    }

    /// Set the business size.
    pub fn set_business_size(&mut self, size: BusinessSize) {
        self.selection.business_size = size;
        self.recompute();
    }

    /// Cycle to the next business size.
    pub fn cycle_business_size(&mut self) {
        self.set_business_size(self.selection.business_size.next());
    }

    /// Set the target geography count, clamped to 1-10.
    pub fn set_geographies(&mut self, count: u32) {
        self.selection.target_geographies = clamp_to(count, GEOGRAPHY_RANGE);
        self.recompute();
    }

    /// Adjust the geography count by a signed step.
    pub fn adjust_geographies(&mut self, delta: i32) {
        self.set_geographies(
            self.selection
                .target_geographies
                .saturating_add_signed(delta),
        );
    }

    /// Enable or disable the monthly retainer.
    pub fn set_retainer(&mut self, enabled: bool) {
        self.selection.monthly_retainer = enabled;
        self.recompute();
    }

    /// Toggle the monthly retainer.
    pub fn toggle_retainer(&mut self) {
        self.set_retainer(!self.selection.monthly_retainer);
    }

    /// Restore the default selection.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.recompute();
    }

    /// Snapshot the current state as an export payload.
    pub fn export_payload(&self) -> ExportPayload {
        ExportPayload::new(&self.quote, &self.selection)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_to(value: u32, range: RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_tracks_mutations() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.quote().total, 0.0);

        calculator.set_quantity("on-page-seo", 2);
        assert_eq!(calculator.quote().total, 1300.0);

        calculator.set_quantity("on-page-seo", 0);
        assert_eq!(calculator.quote().total, 0.0);
        assert!(calculator.quote().is_empty());
    }

    #[test]
    fn test_adjust_quantity_floors_at_zero() {
        let mut calculator = Calculator::new();
        calculator.adjust_quantity("link-building", -3);
        assert_eq!(calculator.selection().quantity("link-building"), 0);

        calculator.adjust_quantity("link-building", 2);
        calculator.adjust_quantity("link-building", -1);
        assert_eq!(calculator.selection().quantity("link-building"), 1);
    }

    #[test]
    fn test_duration_clamped() {
        let mut calculator = Calculator::new();
        calculator.set_duration(99);
        assert_eq!(calculator.selection().project_duration, 24);

        calculator.set_duration(1);
        assert_eq!(calculator.selection().project_duration, 3);

        calculator.adjust_duration(-10);
        assert_eq!(calculator.selection().project_duration, 3);
    }

    #[test]
    fn test_geographies_clamped() {
        let mut calculator = Calculator::new();
        calculator.set_geographies(0);
        assert_eq!(calculator.selection().target_geographies, 1);

        calculator.adjust_geographies(100);
        assert_eq!(calculator.selection().target_geographies, 10);
    }

    #[test]
    fn test_cycles_and_toggles() {
        let mut calculator = Calculator::new();
        calculator.cycle_competition();
        assert_eq!(
            calculator.selection().competition_level,
            CompetitionLevel::High
        );

        calculator.cycle_business_size();
        assert_eq!(calculator.selection().business_size, BusinessSize::Medium);

        calculator.toggle_retainer();
        assert!(calculator.selection().monthly_retainer);
        assert!(calculator.quote().line("Monthly Retainer").is_some());
    }

    #[test]
    fn test_reset_restores_defaults_and_zero_total() {
        let mut calculator = Calculator::new();
        calculator.set_quantity("technical-seo", 4);
        calculator.set_duration(18);
        calculator.set_geographies(7);
        calculator.toggle_retainer();

        calculator.reset();
        assert_eq!(*calculator.selection(), CalculatorSelection::default());
        assert_eq!(calculator.quote().total, 0.0);
    }

    #[test]
    fn test_export_payload_reflects_state() {
        let mut calculator = Calculator::new();
        calculator.set_quantity("content-creation", 5);

        let payload = calculator.export_payload();
        assert_eq!(payload.total_cost, calculator.quote().total);
        assert_eq!(payload.settings, *calculator.selection());
    }
}
