//! TUI application state.
//!
//! Thin wrapper around the core `Calculator` session: holds cursor and tab
//! position, the pending quantity edit buffer, and the status line. All
//! pricing state lives in the calculator itself.

use seocalc_core::{
    services_in_category, Calculator, QuoteExporter, Service, ServiceCategory, SERVICE_CATALOG,
};

/// Category tabs: `None` shows every service.
const TABS: [Option<ServiceCategory>; 6] = [
    None,
    Some(ServiceCategory::Optimization),
    Some(ServiceCategory::Content),
    Some(ServiceCategory::OffPage),
    Some(ServiceCategory::Local),
    Some(ServiceCategory::Analytics),
];

pub struct App {
    pub calculator: Calculator,
    /// Index into the visible (tab-filtered) service list.
    pub selected: usize,
    /// Active tab index (0 = All).
    tab: usize,
    /// Pending quantity input while editing, `None` otherwise.
    quantity_input: Option<String>,
    status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            selected: 0,
            tab: 0,
            quantity_input: None,
            status: None,
            should_quit: false,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn active_category(&self) -> Option<ServiceCategory> {
        TABS[self.tab]
    }

    /// Name of the active tab for the header.
    pub fn tab_name(&self) -> &'static str {
        match self.active_category() {
            None => "All",
            Some(category) => category.display_name(),
        }
    }

    /// Services visible under the active tab, in catalog order.
    pub fn visible_services(&self) -> Vec<&'static Service> {
        match self.active_category() {
            None => SERVICE_CATALOG.iter().collect(),
            Some(category) => services_in_category(category),
        }
    }

    pub fn selected_service(&self) -> Option<&'static Service> {
        self.visible_services().get(self.selected).copied()
    }

    pub fn next_row(&mut self) {
        let count = self.visible_services().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn previous_row(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % TABS.len();
        self.selected = 0;
    }

    pub fn previous_tab(&mut self) {
        self.tab = (self.tab + TABS.len() - 1) % TABS.len();
        self.selected = 0;
    }

    // =========================================================================
    // Quantity editing
    // =========================================================================

    pub fn adjust_quantity(&mut self, delta: i32) {
        if let Some(service) = self.selected_service() {
            self.calculator.adjust_quantity(service.id, delta);
        }
    }

    /// Start free-text quantity editing, seeded with the current value.
    pub fn begin_quantity_edit(&mut self) {
        if let Some(service) = self.selected_service() {
            let current = self.calculator.selection().quantity(service.id);
            self.quantity_input = Some(current.to_string());
        }
    }

    pub fn is_editing(&self) -> bool {
        self.quantity_input.is_some()
    }

    /// The pending input buffer, while editing.
    pub fn quantity_input(&self) -> Option<&str> {
        self.quantity_input.as_deref()
    }

    pub fn push_input(&mut self, c: char) {
        if let Some(buffer) = &mut self.quantity_input {
            if !c.is_control() {
                buffer.push(c);
            }
        }
    }

    pub fn pop_input(&mut self) {
        if let Some(buffer) = &mut self.quantity_input {
            buffer.pop();
        }
    }

    /// Commit the pending edit. Non-numeric input coerces to zero.
    pub fn commit_quantity_edit(&mut self) {
        if let Some(buffer) = self.quantity_input.take() {
            if let Some(service) = self.selected_service() {
                let quantity = buffer.trim().parse().unwrap_or(0);
                self.calculator.set_quantity(service.id, quantity);
            }
        }
    }

    pub fn cancel_quantity_edit(&mut self) {
        self.quantity_input = None;
    }

    // =========================================================================
    // Project settings
    // =========================================================================

    pub fn cycle_competition(&mut self) {
        self.calculator.cycle_competition();
    }

    pub fn cycle_business_size(&mut self) {
        self.calculator.cycle_business_size();
    }

    pub fn adjust_duration(&mut self, delta: i32) {
        self.calculator.adjust_duration(delta);
    }

    pub fn adjust_geographies(&mut self, delta: i32) {
        self.calculator.adjust_geographies(delta);
    }

    pub fn toggle_retainer(&mut self) {
        self.calculator.toggle_retainer();
    }

    pub fn reset(&mut self) {
        self.calculator.reset();
        self.status = Some("Calculator reset".to_string());
    }

    // =========================================================================
    // Export
    // =========================================================================

    pub async fn export(&mut self) {
        if self.calculator.quote().is_empty() {
            self.status = Some("Nothing to export yet".to_string());
            return;
        }

        let result = match QuoteExporter::current_dir() {
            Ok(exporter) => exporter.export(&self.calculator.export_payload()).await,
            Err(e) => Err(e),
        };

        self.status = Some(match result {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_filtering() {
        let mut app = App::new();
        assert_eq!(app.visible_services().len(), SERVICE_CATALOG.len());

        app.next_tab(); // Optimization
        assert_eq!(app.visible_services().len(), 2);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_row_navigation_clamps() {
        let mut app = App::new();
        app.previous_row();
        assert_eq!(app.selected, 0);

        for _ in 0..20 {
            app.next_row();
        }
        assert_eq!(app.selected, SERVICE_CATALOG.len() - 1);
    }

    #[test]
    fn test_quantity_edit_coerces_non_numeric_to_zero() {
        let mut app = App::new();
        app.calculator.set_quantity("on-page-seo", 5);

        app.begin_quantity_edit();
        assert_eq!(app.quantity_input(), Some("5"));

        app.push_input('x');
        app.commit_quantity_edit();
        assert_eq!(app.calculator.selection().quantity("on-page-seo"), 0);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_quantity_edit_commit_and_cancel() {
        let mut app = App::new();
        app.begin_quantity_edit();
        app.pop_input(); // clear the seeded "0"
        app.push_input('1');
        app.push_input('2');
        app.commit_quantity_edit();
        assert_eq!(app.calculator.selection().quantity("on-page-seo"), 12);

        app.begin_quantity_edit();
        app.push_input('9');
        app.cancel_quantity_edit();
        assert_eq!(app.calculator.selection().quantity("on-page-seo"), 12);
    }
}
