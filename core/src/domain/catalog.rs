//! Service catalog domain models.
//!
//! The catalog is a fixed table compiled into the binary: six SEO services
//! with their base unit prices and presentation metadata. It is loaded once
//! and never mutated at runtime.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// ServiceCategory
// ============================================================================

/// Category of an SEO service, used for grouping and tab filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// On-site optimization work (meta tags, technical audits).
    Optimization,
    /// Content production (articles, landing pages).
    Content,
    /// Off-site work (link building, outreach).
    OffPage,
    /// Local search presence (business profiles, citations).
    Local,
    /// Measurement and reporting.
    Analytics,
}

impl ServiceCategory {
    /// All available categories.
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Optimization,
        ServiceCategory::Content,
        ServiceCategory::OffPage,
        ServiceCategory::Local,
        ServiceCategory::Analytics,
    ];

    /// Stable identifier used in JSON and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ServiceCategory::Optimization => "optimization",
            ServiceCategory::Content => "content",
            ServiceCategory::OffPage => "off-page",
            ServiceCategory::Local => "local",
            ServiceCategory::Analytics => "analytics",
        }
    }

    /// Get the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Optimization => "Optimization",
            ServiceCategory::Content => "Content",
            ServiceCategory::OffPage => "Off-Page",
            ServiceCategory::Local => "Local",
            ServiceCategory::Analytics => "Analytics",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ServiceCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::Parse {
                input: s.to_string(),
                expected: "optimization, content, off-page, local, analytics",
            })
    }
}

// ============================================================================
// Service
// ============================================================================

/// A purchasable SEO service with its catalog pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique identifier (e.g. "on-page-seo").
    pub id: &'static str,
    /// Human-readable name, also used as the breakdown label.
    pub name: &'static str,
    /// Short description for listings.
    pub description: &'static str,
    /// Price per unit before any multiplier is applied.
    pub base_price: f64,
    /// Unit the base price applies to (e.g. "page", "link").
    pub unit: &'static str,
    /// Category used for grouping and filtering.
    pub category: ServiceCategory,
}

impl Service {
    /// Formatted unit price for display (e.g. "$500/page").
    pub fn display_price(&self) -> String {
        format!("${:.0}/{}", self.base_price, self.unit)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.display_price())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The fixed service catalog.
pub const SERVICE_CATALOG: [Service; 6] = [
    Service {
        id: "on-page-seo",
        name: "On-Page SEO",
        description: "Meta tags, content optimization, internal linking",
        base_price: 500.0,
        unit: "page",
        category: ServiceCategory::Optimization,
    },
    Service {
        id: "technical-seo",
        name: "Technical SEO",
        description: "Site speed, schema markup, crawl optimization",
        base_price: 800.0,
        unit: "audit",
        category: ServiceCategory::Optimization,
    },
    Service {
        id: "content-creation",
        name: "Content Creation",
        description: "Blog posts, articles, landing pages",
        base_price: 150.0,
        unit: "piece",
        category: ServiceCategory::Content,
    },
    Service {
        id: "link-building",
        name: "Link Building",
        description: "Backlink acquisition and outreach",
        base_price: 200.0,
        unit: "link",
        category: ServiceCategory::OffPage,
    },
    Service {
        id: "local-seo",
        name: "Local SEO",
        description: "Google Business Profile, local citations",
        base_price: 300.0,
        unit: "month",
        category: ServiceCategory::Local,
    },
    Service {
        id: "analytics-reporting",
        name: "Analytics & Reporting",
        description: "Performance tracking and monthly reports",
        base_price: 400.0,
        unit: "month",
        category: ServiceCategory::Analytics,
    },
];

/// Look up a catalog entry by its identifier.
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICE_CATALOG.iter().find(|s| s.id == id)
}

/// Catalog entries belonging to the given category, in catalog order.
pub fn services_in_category(category: ServiceCategory) -> Vec<&'static Service> {
    SERVICE_CATALOG
        .iter()
        .filter(|s| s.category == category)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = SERVICE_CATALOG.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICE_CATALOG.len());
    }

    #[test]
    fn test_find_service() {
        let service = find_service("on-page-seo").unwrap();
        assert_eq!(service.name, "On-Page SEO");
        assert_eq!(service.base_price, 500.0);

        assert!(find_service("does-not-exist").is_none());
    }

    #[test]
    fn test_services_in_category() {
        let optimization = services_in_category(ServiceCategory::Optimization);
        assert_eq!(optimization.len(), 2);

        let local = services_in_category(ServiceCategory::Local);
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].id, "local-seo");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "off-page".parse::<ServiceCategory>().unwrap(),
            ServiceCategory::OffPage
        );
        assert!("nonsense".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_service_serialization_keys() {
        let json = serde_json::to_value(SERVICE_CATALOG[0]).unwrap();
        assert_eq!(json["basePrice"], 500.0);
        assert_eq!(json["category"], "optimization");
    }

    #[test]
    fn test_display_price() {
        assert_eq!(find_service("link-building").unwrap().display_price(), "$200/link");
    }
}
