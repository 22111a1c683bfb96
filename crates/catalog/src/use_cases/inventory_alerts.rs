use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmacy_core::ProductId;
use pharmacy_core::time::days_until;
use pharmacy_products::Product;

use crate::error::{CatalogError, CatalogResult};
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Critical once stock has fallen to half the minimum or below.
    pub fn for_stock(stock: i64, min_stock: i64) -> Self {
        if stock.saturating_mul(2) <= min_stock {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: ProductId,
    pub name: String,
    pub stock: i64,
    pub min_stock: i64,
    pub category: String,
    pub severity: AlertSeverity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryAlert {
    pub product_id: ProductId,
    pub name: String,
    pub expiry_date: DateTime<Utc>,
    pub days_left: i64,
    pub expired: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlerts {
    pub low_stock: Vec<StockAlert>,
    pub expiring: Vec<ExpiryAlert>,
}

impl InventoryAlerts {
    pub fn is_empty(&self) -> bool {
        self.low_stock.is_empty() && self.expiring.is_empty()
    }
}

/// Collects restock and expiry warnings for the dashboard.
pub struct InventoryAlertsUseCase {
    products: Arc<dyn ProductRepository>,
    expiry_horizon_days: i64,
}

impl InventoryAlertsUseCase {
    pub fn new(products: Arc<dyn ProductRepository>, expiry_horizon_days: i64) -> Self {
        Self {
            products,
            expiry_horizon_days,
        }
    }

    pub async fn execute(&self) -> CatalogResult<InventoryAlerts> {
        let low_stock = self
            .products
            .find_low_stock()
            .await
            .map_err(|e| CatalogError::persistence("load low-stock products", e))?;
        let expiring = self
            .products
            .find_expiring_soon(self.expiry_horizon_days)
            .await
            .map_err(|e| CatalogError::persistence("load expiring products", e))?;

        let alerts = build_alerts(&low_stock, &expiring, Utc::now());
        if !alerts.is_empty() {
            tracing::info!(
                low_stock = alerts.low_stock.len(),
                expiring = alerts.expiring.len(),
                "inventory alerts raised"
            );
        }
        Ok(alerts)
    }
}

/// Critical stock alerts first, then lowest stock; expiries soonest first.
fn build_alerts(low_stock: &[Product], expiring: &[Product], now: DateTime<Utc>) -> InventoryAlerts {
    let mut stock_alerts: Vec<StockAlert> = low_stock
        .iter()
        .map(|p| StockAlert {
            product_id: p.id_typed(),
            name: p.name().to_string(),
            stock: p.stock(),
            min_stock: p.min_stock(),
            category: p.category().name().to_string(),
            severity: AlertSeverity::for_stock(p.stock(), p.min_stock()),
        })
        .collect();
    stock_alerts.sort_by_key(|a| (Reverse(a.severity), a.stock));

    let mut expiry_alerts: Vec<ExpiryAlert> = expiring
        .iter()
        .filter_map(|p| {
            let expiry_date = p.expiry_date()?;
            Some(ExpiryAlert {
                product_id: p.id_typed(),
                name: p.name().to_string(),
                expiry_date,
                days_left: days_until(expiry_date, now),
                expired: p.is_expired_at(now),
            })
        })
        .collect();
    expiry_alerts.sort_by_key(|a| a.expiry_date);

    InventoryAlerts {
        low_stock: stock_alerts,
        expiring: expiry_alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockProductRepository, RepositoryError};
    use crate::use_cases::fixtures;
    use chrono::Duration;

    #[test]
    fn severity_boundary_is_half_the_minimum() {
        assert_eq!(AlertSeverity::for_stock(5, 10), AlertSeverity::Critical);
        assert_eq!(AlertSeverity::for_stock(6, 10), AlertSeverity::Warning);
        // 3 units against a minimum of 5: 3 > 2.5
        assert_eq!(AlertSeverity::for_stock(3, 5), AlertSeverity::Warning);
        assert_eq!(AlertSeverity::for_stock(0, 0), AlertSeverity::Critical);
    }

    #[test]
    fn stock_alerts_order_critical_first_then_by_stock() {
        let low = vec![
            fixtures::product("Paracetamol 500mg", 15, 20),
            fixtures::product("Amoxicilina 250mg", 7, 15),
            fixtures::product("Loratadina 10mg", 5, 10),
            fixtures::product("Omeprazol 20mg", 12, 25),
        ];

        let alerts = build_alerts(&low, &[], Utc::now());
        let names: Vec<&str> = alerts.low_stock.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Loratadina 10mg",
                "Amoxicilina 250mg",
                "Omeprazol 20mg",
                "Paracetamol 500mg"
            ]
        );
        assert_eq!(alerts.low_stock[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts.low_stock[3].severity, AlertSeverity::Warning);
        assert_eq!(alerts.low_stock[0].category, "Analgesics");
    }

    #[test]
    fn expiry_alerts_report_days_left_and_expired_flag() {
        let now = Utc::now();
        let expiring = vec![
            fixtures::expiring_product("Jarabe", now + Duration::days(20) + Duration::hours(1)),
            fixtures::expiring_product("Colirio", now - Duration::days(2)),
            fixtures::expiring_product("Vacuna", now + Duration::days(3) + Duration::hours(1)),
        ];

        let alerts = build_alerts(&[], &expiring, now);
        let rows: Vec<(&str, i64, bool)> = alerts
            .expiring
            .iter()
            .map(|a| (a.name.as_str(), a.days_left, a.expired))
            .collect();
        assert_eq!(
            rows,
            vec![("Colirio", -2, true), ("Vacuna", 3, false), ("Jarabe", 20, false)]
        );
    }

    #[tokio::test]
    async fn execute_queries_with_configured_horizon() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_low_stock()
            .times(1)
            .returning(|| Ok(vec![fixtures::product("Insulina Lantus", 3, 5)]));
        repo.expect_find_expiring_soon()
            .withf(|days| *days == 45)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let alerts = InventoryAlertsUseCase::new(Arc::new(repo), 45)
            .execute()
            .await
            .unwrap();
        assert_eq!(alerts.low_stock.len(), 1);
        assert!(alerts.expiring.is_empty());
        assert!(!alerts.is_empty());
    }

    #[tokio::test]
    async fn execute_wraps_repository_failures() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_low_stock()
            .returning(|| Err(RepositoryError::Storage("timeout".to_string())));
        repo.expect_find_expiring_soon().never();

        let err = InventoryAlertsUseCase::new(Arc::new(repo), 30)
            .execute()
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::Persistence("failed to load low-stock products".to_string())
        );
    }
}
