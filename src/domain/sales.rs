use serde::{Deserialize, Serialize};

/// Dashboard rollup over the whole order book. Recomputed from scratch on
/// every request; only `Fulfilled` orders contribute to revenue figures.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SalesSummary {
    /// Order count across all statuses.
    pub total_orders: i64,
    /// Σ quantity × unit_price over fulfilled orders.
    pub total_revenue: f64,
    /// Σ quantity over fulfilled orders.
    pub total_items_sold: i64,
    /// Distinct customers across all orders.
    pub unique_customers: i64,
    /// Up to five best-selling products by fulfilled quantity.
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopProduct {
    pub name: String,
    pub quantity_sold: i64,
}

/// Per-salesperson rollup over fulfilled orders. Salespersons without any
/// fulfilled order still appear, with zeros.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SalespersonSales {
    pub salesperson_name: String,
    pub total_orders: i64,
    pub total_customers: i64,
    pub total_sales: f64,
    /// `total_sales / total_orders`, guarded to 0 when there are no orders.
    pub avg_sales_per_order: f64,
}
