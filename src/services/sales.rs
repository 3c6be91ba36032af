use crate::domain::sales::{SalesSummary, SalespersonSales};
use crate::repository::SalesReader;
use crate::services::{ServiceError, ServiceResult};

/// Aggregates fulfilled-order revenue and top products across the store.
pub fn sales_summary<R>(repo: &R) -> ServiceResult<SalesSummary>
where
    R: SalesReader + ?Sized,
{
    repo.sales_summary().map_err(ServiceError::from)
}

/// Per-salesperson fulfilled-order totals, including salespersons with no
/// orders at all.
pub fn sales_by_salesperson<R>(repo: &R) -> ServiceResult<Vec<SalespersonSales>>
where
    R: SalesReader + ?Sized,
{
    repo.sales_by_salesperson().map_err(ServiceError::from)
}
