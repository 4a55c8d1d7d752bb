//! Data types and associated functions and methods

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;
use validator::Validate;

/// A sale document in the `sales` collection.
///
/// Revenue is never stored; it is always derived as `quantity * price`.
/// Sales are created once and never updated or deleted, and every analytic
/// reads them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Sale {
    /// Identifier assigned by the record store on insert
    pub id: Uuid,
    /// Product identifier, not unique across sales
    pub product: String,
    /// Number of units sold
    pub quantity: u64,
    /// Unit price
    pub price: f64,
    /// Calendar day of the sale
    pub date: Date,
}

impl Sale {
    /// Revenue attributed to this sale.
    pub fn revenue(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Request payload for creating a sale.
///
/// All four fields are required. A missing or mistyped field is a
/// deserialisation rejection; field contents are validated afterwards.
#[derive(Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewSale {
    /// Product identifier
    #[validate(length(min = 1, message = "product must not be empty"))]
    pub product: String,
    /// Number of units sold
    pub quantity: u64,
    /// Unit price
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    /// Calendar day of the sale
    pub date: Date,
}

/// A row of the `department_salary` collection.
///
/// A department may appear in any number of rows; its total expense is the
/// sum over all of them. Rows are populated through the store API, never over
/// HTTP.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DepartmentSalaryRecord {
    /// Identifier assigned by the record store on insert
    pub id: Uuid,
    /// Department name, not necessarily unique
    pub department: String,
    /// Salary expense attributed to this row
    pub salary: f64,
}

/// Store-level insert payload for a department salary row.
#[derive(Debug, Deserialize, PartialEq)]
pub struct NewDepartmentSalary {
    /// Department name
    pub department: String,
    /// Salary expense attributed to this row
    pub salary: f64,
}

/// Total revenue summed over the whole `sales` collection.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTotal {
    /// Sum of `quantity * price` over all sales
    pub total_revenue: f64,
}

/// One output row of the literal quantity-by-product computation.
///
/// The grouping key pairs the row identity with the product, so every sale
/// forms its own group and `total_quantity` is that single sale's quantity.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleQuantity {
    /// Identity of the sale forming the group
    pub id: Uuid,
    /// Product sold
    pub product: String,
    /// Quantity summed within the group, i.e. the sale's own quantity
    pub total_quantity: u64,
}

/// One output row of the per-product quantity rollup.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuantity {
    /// Product sold
    pub product: String,
    /// Total quantity sold across all sales of the product
    pub total_quantity: u64,
}

/// One output row of the top-products ranking.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRevenue {
    /// Product sold
    pub product: String,
    /// Total revenue across all sales of the product
    pub total_revenue: f64,
}

/// Average unit price weighted by quantity, over the whole collection.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePrice {
    /// Total revenue divided by total quantity; zero when no units were sold
    pub average_price: f64,
}

/// Revenue summed into one calendar-month bucket.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// Month key in `YYYY-MM` form
    pub month: String,
    /// Total revenue of all sales dated within the month
    pub total_revenue: f64,
}

/// The sale reported for the date carrying the highest single-sale quantity.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct DailySalesPeak {
    /// Date on which the peak quantity was sold
    pub date: Date,
    /// Product of a sale matching the peak quantity on that date
    pub product: String,
    /// The peak quantity
    pub quantity: u64,
}

/// Total salary expense attributed to one department.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentExpense {
    /// Department name
    pub department: String,
    /// Sum of `salary` over all rows sharing the department name
    pub total_salary_expense: f64,
}

/// Uniform success envelope wrapping every result returned over HTTP.
///
/// Serialises as `{"status": "success", "data": <result>}`; the HTTP status
/// code rides along outside the body.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    /// HTTP status of the response
    #[serde(skip)]
    pub code: StatusCode,

    /// Always the literal `success`
    pub status: &'static str,

    /// The result payload
    pub data: T,
}

impl<T> Success<T> {
    /// Wrap a read result in a 200 envelope.
    pub fn ok(data: T) -> Self {
        Success {
            code: StatusCode::OK,
            status: "success",
            data,
        }
    }

    /// Wrap a newly created entity in a 201 envelope.
    pub fn created(data: T) -> Self {
        Success {
            code: StatusCode::CREATED,
            status: "success",
            data,
        }
    }
}
