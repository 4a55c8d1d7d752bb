//! Application router and request handlers.
//!
//! Each route maps onto one entry of the [analytics](crate::analytics)
//! catalog; handlers do no computation of their own beyond wrapping the
//! result in the response envelope.

use crate::analytics;
use crate::app_state::SharedAppState;
use crate::error::AnalyticsError;
use crate::metrics;
use crate::models;
use crate::validated_json::ValidatedJson;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

impl<T: Serialize> IntoResponse for models::Success<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

/// Build the application router over the shared state.
pub fn router(state: SharedAppState) -> Router {
    Router::new()
        .route("/sales/get-all", get(get_all_sales))
        .route("/sales/add", post(add_sale))
        .route("/sales/total-revenue", get(total_revenue))
        .route("/sales/quantity-by-product", get(quantity_by_product))
        .route(
            "/sales/quantity-by-product-totals",
            get(quantity_by_product_totals),
        )
        .route("/sales/top-products", get(top_products))
        .route("/sales/average-price", get(average_price))
        .route("/sales/revenue-by-month", get(revenue_by_month))
        .route("/sales/highest-quantity-sold", get(highest_quantity_sold))
        .route(
            "/sales/department-salary-expense",
            get(department_salary_expense),
        )
        .route("/metrics", get(metrics::metrics_handler))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .on_request(metrics::request_counter)
                    .on_response(metrics::record_response_metrics),
            ),
        )
        .with_state(state)
}

async fn get_all_sales(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::Sale>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::list_sales(&state.store)?))
}

async fn add_sale(
    State(state): State<SharedAppState>,
    ValidatedJson(new_sale): ValidatedJson<models::NewSale>,
) -> Result<models::Success<models::Sale>, AnalyticsError> {
    let sale = analytics::add_sale(&state.store, new_sale)?;
    metrics::SALES_CREATED.inc();
    Ok(models::Success::created(sale))
}

async fn total_revenue(
    State(state): State<SharedAppState>,
) -> Result<models::Success<models::RevenueTotal>, AnalyticsError> {
    Ok(models::Success::ok(analytics::total_revenue(&state.store)?))
}

async fn quantity_by_product(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::SaleQuantity>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::quantity_by_product(
        &state.store,
    )?))
}

async fn quantity_by_product_totals(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::ProductQuantity>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::quantity_by_product_totals(
        &state.store,
    )?))
}

async fn top_products(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::ProductRevenue>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::top_products(&state.store)?))
}

async fn average_price(
    State(state): State<SharedAppState>,
) -> Result<models::Success<models::AveragePrice>, AnalyticsError> {
    Ok(models::Success::ok(analytics::average_price(&state.store)?))
}

async fn revenue_by_month(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::MonthlyRevenue>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::revenue_by_month(
        &state.store,
    )?))
}

async fn highest_quantity_sold(
    State(state): State<SharedAppState>,
) -> Result<models::Success<models::DailySalesPeak>, AnalyticsError> {
    Ok(models::Success::ok(analytics::highest_quantity_sold(
        &state.store,
    )?))
}

async fn department_salary_expense(
    State(state): State<SharedAppState>,
) -> Result<models::Success<Vec<models::DepartmentExpense>>, AnalyticsError> {
    Ok(models::Success::ok(analytics::department_salary_expense(
        &state.store,
    )?))
}
