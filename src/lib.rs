//! This crate provides a sales analytics server. It exposes a small REST API over two document
//! collections, `sales` and `department_salary`, together with a fixed catalog of analytics
//! (revenue totals, top products, monthly revenue and the like) evaluated in-process over an
//! embedded document store. Each analytic consumes a whole collection and reduces it to a derived
//! result set; there is no general query surface.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team on top of the [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of JSON request, response and document data.
//! * [Sled](sled) provides the embedded store backing the two document collections.

pub mod analytics;
pub mod app;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod store;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod validated_json;
