//! Pool availability browser.
//!
//! A web application that answers: "which pools are open on this date,
//! and which one suits me best?" Facilities come from a precomputed
//! availability dataset; travel distance/time annotations come from an
//! external routing API on request.

pub mod browse;
pub mod dataset;
pub mod domain;
pub mod keystore;
pub mod routing;
pub mod status;
pub mod web;
