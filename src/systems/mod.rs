//! Background machinery driven by the UI: list filtering and cloud calls.

pub mod cloud;
pub mod filter;
