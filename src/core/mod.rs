//! Aggregation core and the services built on top of it.

pub mod insights;
pub mod services;
