//! HTTP handlers for the pizza resource.

pub mod pizza;
