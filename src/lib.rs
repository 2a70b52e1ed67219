//! ECOMMPAY Gateway - Payment page, refund and callback integration
//!
//! This crate signs payment page requests and refunds with the project
//! secret, and reconciles signed gateway callbacks with store orders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
