//! Carrier Ranker - Multi-criteria carrier ranking and sensitivity analysis
//!
//! This crate ranks freight carriers by cost, delivery time, reliability and
//! tracking under urgency-dependent weights, and explains each score.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
