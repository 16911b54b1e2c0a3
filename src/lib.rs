//! Compliance Compass - Regulatory Compliance Assessment Backend
//!
//! This crate scores filled-in compliance questionnaires and produces
//! prioritized remediation recommendations for the hosting report UI.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
