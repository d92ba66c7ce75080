//! Payroll Computation & Shift Statistics Engine
//!
//! This crate computes per-shift earnings from a project's pay-rule
//! configuration (progressive overtime tiers, tax rate, meal-hour additions,
//! daily allowance, service fees) and aggregates period-filtered statistics
//! over the resulting shift records.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod statistics;
