//! Subway route planner server.
//!
//! Finds the quickest route between two stations of a subway network,
//! counting ride times plus the wait at every station where the rider
//! changes lines.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
