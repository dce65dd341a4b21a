//! Test fixtures for route-planner.
//!
//! Provides:
//! - Priority-tagged store records around Las Vegas
//! - A one-shot OSRM stand-in serving canned responses on localhost

#![allow(dead_code)]

pub mod osrm_stub;
pub mod stores;

#[allow(unused_imports)]
pub use osrm_stub::*;
#[allow(unused_imports)]
pub use stores::*;
