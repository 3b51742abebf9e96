//! Bus arrival board server.
//!
//! A web application that answers: "which buses are arriving at this
//! stop, and how soon?"

pub mod arrivals;
pub mod config;
pub mod domain;
pub mod query;
pub mod web;
