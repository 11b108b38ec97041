//! Café beverage ordering: decorated drinks, pricing strategies, receipts,
//! and OrderPlaced fan-out to subscribers, driven from a console menu.

pub mod config;
pub mod console;
pub mod domain;
pub mod messaging;
pub mod metrics;
