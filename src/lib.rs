//! # Creational Patterns and SOLID Principles
//!
//! ## Factory Method
//! - Abstract creator traits (`ShapeFactory`, `NotificationFactory`)
//! - One concrete creator per product, products returned as trait objects
//! - Enum dispatch for closed variant sets
//! - Keyed registry for open variant sets
//!
//! ## Simple Factory
//! - One creator, one `match` on a selector string
//! - Unknown selectors return `None` (or `FactoryError` via `try_*`)
//!
//! ## SOLID
//! - Single responsibility, open/closed, Liskov substitution,
//!   interface segregation, dependency inversion
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin patterns [config.toml]
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod simple_factory;
pub mod solid;

pub use config::{DemoConfig, Section};
pub use error::{ConfigError, FactoryError, Result};
