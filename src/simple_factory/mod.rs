//! Simple Factory: one concrete creator, one `match` on a selector string.
//!
//! Unrecognised selectors give `None`. Compare with
//! [`factory_method`](crate::factory_method), where each variant has its own
//! creator and nothing needs a selector.

pub mod car;
pub mod shape;

pub use car::{Car, CarFactory, CarKind, Coupe, Suv};
pub use shape::ShapeFactory;
