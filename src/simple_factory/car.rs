use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{FactoryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    Suv,
    Coupe,
}

impl CarKind {
    pub const ALL: [CarKind; 2] = [CarKind::Suv, CarKind::Coupe];

    /// The selector literal that picks this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            CarKind::Suv => "Suv",
            CarKind::Coupe => "Coupe",
        }
    }

    fn build(self) -> Box<dyn Car> {
        match self {
            CarKind::Suv => Box::new(Suv),
            CarKind::Coupe => Box::new(Coupe),
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarKind {
    type Err = FactoryError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Suv" => Ok(CarKind::Suv),
            "Coupe" => Ok(CarKind::Coupe),
            other => Err(FactoryError::unknown("car", other)),
        }
    }
}

pub trait Car: Send + Sync {
    fn kind(&self) -> CarKind;

    fn message(&self) -> String;

    fn start(&self) {
        println!("{}", self.message());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suv;

impl Car for Suv {
    fn kind(&self) -> CarKind {
        CarKind::Suv
    }

    fn message(&self) -> String {
        "Starting the SUV".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coupe;

impl Car for Coupe {
    fn kind(&self) -> CarKind {
        CarKind::Coupe
    }

    fn message(&self) -> String {
        "Starting the coupe".to_string()
    }
}

/// One `match` picks the car. A new model means editing this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarFactory;

impl CarFactory {
    pub fn new() -> Self {
        Self
    }

    /// `None` for any selector other than `"Suv"` or `"Coupe"`.
    pub fn get_car(&self, selector: &str) -> Option<Box<dyn Car>> {
        match selector.parse::<CarKind>() {
            Ok(kind) => {
                debug!(%kind, "creating car");
                Some(kind.build())
            }
            Err(_) => {
                debug!(selector, "unrecognised car selector");
                None
            }
        }
    }

    pub fn try_get_car(&self, selector: &str) -> Result<Box<dyn Car>> {
        let kind: CarKind = selector.parse()?;
        debug!(%kind, "creating car");
        Ok(kind.build())
    }
}
