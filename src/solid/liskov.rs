//! L: any `Bird` can stand in for any other.
//!
//! Flying is split into `Flyable`, so no bird has to fail at something the
//! base trait promised.

pub trait Bird {
    fn name(&self) -> &str;

    fn eat(&self) -> String {
        format!("{} is eating.", self.name())
    }
}

pub trait Flyable {
    fn fly(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &str {
        "Sparrow"
    }
}

impl Flyable for Sparrow {
    fn fly(&self) -> String {
        "Sparrow is flying.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Penguin;

impl Bird for Penguin {
    fn name(&self) -> &str {
        "Penguin"
    }
}

/// Works for every `Bird` without knowing which one it got.
pub fn feed_all(birds: &[&dyn Bird]) -> Vec<String> {
    birds.iter().map(|bird| bird.eat()).collect()
}
