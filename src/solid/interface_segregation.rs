//! I: small traits, implemented only where they make sense.

pub trait Workable {
    fn work(&self) -> String;
}

pub trait Eatable {
    fn eat(&self) -> String;
}

pub trait Sleepable {
    fn sleep(&self) -> String;
}

/// Only works. There is no `eat` or `sleep` to stub out.
#[derive(Debug, Default)]
pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> String {
        "Robot is working.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) -> String {
        "Human is working.".to_string()
    }
}

impl Eatable for HumanWorker {
    fn eat(&self) -> String {
        "Human is eating.".to_string()
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) -> String {
        "Human is sleeping.".to_string()
    }
}

pub fn shift(workers: &[&dyn Workable]) -> Vec<String> {
    workers.iter().map(|w| w.work()).collect()
}

pub fn break_time<T: Eatable + Sleepable>(worker: &T) -> Vec<String> {
    vec![worker.eat(), worker.sleep()]
}
