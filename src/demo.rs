//! Client wiring for each demo section.
//!
//! Every function returns the transcript it would print, one line per
//! dispatched call, so the `patterns` binary and the tests share one source.

use crate::config::Section;
use crate::factory_method::{
    CircleFactory, EmailNotificationFactory, NotificationFactory, RectangleFactory,
    ShapeFactory, SmsNotificationFactory,
};
use crate::simple_factory::{CarFactory, ShapeFactory as ShapeSelector};
use crate::solid::dependency_inversion::{MacBook, WirelessKeyboard, WirelessMouse};
use crate::solid::interface_segregation::{break_time, shift, HumanWorker, Robot, Workable};
use crate::solid::liskov::{feed_all, Bird, Flyable, Penguin, Sparrow};
use crate::solid::open_closed::{CreditCardPayment, PayPalPayment, PaymentProcessor};
use crate::solid::single_responsibility::{
    Employee, EmployeeRepository, ReportGenerator, SalaryCalculator,
};

pub fn run(section: Section) -> Vec<String> {
    match section {
        Section::FactoryMethod => factory_method(),
        Section::Notifications => notifications(),
        Section::SimpleFactory => simple_factory(),
        Section::Solid => solid(),
    }
}

pub fn factory_method() -> Vec<String> {
    let circle_factory: Box<dyn ShapeFactory> = Box::new(CircleFactory);
    let rectangle_factory: Box<dyn ShapeFactory> = Box::new(RectangleFactory);

    let circle = circle_factory.create_shape();
    let rectangle = rectangle_factory.create_shape();

    vec![circle.render(), rectangle.render()]
}

pub fn notifications() -> Vec<String> {
    let email_factory: Box<dyn NotificationFactory> = Box::new(EmailNotificationFactory);
    let sms_factory: Box<dyn NotificationFactory> = Box::new(SmsNotificationFactory);

    let email = email_factory.create_notification();
    let sms = sms_factory.create_notification();

    vec![email.message(), sms.message()]
}

pub fn simple_factory() -> Vec<String> {
    let shapes = ShapeSelector::new();
    let cars = CarFactory::new();
    let mut lines = Vec::new();

    match shapes.get_shape("CIRCLE") {
        Some(shape) => lines.push(shape.render()),
        None => lines.push("No shape for selector 'CIRCLE'".to_string()),
    }

    for selector in ["Suv", "Coupe", "Sedan"] {
        match cars.get_car(selector) {
            Some(car) => lines.push(car.message()),
            None => lines.push(format!("No car for selector '{selector}'")),
        }
    }

    lines
}

pub fn solid() -> Vec<String> {
    let mut lines = Vec::new();

    let mut repository = EmployeeRepository::new();
    let calculator = SalaryCalculator;
    let employee = Employee::new("Alice", 4_000);
    lines.push(employee.work());
    lines.push(ReportGenerator.generate_report(&employee, &calculator));
    repository.save(employee);
    lines.push(format!("Saved {} employee(s)", repository.len()));

    let processor = PaymentProcessor;
    lines.push(processor.process_payment(&CreditCardPayment));
    lines.push(processor.process_payment(&PayPalPayment));

    let birds: [&dyn Bird; 2] = [&Sparrow, &Penguin];
    lines.extend(feed_all(&birds));
    lines.push(Sparrow.fly());

    let workers: [&dyn Workable; 2] = [&Robot, &HumanWorker];
    lines.extend(shift(&workers));
    lines.extend(break_time(&HumanWorker));

    let mac = MacBook::new(WirelessKeyboard, WirelessMouse);
    lines.extend(mac.use_mac());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_method_prints_two_distinct_lines() {
        let lines = factory_method();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("circle"));
        assert!(lines[1].contains("rectangle"));
        assert_ne!(lines[0], lines[1]);
    }

    #[test]
    fn test_notifications_transcript() {
        assert_eq!(
            notifications(),
            vec!["Sending an email notification", "Sending an SMS notification"]
        );
    }

    #[test]
    fn test_simple_factory_guards_unknown_selector() {
        assert_eq!(
            simple_factory(),
            vec![
                "Drawing a circle",
                "Starting the SUV",
                "Starting the coupe",
                "No car for selector 'Sedan'",
            ]
        );
    }

    #[test]
    fn test_solid_transcript() {
        let lines = solid();
        assert_eq!(lines.first().map(String::as_str), Some("Alice is working"));
        assert!(lines.contains(&"Report for Alice: annual salary 48000".to_string()));
        assert!(lines.contains(&"Penguin is eating.".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Clicking with Wireless Mouse...")
        );
    }

    #[test]
    fn test_every_section_produces_output() {
        for section in Section::ALL {
            assert!(!run(section).is_empty(), "{section} was empty");
        }
    }
}
