//! O: open for extension, closed for modification.
//!
//! `PaymentProcessor` never branches on the payment type, so a new method is
//! a new `impl PaymentMethod`, not an edit here.

pub trait PaymentMethod {
    fn pay(&self) -> String;
}

#[derive(Debug, Default)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn pay(&self) -> String {
        "Paid with Credit Card".to_string()
    }
}

#[derive(Debug, Default)]
pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn pay(&self) -> String {
        "Paid with PayPal".to_string()
    }
}

#[derive(Debug, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn process_payment(&self, method: &dyn PaymentMethod) -> String {
        method.pay()
    }
}
