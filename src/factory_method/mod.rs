//! Factory Method: an abstract creator, one concrete creator per product.
//!
//! - [`shape`]: `ShapeFactory` → `Circle` / `Rectangle`
//! - [`notification`]: `NotificationFactory` → `EmailNotification` / `SmsNotification`
//! - [`registry`]: keyed creators for an open set of variants

pub mod notification;
pub mod registry;
pub mod shape;

pub use notification::{
    AnyNotification, EmailNotification, EmailNotificationFactory, Notification,
    NotificationFactory, NotificationKind, SmsNotification, SmsNotificationFactory,
};
pub use registry::{notification_registry, shape_registry, FactoryRegistry};
pub use shape::{
    render_with, AnyShape, Circle, CircleFactory, Rectangle, RectangleFactory, Shape,
    ShapeFactory, ShapeKind,
};
