//! Open-set creation: creators registered by key at runtime.
//!
//! Unlike the simple factory's `match`, adding a variant here needs no edit to
//! the lookup code, only another `register` call.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{FactoryError, Result};
use crate::factory_method::notification::{
    EmailNotificationFactory, Notification, NotificationFactory, SmsNotificationFactory,
};
use crate::factory_method::shape::{CircleFactory, RectangleFactory, Shape, ShapeFactory};

type Creator<P> = Box<dyn Fn() -> Box<P> + Send + Sync>;

pub struct FactoryRegistry<P: ?Sized> {
    family: &'static str,
    creators: HashMap<String, Creator<P>>,
}

impl<P: ?Sized> FactoryRegistry<P> {
    /// `family` names the product family in errors and logs ("shape", "car").
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            creators: HashMap::new(),
        }
    }

    /// Returns `true` when an earlier creator for `key` was replaced.
    pub fn register<F>(&mut self, key: impl Into<String>, creator: F) -> bool
    where
        F: Fn() -> Box<P> + Send + Sync + 'static,
    {
        let key = key.into();
        debug!(family = self.family, key = %key, "registering creator");
        self.creators.insert(key, Box::new(creator)).is_some()
    }

    pub fn create(&self, key: &str) -> Option<Box<P>> {
        match self.creators.get(key) {
            Some(creator) => Some(creator()),
            None => {
                debug!(family = self.family, key, "no creator registered");
                None
            }
        }
    }

    pub fn try_create(&self, key: &str) -> Result<Box<P>> {
        self.create(key)
            .ok_or_else(|| FactoryError::unknown(self.family, key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.creators.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    pub fn family(&self) -> &'static str {
        self.family
    }
}

impl<P: ?Sized> fmt::Debug for FactoryRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("family", &self.family)
            .field("keys", &self.keys())
            .finish()
    }
}

/// Registry preloaded with `circle` and `rectangle`.
pub fn shape_registry() -> FactoryRegistry<dyn Shape> {
    let mut registry = FactoryRegistry::new("shape");
    registry.register("circle", || CircleFactory.create_shape());
    registry.register("rectangle", || RectangleFactory.create_shape());
    registry
}

/// Registry preloaded with `email` and `sms`.
pub fn notification_registry() -> FactoryRegistry<dyn Notification> {
    let mut registry = FactoryRegistry::new("notification");
    registry.register("email", || EmailNotificationFactory.create_notification());
    registry.register("sms", || SmsNotificationFactory.create_notification());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory_method::notification::NotificationKind;
    use crate::factory_method::shape::ShapeKind;
    use std::sync::Arc;
    use std::thread;

    struct Triangle;

    impl Shape for Triangle {
        fn name(&self) -> &str {
            "triangle"
        }

        fn render(&self) -> String {
            "Drawing a triangle".to_string()
        }
    }

    #[test]
    fn test_preloaded_shapes() {
        let registry = shape_registry();
        assert_eq!(registry.keys(), vec!["circle", "rectangle"]);
        assert_eq!(
            registry.create("circle").unwrap().kind(),
            Some(ShapeKind::Circle)
        );
        assert_eq!(
            registry.create("rectangle").unwrap().kind(),
            Some(ShapeKind::Rectangle)
        );
    }

    #[test]
    fn test_preloaded_notifications() {
        let registry = notification_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.create("sms").unwrap().kind(),
            Some(NotificationKind::Sms)
        );
        assert_eq!(
            registry.create("email").unwrap().kind(),
            Some(NotificationKind::Email)
        );
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let registry = shape_registry();
        assert!(registry.create("hexagon").is_none());
        assert!(registry.create("Circle").is_none());
        assert_eq!(
            registry.try_create("hexagon").err(),
            Some(FactoryError::unknown("shape", "hexagon"))
        );
    }

    #[test]
    fn test_extend_without_touching_lookup() {
        let mut registry = shape_registry();
        assert!(!registry.contains("triangle"));
        let replaced = registry.register("triangle", || Box::new(Triangle) as Box<dyn Shape>);
        assert!(!replaced);

        let triangle = registry.create("triangle").unwrap();
        assert_eq!(triangle.name(), "triangle");
        assert_eq!(triangle.kind(), None);
        assert_eq!(triangle.render(), "Drawing a triangle");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = shape_registry();
        let replaced = registry.register("circle", || Box::new(Triangle) as Box<dyn Shape>);
        assert!(replaced);
        assert_eq!(registry.len(), 2);
        let replacement = registry.create("circle").unwrap();
        assert_eq!(replacement.render(), "Drawing a triangle");
        assert_eq!(replacement.kind(), None);
    }

    #[test]
    fn test_empty_registry() {
        let registry: FactoryRegistry<dyn Shape> = FactoryRegistry::new("shape");
        assert!(registry.is_empty());
        assert_eq!(registry.family(), "shape");
        assert!(registry.try_create("circle").is_err());
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = Arc::new(shape_registry());

        let handles: Vec<_> = ["circle", "rectangle", "circle", "rectangle"]
            .into_iter()
            .map(|key| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.create(key).unwrap())
            })
            .collect();

        let shapes: Vec<Box<dyn Shape>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let names: Vec<&str> = shapes.iter().map(|shape| shape.name()).collect();
        assert_eq!(names, vec!["circle", "rectangle", "circle", "rectangle"]);

        let rendered = thread::spawn(move || {
            shapes.iter().map(|shape| shape.render()).collect::<Vec<_>>()
        })
        .join()
        .unwrap();
        assert_eq!(rendered[1], "Drawing a rectangle");
    }
}
