//! Notifications built through the Factory Method pattern.
//!
//! Nothing is delivered; a notification only announces itself.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{FactoryError, Result};

/// Built-in channels. Notifications added through a registry have no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Sms,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 2] = [NotificationKind::Email, NotificationKind::Sms];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Email => "email",
            NotificationKind::Sms => "sms",
        }
    }

    pub fn create(self) -> AnyNotification {
        match self {
            NotificationKind::Email => AnyNotification::Email(EmailNotification),
            NotificationKind::Sms => AnyNotification::Sms(SmsNotification),
        }
    }

    pub fn factory(self) -> Box<dyn NotificationFactory> {
        match self {
            NotificationKind::Email => Box::new(EmailNotificationFactory),
            NotificationKind::Sms => Box::new(SmsNotificationFactory),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "email" => Ok(NotificationKind::Email),
            "sms" => Ok(NotificationKind::Sms),
            other => Err(FactoryError::unknown("notification", other)),
        }
    }
}

pub trait Notification: Send + Sync {
    /// Lowercase channel name, e.g. `"email"`.
    fn name(&self) -> &str;

    fn message(&self) -> String;

    fn kind(&self) -> Option<NotificationKind> {
        self.name().parse().ok()
    }

    fn notify(&self) {
        println!("{}", self.message());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailNotification;

impl Notification for EmailNotification {
    fn name(&self) -> &str {
        NotificationKind::Email.as_str()
    }

    fn message(&self) -> String {
        "Sending an email notification".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmsNotification;

impl Notification for SmsNotification {
    fn name(&self) -> &str {
        NotificationKind::Sms.as_str()
    }

    fn message(&self) -> String {
        "Sending an SMS notification".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyNotification {
    Email(EmailNotification),
    Sms(SmsNotification),
}

impl AnyNotification {
    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            AnyNotification::Email(_) => NotificationKind::Email,
            AnyNotification::Sms(_) => NotificationKind::Sms,
        }
    }
}

impl Notification for AnyNotification {
    fn name(&self) -> &str {
        self.notification_kind().as_str()
    }

    fn message(&self) -> String {
        match self {
            AnyNotification::Email(n) => n.message(),
            AnyNotification::Sms(n) => n.message(),
        }
    }
}

pub trait NotificationFactory: Send + Sync {
    fn create_notification(&self) -> Box<dyn Notification>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotificationFactory;

impl NotificationFactory for EmailNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        debug!(kind = %NotificationKind::Email, "creating notification");
        Box::new(EmailNotification)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotificationFactory;

impl NotificationFactory for SmsNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        debug!(kind = %NotificationKind::Sms, "creating notification");
        Box::new(SmsNotification)
    }
}
