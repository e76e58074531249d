//! D: `MacBook` depends on `Keyboard` and `Mouse`, not on wired or wireless
//! hardware. The devices are handed in through the constructor.

pub trait Keyboard {
    fn type_keys(&self) -> String;
}

pub trait Mouse {
    fn click(&self) -> String;
}

#[derive(Debug, Default)]
pub struct WiredKeyboard;

impl Keyboard for WiredKeyboard {
    fn type_keys(&self) -> String {
        "Typing on Wired Keyboard...".to_string()
    }
}

#[derive(Debug, Default)]
pub struct WirelessKeyboard;

impl Keyboard for WirelessKeyboard {
    fn type_keys(&self) -> String {
        "Typing on Wireless Keyboard...".to_string()
    }
}

#[derive(Debug, Default)]
pub struct WiredMouse;

impl Mouse for WiredMouse {
    fn click(&self) -> String {
        "Clicking with Wired Mouse...".to_string()
    }
}

#[derive(Debug, Default)]
pub struct WirelessMouse;

impl Mouse for WirelessMouse {
    fn click(&self) -> String {
        "Clicking with Wireless Mouse...".to_string()
    }
}

pub struct MacBook<K, M> {
    keyboard: K,
    mouse: M,
}

impl<K: Keyboard, M: Mouse> MacBook<K, M> {
    pub fn new(keyboard: K, mouse: M) -> Self {
        Self { keyboard, mouse }
    }

    /// Types, then clicks.
    pub fn use_mac(&self) -> Vec<String> {
        vec![self.keyboard.type_keys(), self.mouse.click()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingMouse {
        clicks: Cell<u32>,
    }

    impl Mouse for CountingMouse {
        fn click(&self) -> String {
            self.clicks.set(self.clicks.get() + 1);
            format!("click #{}", self.clicks.get())
        }
    }

    #[test]
    fn test_wireless_setup() {
        let mac = MacBook::new(WirelessKeyboard, WirelessMouse);
        assert_eq!(
            mac.use_mac(),
            vec!["Typing on Wireless Keyboard...", "Clicking with Wireless Mouse..."]
        );
    }

    #[test]
    fn test_devices_are_swappable() {
        let mac = MacBook::new(WiredKeyboard, WiredMouse);
        assert_eq!(mac.use_mac()[0], "Typing on Wired Keyboard...");
        assert_eq!(mac.use_mac()[1], "Clicking with Wired Mouse...");
    }

    #[test]
    fn test_injected_double_is_used() {
        let mac = MacBook::new(
            WiredKeyboard,
            CountingMouse {
                clicks: Cell::new(0),
            },
        );
        mac.use_mac();
        assert_eq!(mac.use_mac()[1], "click #2");
    }
}
