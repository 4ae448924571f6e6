//! Keyboard input.

/// A key press relevant to the interactive components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab without Shift.
    Tab,
    /// Tab with Shift held.
    ShiftTab,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Every key, in declaration order.
    pub const ALL: [Key; 8] = [
        Key::Enter,
        Key::Space,
        Key::Escape,
        Key::Tab,
        Key::ShiftTab,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Other,
    ];

    /// Map a DOM `KeyboardEvent.key` value (plus the Shift modifier).
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Tab" if shift => Key::ShiftTab,
            "Tab" => Key::Tab,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }

    /// Canonical name, as used in rendered key-binding attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Key::Enter => "Enter",
            Key::Space => "Space",
            Key::Escape => "Escape",
            Key::Tab => "Tab",
            Key::ShiftTab => "ShiftTab",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Other => "Other",
        }
    }
}
