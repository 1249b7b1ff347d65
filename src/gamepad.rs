//! Gamepad
//!
//! Input state feeding the animation controller. The d-pad steers the
//! sprite origin; Start toggles the pause latch on each press.

/// Control inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Right,
    Left,
    Up,
    Down,
}

/// Gamepad state
#[derive(Debug, Clone, Default)]
pub struct Gamepad {
    /// Button states (true = pressed)
    pub button_start: bool,
    pub dpad_right: bool,
    pub dpad_left: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    /// Start was pressed since the latch was last cleared
    pub pause_requested: bool,
}

impl Gamepad {
    /// Create a new Gamepad with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Release everything
    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// Set button state
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        let was_pressed = self.is_pressed(button);

        match button {
            Button::Start => self.button_start = pressed,
            Button::Right => self.dpad_right = pressed,
            Button::Left => self.dpad_left = pressed,
            Button::Up => self.dpad_up = pressed,
            Button::Down => self.dpad_down = pressed,
        }

        // Latch on the press edge only, so key repeat does not flicker the pause
        if button == Button::Start && pressed && !was_pressed {
            self.pause_requested = true;
        }
    }

    /// Check if button is pressed
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Start => self.button_start,
            Button::Right => self.dpad_right,
            Button::Left => self.dpad_left,
            Button::Up => self.dpad_up,
            Button::Down => self.dpad_down,
        }
    }

    /// Unit step of the held d-pad directions; opposite directions cancel
    pub fn direction(&self) -> (i32, i32) {
        let dx = self.dpad_right as i32 - self.dpad_left as i32;
        let dy = self.dpad_down as i32 - self.dpad_up as i32;
        (dx, dy)
    }

    /// Take and clear the pause latch
    pub fn take_pause_request(&mut self) -> bool {
        std::mem::take(&mut self.pause_requested)
    }
}
