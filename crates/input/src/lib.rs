//! Keyboard input for the vehicle controls.
//!
//! Keys are tracked by [`InputState`]; each frame they are folded into a
//! [`ControlInput`], a plain boolean snapshot keyed by [`Action`] that the
//! simulation consumes without ever seeing a key code.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A control the pilot can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Forward,
    Backward,
    YawLeft,
    YawRight,
    Ascend,
    Descend,
    Fire,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Forward,
        Action::Backward,
        Action::YawLeft,
        Action::YawRight,
        Action::Ascend,
        Action::Descend,
        Action::Fire,
    ];

    /// The action's name as used in scripts and config.
    pub fn name(self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::YawLeft => "yawLeft",
            Action::YawRight => "yawRight",
            Action::Ascend => "ascend",
            Action::Descend => "descend",
            Action::Fire => "fire",
        }
    }

    /// Look an action up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// Boolean control snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub forward: bool,
    pub backward: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub ascend: bool,
    pub descend: bool,
    pub fire: bool,
}

impl ControlInput {
    /// Snapshot with nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Build a snapshot with the given actions active.
    pub fn with(actions: &[Action]) -> Self {
        let mut input = Self::idle();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    pub fn set(&mut self, action: Action, active: bool) {
        *self.flag_mut(action) = active;
    }

    pub fn is_active(&self, action: Action) -> bool {
        match action {
            Action::Forward => self.forward,
            Action::Backward => self.backward,
            Action::YawLeft => self.yaw_left,
            Action::YawRight => self.yaw_right,
            Action::Ascend => self.ascend,
            Action::Descend => self.descend,
            Action::Fire => self.fire,
        }
    }

    fn flag_mut(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::YawLeft => &mut self.yaw_left,
            Action::YawRight => &mut self.yaw_right,
            Action::Ascend => &mut self.ascend,
            Action::Descend => &mut self.descend,
            Action::Fire => &mut self.fire,
        }
    }
}

/// Key bound to each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub ascend: KeyCode,
    pub descend: KeyCode,
    pub fire: KeyCode,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            yaw_left: KeyCode::KeyA,
            yaw_right: KeyCode::KeyD,
            ascend: KeyCode::KeyQ,
            descend: KeyCode::KeyE,
            fire: KeyCode::Space,
        }
    }
}

impl Keymap {
    pub fn key_for(&self, action: Action) -> KeyCode {
        match action {
            Action::Forward => self.forward,
            Action::Backward => self.backward,
            Action::YawLeft => self.yaw_left,
            Action::YawRight => self.yaw_right,
            Action::Ascend => self.ascend,
            Action::Descend => self.descend,
            Action::Fire => self.fire,
        }
    }
}

/// Manages keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Fold the keyboard into a control snapshot. Movement follows held keys;
    /// fire is edge-triggered (one shot per press, auto-repeat ignored).
    pub fn control_input(&self, keymap: &Keymap) -> ControlInput {
        ControlInput {
            forward: self.is_key_held(keymap.forward),
            backward: self.is_key_held(keymap.backward),
            yaw_left: self.is_key_held(keymap.yaw_left),
            yaw_right: self.is_key_held(keymap.yaw_right),
            ascend: self.is_key_held(keymap.ascend),
            descend: self.is_key_held(keymap.descend),
            fire: self.is_key_pressed(keymap.fire),
        }
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
