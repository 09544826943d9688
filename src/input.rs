//! Input tracking
//!
//! Maps raw key events to logical actions. Movement is level-triggered
//! through a pressed-state map; fire and pause are edge-triggered intents
//! drained into the per-frame `TickInput`. Each directional action accepts
//! two physical bindings (WASD and arrow keys).

use crate::sim::TickInput;

/// An abstract input action, bindable to multiple physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    PauseToggle,
}

impl LogicalKey {
    /// Resolve a browser `KeyboardEvent.code` to a logical action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Self::MoveUp),
            "KeyS" | "ArrowDown" => Some(Self::MoveDown),
            "KeyA" | "ArrowLeft" => Some(Self::MoveLeft),
            "KeyD" | "ArrowRight" => Some(Self::MoveRight),
            "Space" => Some(Self::Fire),
            "Escape" => Some(Self::PauseToggle),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::MoveUp => 0,
            Self::MoveDown => 1,
            Self::MoveLeft => 2,
            Self::MoveRight => 3,
            Self::Fire => 4,
            Self::PauseToggle => 5,
        }
    }
}

/// Live key state plus pending one-shot intents
#[derive(Debug, Default)]
pub struct InputTracker {
    pressed: [bool; 6],
    fire_edge: bool,
    pause_edge: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw key-down. Returns true if the code mapped to a logical key
    /// (callers use this to preventDefault). Every fire key-down raises a
    /// fire edge, auto-repeat included; the cooldown downstream is the rate
    /// limit. Pause edges are raised only on the initial press so a held
    /// key cannot bounce the pause state.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = LogicalKey::from_code(code) else {
            return false;
        };
        match key {
            LogicalKey::Fire => self.fire_edge = true,
            LogicalKey::PauseToggle => {
                if !self.pressed[key.index()] {
                    self.pause_edge = true;
                }
            }
            _ => {}
        }
        self.pressed[key.index()] = true;
        true
    }

    /// Feed a raw key-up
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = LogicalKey::from_code(code) {
            self.pressed[key.index()] = false;
        }
    }

    /// Level-triggered query, used for movement
    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.pressed[key.index()]
    }

    /// Release everything (window blur drops key-up events)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build this frame's input and consume the pending edges
    pub fn drain_frame(&mut self) -> TickInput {
        let input = TickInput {
            move_up: self.is_pressed(LogicalKey::MoveUp),
            move_down: self.is_pressed(LogicalKey::MoveDown),
            move_left: self.is_pressed(LogicalKey::MoveLeft),
            move_right: self.is_pressed(LogicalKey::MoveRight),
            fire: self.fire_edge,
            pause: self.pause_edge,
            ..Default::default()
        };
        self.fire_edge = false;
        self.pause_edge = false;
        input
    }
}
