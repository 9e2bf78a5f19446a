//! Abstract player controls.

use arcade_engine::input::InputManager;
use bitflags::bitflags;

bitflags! {
    /// Actions that act every tick while held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Actions: u8 {
        /// Rotate counter-clockwise
        const TURN_LEFT = 1 << 0;
        /// Rotate clockwise
        const TURN_RIGHT = 1 << 1;
        /// Thrust along the heading
        const THRUST_FORWARD = 1 << 2;
        /// Apply drag
        const THRUST_BACKWARD = 1 << 3;
        /// Hold the shield up
        const SHIELD = 1 << 4;
    }
}

/// Controls a host can bind hardware keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// See [`Actions::TURN_LEFT`]
    TurnLeft,
    /// See [`Actions::TURN_RIGHT`]
    TurnRight,
    /// See [`Actions::THRUST_FORWARD`]
    ThrustForward,
    /// See [`Actions::THRUST_BACKWARD`]
    ThrustBackward,
    /// See [`Actions::SHIELD`]
    Shield,
    /// Fires once per press
    Fire,
}

impl Control {
    /// Held action for this control; `Fire` has none
    pub const fn action(self) -> Option<Actions> {
        match self {
            Self::TurnLeft => Some(Actions::TURN_LEFT),
            Self::TurnRight => Some(Actions::TURN_RIGHT),
            Self::ThrustForward => Some(Actions::THRUST_FORWARD),
            Self::ThrustBackward => Some(Actions::THRUST_BACKWARD),
            Self::Shield => Some(Actions::SHIELD),
            Self::Fire => None,
        }
    }
}

/// Input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    /// Actions held this tick
    pub held: Actions,
    /// A fire press arrived since the previous tick
    pub fire: bool,
}

impl FrameInput {
    /// No input
    pub const fn idle() -> Self {
        Self {
            held: Actions::empty(),
            fire: false,
        }
    }

    /// Only the given held actions
    pub const fn holding(held: Actions) -> Self {
        Self { held, fire: false }
    }

    /// Builder: also fire this tick
    #[must_use]
    pub const fn with_fire(self) -> Self {
        Self { fire: true, ..self }
    }

    /// Sample the held set and drain pending presses from an input manager
    pub fn from_input(input: &mut InputManager<Control>) -> Self {
        let held = input
            .held()
            .filter_map(|control| control.action())
            .fold(Actions::empty(), |acc, action| acc | action);
        let fire = input.take_pressed().contains(&Control::Fire);

        Self { held, fire }
    }

    /// Whether `action` is held
    pub fn is_held(&self, action: Actions) -> bool {
        self.held.contains(action)
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::idle()
    }
}
