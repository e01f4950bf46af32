use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named control channels supplied by the input collaborator each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlChannel {
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    ThrottleUp,
    ThrottleDown,
    Airbrake,
    VtolUp,
    VtolDown,
    TrimUp,
    TrimDown,
    Shoot,
}

/// Snapshot of the host's input mapping. Values above 0.5 count as pressed.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlInputs {
    channels: HashMap<ControlChannel, f64>,
}

impl ControlInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, channel: ControlChannel, value: f64) {
        self.channels.insert(channel, value);
    }

    pub fn press(&mut self, channel: ControlChannel) {
        self.set(channel, 1.0);
    }

    pub fn release(&mut self, channel: ControlChannel) {
        self.channels.remove(&channel);
    }

    pub fn with(mut self, channel: ControlChannel) -> Self {
        self.press(channel);
        self
    }

    pub fn value(&self, channel: ControlChannel) -> f64 {
        self.channels.get(&channel).copied().unwrap_or(0.0)
    }

    pub fn pressed(&self, channel: ControlChannel) -> bool {
        self.value(channel) > 0.5
    }

    /// +1 when only `positive` is held, -1 when only `negative` is, 0 otherwise.
    pub fn axis(&self, positive: ControlChannel, negative: ControlChannel) -> f64 {
        match (self.pressed(positive), self.pressed(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Integrated control state of one vehicle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Instantaneous, -1..1
    pub pitch: f64,
    /// Instantaneous, -1..1 (positive rolls left)
    pub roll: f64,
    /// Instantaneous, -1..1 (positive yaws left)
    pub yaw: f64,
    /// Rate limited, 0..1
    pub throttle: f64,
    /// Rate limited, 0..1
    pub airbrake: f64,
    /// Rate limited, 0..1
    pub vtol: f64,
    /// Rate limited, -1..1
    pub trim: f64,
}
