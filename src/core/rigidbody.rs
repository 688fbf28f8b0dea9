use serde::{Deserialize, Serialize};

/// Mass description consulted when an overlap is resolved.
///
/// Bodies with an inverse mass of zero are immovable: they never receive any
/// share of a positional correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub mass: f32,
    pub inverse_mass: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::from_mass(1.0)
    }
}

impl RigidBody {
    pub fn from_mass(mass: f32) -> Self {
        let mut body = Self {
            mass,
            inverse_mass: 0.0,
        };
        body.recompute_inverse();
        body
    }

    /// Body with infinite mass.
    pub fn immovable() -> Self {
        Self::from_mass(0.0)
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.recompute_inverse();
    }

    pub fn is_immovable(&self) -> bool {
        self.inverse_mass == 0.0
    }

    fn recompute_inverse(&mut self) {
        self.inverse_mass = if !self.mass.is_finite() || self.mass.abs() < f32::EPSILON {
            0.0
        } else {
            1.0 / self.mass
        };
    }
}
