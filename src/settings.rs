//! Engine settings
//!
//! Movement and rotation tuning. Loaded from JSON by the host; any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;

/// Tunable engine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance moved per held arrow key per frame
    pub move_speed: f32,
    /// Largest angular step (degrees) taken while walking toward a drag target
    pub rotation_step_deg: f32,
    /// Drag targets strictly closer than this (degrees) to a snap angle land on it
    pub snap_threshold_deg: f32,
    /// Angles (degrees) that drag targets snap to
    pub snap_angles_deg: Vec<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            rotation_step_deg: ROTATION_STEP_DEG,
            snap_threshold_deg: SNAP_THRESHOLD_DEG,
            snap_angles_deg: SNAP_ANGLES_DEG.to_vec(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings: {settings:?}");
        Ok(settings)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the controllers cannot run with
    pub fn validate(&self) -> Result<(), Error> {
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(Error::InvalidSetting {
                name: "move_speed",
                value: self.move_speed,
            });
        }
        if !self.rotation_step_deg.is_finite() || self.rotation_step_deg <= 0.0 {
            return Err(Error::InvalidSetting {
                name: "rotation_step_deg",
                value: self.rotation_step_deg,
            });
        }
        if !self.snap_threshold_deg.is_finite() || self.snap_threshold_deg < 0.0 {
            return Err(Error::InvalidSetting {
                name: "snap_threshold_deg",
                value: self.snap_threshold_deg,
            });
        }
        if let Some(&bad) = self.snap_angles_deg.iter().find(|a| !a.is_finite()) {
            return Err(Error::InvalidSetting {
                name: "snap_angles_deg",
                value: bad,
            });
        }
        Ok(())
    }
}
