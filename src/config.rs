// Tunable constants for the particle field, loadable from a JSON object
// with camelCase keys. Any key left out keeps its default.

use crate::color::Color;
use crate::error::{FieldError, FieldResult};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldConfig {
    pub particle_count: usize,
    // each velocity component is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    pub radius: f64,
    pub particle_opacity: f64,
    pub link_distance: f64,
    // alpha at distance 0, fading to nothing at link_distance
    pub link_opacity: f64,
    pub line_width: f64,
    pub color: Color,
    pub seed: Option<u64>,
    pub profile_frames: bool,
}

impl FieldConfig {
    pub const DEFAULT_PARTICLE_COUNT: usize = 50;
    // Every frame links all pairs, so cost grows with the square of this
    pub const MAX_PARTICLE_COUNT: usize = 1000;
    pub const DEFAULT_MAX_SPEED: f64 = 0.25;
    pub const DEFAULT_RADIUS: f64 = 2.5;
    pub const DEFAULT_PARTICLE_OPACITY: f64 = 0.4;
    pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;
    pub const DEFAULT_LINK_OPACITY: f64 = 0.2;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    pub fn from_json(json: &str) -> FieldResult<FieldConfig> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FieldResult<()> {
        if self.particle_count > Self::MAX_PARTICLE_COUNT {
            return Err(FieldError::InvalidParameter {
                name: "particleCount",
                value: self.particle_count as f64,
            });
        }
        non_negative("maxSpeed", self.max_speed)?;
        positive("radius", self.radius)?;
        positive("linkDistance", self.link_distance)?;
        positive("lineWidth", self.line_width)?;
        unit("particleOpacity", self.particle_opacity)?;
        unit("linkOpacity", self.link_opacity)?;
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: Self::DEFAULT_PARTICLE_COUNT,
            max_speed: Self::DEFAULT_MAX_SPEED,
            radius: Self::DEFAULT_RADIUS,
            particle_opacity: Self::DEFAULT_PARTICLE_OPACITY,
            link_distance: Self::DEFAULT_LINK_DISTANCE,
            link_opacity: Self::DEFAULT_LINK_OPACITY,
            line_width: Self::DEFAULT_LINE_WIDTH,
            color: Color::ORANGE,
            seed: None,
            profile_frames: false,
        }
    }
}

fn check(name: &'static str, value: f64, ok: bool) -> FieldResult<()> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(FieldError::InvalidParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> FieldResult<()> {
    check(name, value, value >= 0.0)
}

fn positive(name: &'static str, value: f64) -> FieldResult<()> {
    check(name, value, value > 0.0)
}

fn unit(name: &'static str, value: f64) -> FieldResult<()> {
    check(name, value, (0.0..=1.0).contains(&value))
}
