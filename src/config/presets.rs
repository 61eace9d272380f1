//! Named parameter bundles
//!
//! Eight fixed looks the host can apply wholesale. Every preset keeps
//! `animate = true`.
//!
//! Author: Moroya Sakamoto

use super::{ConfigError, ParameterSet};
use std::fmt;
use std::str::FromStr;

/// Built-in flame presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Balanced match-head flame
    Standard,
    /// Tall, fast, heavily perturbed fire
    Inferno,
    /// Small, calm flame with a hot tip
    Candle,
    /// Wide blob dominated by core heat
    Plasma,
    /// Thin, tall wisp
    Spirit,
    /// Hard-edged blend with high-frequency noise
    Glitch,
    /// Large sphere glowing from the core
    Sun,
    /// Strong noise breaking the body into sparks
    Embers,
}

impl Preset {
    /// All presets in display order
    pub const ALL: [Preset; 8] = [
        Preset::Standard,
        Preset::Inferno,
        Preset::Candle,
        Preset::Plasma,
        Preset::Spirit,
        Preset::Glitch,
        Preset::Sun,
        Preset::Embers,
    ];

    /// Short identifier, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Inferno => "inferno",
            Preset::Candle => "candle",
            Preset::Plasma => "plasma",
            Preset::Spirit => "spirit",
            Preset::Glitch => "glitch",
            Preset::Sun => "sun",
            Preset::Embers => "embers",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Preset::Standard => "Standard Fire",
            Preset::Inferno => "Raging Inferno",
            Preset::Candle => "Candle Light",
            Preset::Plasma => "Plasma Blob",
            Preset::Spirit => "Spirit Wisp",
            Preset::Glitch => "Digital Glitch",
            Preset::Sun => "Dying Sun",
            Preset::Embers => "Wild Embers",
        }
    }

    /// Full parameter set for this preset
    pub fn params(self) -> ParameterSet {
        match self {
            Preset::Standard => ParameterSet {
                resolution: 40,
                cube_base_size: 0.9,
                sphere_radius: 1.2,
                capsule_height: 2.5,
                capsule_radius: 0.6,
                blend: 0.8,
                threshold: 0.0,
                animate: true,
                noise_scale: 0.5,
                noise_speed: 0.5,
                noise_strength: 0.3,
                emissive_intensity: 2.0,
                heat_height_influence: 0.6,
                heat_depth_influence: 0.5,
            },
            Preset::Inferno => ParameterSet {
                resolution: 48,
                cube_base_size: 1.0,
                sphere_radius: 1.5,
                capsule_height: 4.5,
                capsule_radius: 1.0,
                blend: 1.2,
                threshold: -0.2,
                animate: true,
                noise_scale: 0.4,
                noise_speed: 1.2,
                noise_strength: 0.6,
                emissive_intensity: 3.0,
                heat_height_influence: 0.8,
                heat_depth_influence: 0.8,
            },
            Preset::Candle => ParameterSet {
                resolution: 50,
                cube_base_size: 0.8,
                sphere_radius: 0.6,
                capsule_height: 1.2,
                capsule_radius: 0.4,
                blend: 0.6,
                threshold: 0.1,
                animate: true,
                noise_scale: 1.5,
                noise_speed: 0.2,
                noise_strength: 0.1,
                emissive_intensity: 1.2,
                heat_height_influence: 1.0,
                heat_depth_influence: 0.3,
            },
            Preset::Plasma => ParameterSet {
                resolution: 36,
                cube_base_size: 1.2,
                sphere_radius: 1.8,
                capsule_height: 0.5,
                capsule_radius: 1.5,
                blend: 0.2,
                threshold: -0.5,
                animate: true,
                noise_scale: 2.0,
                noise_speed: 0.3,
                noise_strength: 0.5,
                emissive_intensity: 5.0,
                heat_height_influence: 0.2,
                heat_depth_influence: 1.5,
            },
            Preset::Spirit => ParameterSet {
                resolution: 42,
                cube_base_size: 0.7,
                sphere_radius: 0.8,
                capsule_height: 3.5,
                capsule_radius: 0.5,
                blend: 1.0,
                threshold: 0.1,
                animate: true,
                noise_scale: 0.8,
                noise_speed: 1.5,
                noise_strength: 0.4,
                emissive_intensity: 1.5,
                heat_height_influence: 1.2,
                heat_depth_influence: 0.2,
            },
            Preset::Glitch => ParameterSet {
                resolution: 44,
                cube_base_size: 1.1,
                sphere_radius: 1.2,
                capsule_height: 2.0,
                capsule_radius: 1.0,
                blend: 0.1,
                threshold: -0.1,
                animate: true,
                noise_scale: 2.0,
                noise_speed: 0.1,
                noise_strength: 0.3,
                emissive_intensity: 2.5,
                heat_height_influence: 0.5,
                heat_depth_influence: 0.5,
            },
            Preset::Sun => ParameterSet {
                resolution: 40,
                cube_base_size: 1.0,
                sphere_radius: 2.2,
                capsule_height: 0.1,
                capsule_radius: 0.1,
                blend: 0.5,
                threshold: -0.5,
                animate: true,
                noise_scale: 0.2,
                noise_speed: 0.2,
                noise_strength: 0.1,
                emissive_intensity: 8.0,
                heat_height_influence: 0.0,
                heat_depth_influence: 2.0,
            },
            Preset::Embers => ParameterSet {
                resolution: 50,
                cube_base_size: 0.6,
                sphere_radius: 1.0,
                capsule_height: 3.0,
                capsule_radius: 0.8,
                blend: 0.5,
                threshold: -0.4,
                animate: true,
                noise_scale: 1.0,
                noise_speed: 0.8,
                noise_strength: 1.0,
                emissive_intensity: 4.0,
                heat_height_influence: 1.5,
                heat_depth_influence: 0.8,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    /// Accepts the short name or the label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}
