#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Patch-level settings the voice manager and control surface are built from.
///
/// Defaults reproduce the stock two-saw patch: both oscillators at half level,
/// the secondary 7 cents sharp, widening by up to 50 more cents on the wheel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    /// Mixer level of the primary oscillator at full velocity (0.0 - 1.0)
    pub osc1_level: f32,
    /// Mixer level of the secondary oscillator at full velocity (0.0 - 1.0)
    pub osc2_level: f32,
    /// Secondary detune with the pitch wheel fully down
    pub base_detune_cents: f32,
    /// Extra detune added as the wheel travels to its top
    pub max_detune_widening_cents: f32,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            osc1_level: 0.5,
            osc2_level: 0.5,
            base_detune_cents: 7.0,
            max_detune_widening_cents: 50.0,
        }
    }
}

impl SynthParams {
    pub fn voice_levels(&self) -> VoiceLevels {
        VoiceLevels {
            osc1: self.osc1_level.clamp(0.0, 1.0),
            osc2: self.osc2_level.clamp(0.0, 1.0),
        }
    }
}

/// Per-oscillator mixer levels applied before velocity scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceLevels {
    pub osc1: f32,
    pub osc2: f32,
}

impl Default for VoiceLevels {
    fn default() -> Self {
        SynthParams::default().voice_levels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_are_half() {
        let levels = VoiceLevels::default();
        assert_eq!(levels.osc1, 0.5);
        assert_eq!(levels.osc2, 0.5);
    }

    #[test]
    fn levels_are_clamped() {
        let params = SynthParams {
            osc1_level: 1.5,
            osc2_level: -0.2,
            ..SynthParams::default()
        };
        let levels = params.voice_levels();
        assert_eq!(levels.osc1, 1.0);
        assert_eq!(levels.osc2, 0.0);
    }
}
