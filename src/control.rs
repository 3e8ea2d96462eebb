//! Control-surface side of the shared detune value.
//!
//! The pitch wheel does not bend pitch on this instrument; it widens the
//! spread between the two oscillators. Wheel fully down leaves the secondary
//! oscillator at the base detune, fully up adds the whole widening range.

use crate::{params::SynthParams, synth::detune::DetuneCents};

const BEND_MIN: f32 = -8192.0;
const BEND_SPAN: f32 = 16383.0;

pub struct ControlSurface {
    detune: DetuneCents,
    base_cents: f32,
    widening_cents: f32,
}

impl ControlSurface {
    /// Attach to `detune` and reset it to the wheel-down value.
    pub fn new(detune: DetuneCents, params: &SynthParams) -> Self {
        let surface = Self {
            detune,
            base_cents: params.base_detune_cents,
            widening_cents: params.max_detune_widening_cents,
        };
        surface.detune.set(surface.base_cents);
        surface
    }

    /// Map a 14-bit wheel position (-8192..=8191) onto the detune range.
    pub fn pitch_bend(&self, value: i16) {
        let cents = self.bend_to_cents(value);
        log::trace!("pitch bend {value} -> {cents:.2} cents");
        self.detune.set(cents);
    }

    pub fn bend_to_cents(&self, value: i16) -> f32 {
        let position = ((value as f32 - BEND_MIN) / BEND_SPAN).clamp(0.0, 1.0);
        self.base_cents + position * self.widening_cents
    }

    pub fn detune(&self) -> &DetuneCents {
        &self.detune
    }
}
