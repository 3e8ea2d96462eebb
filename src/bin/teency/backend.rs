//! Stand-in backend that reports commands instead of driving an audio graph.

use teency_voice::synth::backend::{EnvelopeKind, Oscillator, SynthBackend};

pub struct LogBackend;

impl SynthBackend for LogBackend {
    fn set_oscillator_frequency(&mut self, channel: usize, osc: Oscillator, hz: f32) {
        log::info!("ch{channel} {osc:?} freq {hz:.3} Hz");
    }

    fn set_oscillator_amplitude(&mut self, channel: usize, osc: Oscillator, level: f32) {
        log::debug!("ch{channel} {osc:?} amplitude {level:.2}");
    }

    fn set_mix_gain(&mut self, channel: usize, input: usize, gain: f32) {
        log::info!("ch{channel} mix[{input}] gain {gain:.3}");
    }

    fn trigger_envelope_on(&mut self, channel: usize, kind: EnvelopeKind) {
        log::info!("ch{channel} {kind:?} env on");
    }

    fn trigger_envelope_off(&mut self, channel: usize, kind: EnvelopeKind) {
        log::info!("ch{channel} {kind:?} env off");
    }
}
