//! Command surface of the synthesis backend.
//!
//! Each voice slot owns one backend channel (channel index == slot index).
//! A channel holds two oscillators feeding a mixer, plus an amplitude and a
//! filter envelope generator. The voice manager only issues commands; it
//! never reads state back.

/// Which of a channel's two oscillators a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oscillator {
    Primary,
    /// Detuned by the shared detune amount.
    Secondary,
}

impl Oscillator {
    /// Mixer input the oscillator is patched into.
    pub fn mix_input(self) -> usize {
        match self {
            Oscillator::Primary => 0,
            Oscillator::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Amplitude,
    Filter,
}

impl EnvelopeKind {
    /// Both envelopes, in the order they are gated.
    pub const ALL: [EnvelopeKind; 2] = [EnvelopeKind::Amplitude, EnvelopeKind::Filter];
}

/// Control operations the voice manager needs from the audio graph.
pub trait SynthBackend {
    fn set_oscillator_frequency(&mut self, channel: usize, osc: Oscillator, hz: f32);

    fn set_oscillator_amplitude(&mut self, channel: usize, osc: Oscillator, level: f32);

    fn set_mix_gain(&mut self, channel: usize, input: usize, gain: f32);

    /// Gate high: start the attack stage.
    fn trigger_envelope_on(&mut self, channel: usize, kind: EnvelopeKind);

    /// Gate low: start the release stage. The tail keeps sounding after the
    /// slot has been handed back to the pool.
    fn trigger_envelope_off(&mut self, channel: usize, kind: EnvelopeKind);
}

/// One issued backend command, as captured by [`RecordingBackend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendCommand {
    OscillatorFrequency {
        channel: usize,
        osc: Oscillator,
        hz: f32,
    },
    OscillatorAmplitude {
        channel: usize,
        osc: Oscillator,
        level: f32,
    },
    MixGain {
        channel: usize,
        input: usize,
        gain: f32,
    },
    EnvelopeOn {
        channel: usize,
        kind: EnvelopeKind,
    },
    EnvelopeOff {
        channel: usize,
        kind: EnvelopeKind,
    },
}

impl BackendCommand {
    pub fn channel(&self) -> usize {
        match *self {
            BackendCommand::OscillatorFrequency { channel, .. }
            | BackendCommand::OscillatorAmplitude { channel, .. }
            | BackendCommand::MixGain { channel, .. }
            | BackendCommand::EnvelopeOn { channel, .. }
            | BackendCommand::EnvelopeOff { channel, .. } => channel,
        }
    }
}

/// Backend that drives no audio and keeps every command in issue order.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    commands: Vec<BackendCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    /// Hand back everything recorded so far and start a fresh log.
    pub fn take(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn for_channel(&self, channel: usize) -> impl Iterator<Item = &BackendCommand> {
        self.commands.iter().filter(move |c| c.channel() == channel)
    }
}

impl SynthBackend for RecordingBackend {
    fn set_oscillator_frequency(&mut self, channel: usize, osc: Oscillator, hz: f32) {
        self.commands
            .push(BackendCommand::OscillatorFrequency { channel, osc, hz });
    }

    fn set_oscillator_amplitude(&mut self, channel: usize, osc: Oscillator, level: f32) {
        self.commands
            .push(BackendCommand::OscillatorAmplitude { channel, osc, level });
    }

    fn set_mix_gain(&mut self, channel: usize, input: usize, gain: f32) {
        self.commands
            .push(BackendCommand::MixGain { channel, input, gain });
    }

    fn trigger_envelope_on(&mut self, channel: usize, kind: EnvelopeKind) {
        self.commands.push(BackendCommand::EnvelopeOn { channel, kind });
    }

    fn trigger_envelope_off(&mut self, channel: usize, kind: EnvelopeKind) {
        self.commands.push(BackendCommand::EnvelopeOff { channel, kind });
    }
}
