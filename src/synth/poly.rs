use crate::{
    control::ControlSurface,
    params::{SynthParams, VoiceLevels},
    synth::{
        backend::{EnvelopeKind, Oscillator, SynthBackend},
        clock::Clock,
        detune::DetuneCents,
        message::{MessageReceiver, SynthMessage},
        pitch::{cent_offset, note_to_frequency},
        voice::Voice,
    },
    NUM_VOICES,
};

/// Largest MIDI note number / velocity.
const MIDI_MAX: u8 = 127;

/// Fixed-pool polyphonic voice allocator.
///
/// Owns `N` voice slots and drives backend channel `i` for slot `i`. Free
/// slots are taken in index order; when every slot is sounding, the slot
/// with the oldest trigger time is stolen (lowest index on ties).
///
/// All lookups are linear scans over the fixed array so the cost of a MIDI
/// event is bounded regardless of traffic.
pub struct VoiceManager<B, C, const N: usize = NUM_VOICES> {
    voices: [Voice; N],
    backend: B,
    clock: C,
    detune: DetuneCents,
    levels: VoiceLevels,
}

impl<B: SynthBackend, C: Clock> VoiceManager<B, C, NUM_VOICES> {
    /// Build the stock six-voice manager.
    pub fn new(backend: B, clock: C, detune: DetuneCents, params: &SynthParams) -> Self {
        Self::with_pool(backend, clock, detune, params)
    }
}

impl<B: SynthBackend, C: Clock, const N: usize> VoiceManager<B, C, N> {
    const POOL_NOT_EMPTY: () = assert!(N > 0, "voice pool needs at least one slot");

    /// Build a manager with a pool of `N` slots, all free.
    pub fn with_pool(backend: B, clock: C, detune: DetuneCents, params: &SynthParams) -> Self {
        let () = Self::POOL_NOT_EMPTY;

        Self {
            voices: [Voice::new(); N],
            backend,
            clock,
            detune,
            levels: params.voice_levels(),
        }
    }

    /// First inactive slot in index order.
    pub fn find_free_voice(&self) -> Option<usize> {
        self.voices.iter().position(|v| !v.is_active())
    }

    /// First active slot sounding `note`, in index order.
    pub fn find_voice_by_note(&self, note: u8) -> Option<usize> {
        self.voices.iter().position(|v| v.plays(note))
    }

    /// Slot with the earliest trigger time, active or not.
    pub fn steal_oldest_voice(&self) -> usize {
        // min_by_key keeps the first of equal minima, so ties go to the lowest index
        self.voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.on_timestamp())
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        debug_assert!(note <= MIDI_MAX, "note {note} out of MIDI range");
        debug_assert!(velocity <= MIDI_MAX, "velocity {velocity} out of MIDI range");

        let slot = match self.find_free_voice() {
            Some(slot) => slot,
            None => {
                let slot = self.steal_oldest_voice();
                log::debug!(
                    "stealing voice {slot} (note {}) for note {note}",
                    self.voices[slot].note()
                );
                // Gate the stolen slot low before it is retriggered below
                for kind in EnvelopeKind::ALL {
                    self.backend.trigger_envelope_off(slot, kind);
                }
                slot
            }
        };

        let now = self.clock.now();
        self.voices[slot].start(note, velocity, now);

        let base_hz = note_to_frequency(note);
        let detuned_hz = cent_offset(base_hz, self.detune.get());
        log::trace!("note on {note} vel {velocity} -> voice {slot} ({base_hz:.2} Hz / {detuned_hz:.2} Hz)");

        self.backend
            .set_oscillator_frequency(slot, Oscillator::Primary, base_hz);
        self.backend
            .set_oscillator_amplitude(slot, Oscillator::Primary, 1.0);
        self.backend
            .set_oscillator_frequency(slot, Oscillator::Secondary, detuned_hz);
        self.backend
            .set_oscillator_amplitude(slot, Oscillator::Secondary, 1.0);

        // Velocity rides on the oscillator mix rather than the envelope depth
        let vel_scale = velocity as f32 / MIDI_MAX as f32;
        self.backend.set_mix_gain(
            slot,
            Oscillator::Primary.mix_input(),
            self.levels.osc1 * vel_scale,
        );
        self.backend.set_mix_gain(
            slot,
            Oscillator::Secondary.mix_input(),
            self.levels.osc2 * vel_scale,
        );

        for kind in EnvelopeKind::ALL {
            self.backend.trigger_envelope_on(slot, kind);
        }
    }

    /// Release the slot sounding `note`. Unmatched note-offs are ignored.
    pub fn note_off(&mut self, note: u8) {
        let Some(slot) = self.find_voice_by_note(note) else {
            log::trace!("note off {note}: no sounding voice");
            return;
        };

        log::trace!("note off {note} -> voice {slot}");
        self.voices[slot].release();
        for kind in EnvelopeKind::ALL {
            self.backend.trigger_envelope_off(slot, kind);
        }
    }

    /// Release every sounding slot, in index order.
    pub fn all_notes_off(&mut self) {
        for (slot, voice) in self.voices.iter_mut().enumerate() {
            if voice.is_active() {
                voice.release();
                for kind in EnvelopeKind::ALL {
                    self.backend.trigger_envelope_off(slot, kind);
                }
            }
        }
    }

    /// Apply one note message. Pitch bend belongs to the control surface and
    /// is ignored here.
    pub fn handle_message(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn { note, velocity } => self.note_on(note, velocity),
            SynthMessage::NoteOff { note, .. } => self.note_off(note),
            SynthMessage::AllNotesOff => self.all_notes_off(),
            SynthMessage::PitchBend { .. } => {}
        }
    }

    /// Drain queued messages in arrival order, routing pitch bend to `control`.
    ///
    /// A bend queued ahead of a note-on is applied before that note reads the
    /// detune value.
    pub fn process_messages<R: MessageReceiver>(&mut self, rx: &mut R, control: &ControlSurface) {
        while let Some(msg) = rx.pop() {
            match msg {
                SynthMessage::PitchBend { value } => control.pitch_bend(value),
                other => self.handle_message(other),
            }
        }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn active_count(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    /// Shared detune handle, for wiring a control surface to this manager.
    pub fn detune(&self) -> &DetuneCents {
        &self.detune
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
