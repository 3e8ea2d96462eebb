use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// Filter a MIDI event down to the messages the voice manager understands.
///
/// A note-on with velocity 0 is a note-off in running-status streams, so it
/// is translated here rather than reaching the allocator as a silent voice.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    match midi {
        MidiEvent::NoteOn {
            channel,
            key,
            velocity: 0,
        } if channel == channel_filter => Some(SynthMessage::NoteOff {
            note: key,
            velocity: 0,
        }),
        MidiEvent::NoteOn {
            channel,
            key,
            velocity,
        } if channel == channel_filter => Some(SynthMessage::NoteOn {
            note: key,
            velocity,
        }),
        MidiEvent::NoteOff {
            channel,
            key,
            velocity,
        } if channel == channel_filter => Some(SynthMessage::NoteOff {
            note: key,
            velocity,
        }),
        MidiEvent::PitchBend { channel, value } if channel == channel_filter => {
            Some(SynthMessage::PitchBend { value })
        }
        _ => None,
    }
}
