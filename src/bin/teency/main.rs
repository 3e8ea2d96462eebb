//! teency - headless voice allocation driver
//!
//! Replays a short MIDI phrase through the voice manager and logs every
//! backend command. Run with: RUST_LOG=debug cargo run

mod backend;

use backend::LogBackend;
use color_eyre::eyre::eyre;
use rtrb::RingBuffer;
use teency_voice::{
    control::ControlSurface,
    io::{converter::midi_to_synth, midi::MidiEvent},
    params::SynthParams,
    synth::{
        clock::MonotonicClock, detune::DetuneCents, message::SynthMessage, poly::VoiceManager,
    },
    NUM_VOICES,
};

const MIDI_CHANNEL: u8 = 0;
const QUEUE_SIZE: usize = 64;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = SynthParams::default();
    let mut voices = VoiceManager::new(
        LogBackend,
        MonotonicClock::new(),
        DetuneCents::default(),
        &params,
    );
    let control = ControlSurface::new(voices.detune().clone(), &params);

    let (mut tx, mut rx) = RingBuffer::<SynthMessage>::new(QUEUE_SIZE);

    // Seven-note stack on a six-voice pool: the last note steals the first
    let mut phrase: Vec<MidiEvent> = [48u8, 52, 55, 60, 64, 67, 72]
        .iter()
        .map(|&key| MidiEvent::NoteOn {
            channel: MIDI_CHANNEL,
            key,
            velocity: 100,
        })
        .collect();
    phrase.push(MidiEvent::PitchBend {
        channel: MIDI_CHANNEL,
        value: 8191,
    });
    phrase.push(MidiEvent::NoteOn {
        channel: MIDI_CHANNEL,
        key: 76,
        velocity: 127,
    });
    phrase.push(MidiEvent::NoteOff {
        channel: MIDI_CHANNEL,
        key: 48,
        velocity: 0,
    });
    phrase.push(MidiEvent::NoteOn {
        channel: MIDI_CHANNEL,
        key: 64,
        velocity: 0,
    });

    log::info!(
        "replaying {} events through {} voices",
        phrase.len(),
        NUM_VOICES
    );

    for event in phrase {
        if let Some(msg) = midi_to_synth(event, MIDI_CHANNEL) {
            tx.push(msg)
                .map_err(|_| eyre!("message queue full"))?;
        }
        // One event per tick so trigger times are distinct
        voices.process_messages(&mut rx, &control);
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    for (slot, voice) in voices.voices().iter().enumerate() {
        if voice.is_active() {
            log::info!(
                "voice {slot}: note {} vel {} since {} ms",
                voice.note(),
                voice.velocity(),
                voice.on_timestamp()
            );
        } else {
            log::info!("voice {slot}: free");
        }
    }

    voices.handle_message(SynthMessage::AllNotesOff);
    log::info!("{} voices sounding after all-notes-off", voices.active_count());

    Ok(())
}
