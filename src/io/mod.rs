// Purpose - MIDI dispatch side: event type and conversion into synth messages

pub mod converter;
pub mod midi;
