pub mod control; // Pitch wheel -> shared detune
pub mod io;
pub mod params;
pub mod synth; // Voice allocation and backend commands

/// Voice slots in the stock configuration.
pub const NUM_VOICES: usize = 6;
