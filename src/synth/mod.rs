// Purpose: voice allocation and the command surface it drives
// This layer maps note events onto a fixed pool of backend channels

pub mod backend;
pub mod clock;
pub mod detune;
pub mod message;
pub mod pitch;
pub mod poly;
pub mod voice;
