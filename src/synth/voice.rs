use crate::synth::clock::Timestamp;

/// Bookkeeping for one synthesis channel.
///
/// The slot index in the pool is the backend channel index; slots are
/// repurposed, never created or destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Voice {
    active: bool,
    note: u8,
    velocity: u8,
    on_timestamp: Timestamp,
}

impl Voice {
    pub const fn new() -> Self {
        Self {
            active: false,
            note: 0,
            velocity: 0,
            on_timestamp: 0,
        }
    }

    /// Claim the slot for a new note. Refreshes the trigger time even when
    /// the slot was already sounding (stolen).
    pub fn start(&mut self, note: u8, velocity: u8, now: Timestamp) {
        self.active = true;
        self.note = note;
        self.velocity = velocity;
        self.on_timestamp = now;
    }

    /// Mark the slot free. Note, velocity and trigger time are kept so the
    /// slot still ranks by age if it is ever considered for stealing.
    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when this slot is sounding `note`.
    pub fn plays(&self, note: u8) -> bool {
        self.active && self.note == note
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    pub fn on_timestamp(&self) -> Timestamp {
        self.on_timestamp
    }
}
