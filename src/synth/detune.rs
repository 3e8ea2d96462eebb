use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

/// Secondary-oscillator detune in cents, shared between the control surface
/// (writer) and the voice manager (reader, once per note-on).
///
/// Stored as raw `f32` bits in an atomic so either side can hold a handle
/// without a lock. Relaxed ordering is enough: the value is a lone scalar and
/// a note-on only needs some recent value, not a happens-before edge.
#[derive(Debug, Clone)]
pub struct DetuneCents {
    bits: Arc<AtomicU32>,
}

impl DetuneCents {
    pub fn new(cents: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(cents.to_bits())),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    pub fn set(&self, cents: f32) {
        self.bits.store(cents.to_bits(), Ordering::Relaxed);
    }
}

impl Default for DetuneCents {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_writes() {
        let writer = DetuneCents::new(7.0);
        let reader = writer.clone();
        assert_eq!(reader.get(), 7.0);

        writer.set(-12.5);
        assert_eq!(reader.get(), -12.5);
    }
}
