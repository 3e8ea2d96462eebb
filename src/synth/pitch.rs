/*
Pitch Conversion
================

  note   MIDI note number, 0..=127. A4 = 69 = 440 Hz.
  cents  1/100 of an equal-tempered semitone; 1200 cents = one octave.

    f(note)        = 440 * 2^((note - 69) / 12)
    f(base, cents) = base * 2^(cents / 1200)

Both are evaluated in f32, which is ample for audio-rate oscillator control.
*/

/// Concert pitch reference (A4).
pub const A4_HZ: f32 = 440.0;
/// MIDI note number of A4.
pub const A4_NOTE: u8 = 69;

/// Convert a MIDI note number to its equal-tempered frequency in Hz.
#[inline]
pub fn note_to_frequency(note: u8) -> f32 {
    A4_HZ * 2.0_f32.powf((note as f32 - A4_NOTE as f32) / 12.0)
}

/// Shift `base_hz` by `cents`.
#[inline]
pub fn cent_offset(base_hz: f32, cents: f32) -> f32 {
    base_hz * 2.0_f32.powf(cents / 1200.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= b.abs() * 1e-5
    }

    #[test]
    fn a4_and_octaves() {
        assert!(approx(note_to_frequency(69), 440.0));
        assert!(approx(note_to_frequency(81), 880.0));
        assert!(approx(note_to_frequency(57), 220.0));
    }

    #[test]
    fn middle_c() {
        assert!(approx(note_to_frequency(60), 261.625_58));
    }

    #[test]
    fn range_endpoints_are_finite() {
        let low = note_to_frequency(0);
        let high = note_to_frequency(127);
        assert!(approx(low, 8.175_799));
        assert!(approx(high, 12_543.854));
    }

    #[test]
    fn zero_cents_is_identity() {
        for note in [0u8, 33, 60, 69, 100, 127] {
            let f = note_to_frequency(note);
            assert_eq!(cent_offset(f, 0.0), f);
        }
    }

    #[test]
    fn twelve_hundred_cents_doubles() {
        for note in [0u8, 21, 60, 108, 127] {
            let f = note_to_frequency(note);
            assert!(approx(cent_offset(f, 1200.0), 2.0 * f));
        }
    }

    #[test]
    fn negative_cents_go_flat() {
        assert!(approx(cent_offset(440.0, -1200.0), 220.0));
        assert!(cent_offset(440.0, -7.0) < 440.0);
    }
}
