//! Benchmarks for the note-event path.
//!
//! Run with: cargo bench
//!
//! A note-on runs inside the MIDI callback, so its cost bounds how much
//! control traffic can be handled between audio blocks.
//!
//! Benchmark groups:
//!   - voices/note_on     free-slot and stealing paths
//!   - voices/note_off    matched and stray note-offs

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use teency_voice::{
    params::SynthParams,
    synth::{
        backend::{EnvelopeKind, Oscillator, SynthBackend},
        clock::ManualClock,
        detune::DetuneCents,
        poly::VoiceManager,
    },
};

/// Backend that discards everything, so only allocation cost is measured.
struct NullBackend;

impl SynthBackend for NullBackend {
    fn set_oscillator_frequency(&mut self, _: usize, _: Oscillator, hz: f32) {
        black_box(hz);
    }

    fn set_oscillator_amplitude(&mut self, _: usize, _: Oscillator, level: f32) {
        black_box(level);
    }

    fn set_mix_gain(&mut self, _: usize, _: usize, gain: f32) {
        black_box(gain);
    }

    fn trigger_envelope_on(&mut self, channel: usize, _: EnvelopeKind) {
        black_box(channel);
    }

    fn trigger_envelope_off(&mut self, channel: usize, _: EnvelopeKind) {
        black_box(channel);
    }
}

fn manager<const N: usize>(clock: &ManualClock) -> VoiceManager<NullBackend, ManualClock, N> {
    VoiceManager::with_pool(
        NullBackend,
        clock.clone(),
        DetuneCents::new(7.0),
        &SynthParams::default(),
    )
}

fn bench_steal<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices/note_on");
    let clock = ManualClock::new(0);
    let mut synth = manager::<N>(&clock);

    // Fill the pool so every further note-on steals
    for note in 0..N as u8 {
        clock.advance(1);
        synth.note_on(40 + note, 100);
    }

    let mut note = 0u8;
    group.bench_with_input(BenchmarkId::new("steal", N), &N, |b, _| {
        b.iter(|| {
            clock.advance(1);
            note = (note + 1) % 128;
            synth.note_on(black_box(note), black_box(100));
        })
    });

    group.finish();
}

fn bench_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices/note_on");
    let clock = ManualClock::new(0);
    let mut synth = manager::<6>(&clock);

    group.bench_function("free_slot", |b| {
        b.iter(|| {
            clock.advance(1);
            synth.note_on(black_box(60), black_box(100));
            synth.note_off(black_box(60));
        })
    });

    group.finish();
}

fn bench_note_off(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices/note_off");
    let clock = ManualClock::new(0);
    let mut synth = manager::<6>(&clock);
    for note in [60, 64, 67, 72, 76] {
        synth.note_on(note, 100);
    }

    group.bench_function("stray", |b| {
        b.iter(|| synth.note_off(black_box(61)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_free,
    bench_steal::<6>,
    bench_steal::<32>,
    bench_note_off,
);
criterion_main!(benches);
