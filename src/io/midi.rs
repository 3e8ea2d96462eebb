#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    /// 14-bit wheel position, centred on zero (-8192..=8191)
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}
