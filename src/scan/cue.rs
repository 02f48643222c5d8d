//! Audio cues for scan results.
//!
//! Each cue is two short tones: rising for success, falling for error.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    Success,
    Error,
}

/// One tone of a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

const TONE_MS: u32 = 90;

impl AudioCue {
    pub fn tones(self) -> [Tone; 2] {
        let (first, second) = match self {
            Self::Success => (880, 1320),
            Self::Error => (440, 220),
        };
        [
            Tone {
                frequency_hz: first,
                duration_ms: TONE_MS,
            },
            Tone {
                frequency_hz: second,
                duration_ms: TONE_MS,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_ascends() {
        let [a, b] = AudioCue::Success.tones();
        assert!(b.frequency_hz > a.frequency_hz);
    }

    #[test]
    fn test_error_descends() {
        let [a, b] = AudioCue::Error.tones();
        assert!(b.frequency_hz < a.frequency_hz);
    }
}
