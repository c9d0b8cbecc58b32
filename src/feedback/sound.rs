use bevy::prelude::*;

use super::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// A single synthesized beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
    pub volume: f32,
    /// Offset from the start of the cue
    pub delay_secs: f32,
}

impl Tone {
    const fn new(frequency_hz: f32, duration_secs: f32, waveform: Waveform, volume: f32) -> Self {
        Self {
            frequency_hz,
            duration_secs,
            waveform,
            volume,
            delay_secs: 0.0,
        }
    }

    const fn delayed(self, delay_secs: f32) -> Self {
        Self { delay_secs, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    pub tones: &'static [Tone],
}

impl SoundCue {
    pub const PLACEMENT: SoundCue = SoundCue {
        name: "placement",
        tones: &[Tone::new(400.0, 0.1, Waveform::Sine, 0.08)],
    };

    pub const DELETION: SoundCue = SoundCue {
        name: "deletion",
        tones: &[
            Tone::new(300.0, 0.15, Waveform::Sine, 0.08),
            Tone::new(200.0, 0.1, Waveform::Sine, 0.05).delayed(0.05),
        ],
    };

    pub const CLICK: SoundCue = SoundCue {
        name: "click",
        tones: &[Tone::new(600.0, 0.05, Waveform::Square, 0.05)],
    };

    pub const WARNING: SoundCue = SoundCue {
        name: "warning",
        tones: &[
            Tone::new(800.0, 0.2, Waveform::Triangle, 0.1),
            Tone::new(600.0, 0.2, Waveform::Triangle, 0.1).delayed(0.15),
        ],
    };

    pub const ROTATE: SoundCue = SoundCue {
        name: "rotate",
        tones: &[Tone::new(500.0, 0.08, Waveform::Sine, 0.06)],
    };

    pub fn for_notification(notification: &Notification) -> Option<SoundCue> {
        match notification {
            Notification::Placed => Some(Self::PLACEMENT),
            Notification::Deleted | Notification::Cleared => Some(Self::DELETION),
            Notification::Rotated => Some(Self::ROTATE),
            Notification::Undo
            | Notification::Redo
            | Notification::Click
            | Notification::Saved => Some(Self::CLICK),
            Notification::ResourceLow => Some(Self::WARNING),
            Notification::SaveFailed { .. } => None,
        }
    }
}

/// Audio output for sound cues
pub trait SoundSink: Send + Sync + 'static {
    fn play(&self, cue: &SoundCue);
}

/// Writes cues to the log instead of an audio device
pub struct LogSoundSink;

impl SoundSink for LogSoundSink {
    fn play(&self, cue: &SoundCue) {
        let tones = cue
            .tones
            .iter()
            .map(|t| {
                format!(
                    "{:.0}Hz {:?} {:.2}s vol {:.2} at +{:.2}s",
                    t.frequency_hz, t.waveform, t.duration_secs, t.volume, t.delay_secs
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        debug!(
            "Sound cue '{}' ({:.2}s): {}",
            cue.name,
            cue.total_duration(),
            tones
        );
    }
}

impl SoundCue {
    /// Seconds until the last tone finishes
    pub fn total_duration(&self) -> f32 {
        self.tones
            .iter()
            .map(|t| t.delay_secs + t.duration_secs)
            .fold(0.0_f32, f32::max)
    }
}

/// Sound collaborator with its own on/off switch
#[derive(Resource)]
pub struct SoundFeedback {
    pub enabled: bool,
    sink: Box<dyn SoundSink>,
}

impl Default for SoundFeedback {
    fn default() -> Self {
        Self::new(Box::new(LogSoundSink))
    }
}

impl SoundFeedback {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self {
            enabled: true,
            sink,
        }
    }

    pub fn notify(&self, notification: &Notification) {
        if !self.enabled {
            return;
        }
        if let Some(cue) = SoundCue::for_notification(notification) {
            self.sink.play(&cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingSink(Arc<Mutex<Vec<&'static str>>>);

    impl SoundSink for RecordingSink {
        fn play(&self, cue: &SoundCue) {
            self.0.lock().unwrap().push(cue.name);
        }
    }

    fn recording_feedback() -> (SoundFeedback, Arc<Mutex<Vec<&'static str>>>) {
        let played = Arc::new(Mutex::new(Vec::new()));
        let feedback = SoundFeedback::new(Box::new(RecordingSink(played.clone())));
        (feedback, played)
    }

    #[test]
    fn test_cues_for_actions() {
        assert_eq!(
            SoundCue::for_notification(&Notification::Placed),
            Some(SoundCue::PLACEMENT)
        );
        assert_eq!(
            SoundCue::for_notification(&Notification::Cleared),
            Some(SoundCue::DELETION)
        );
        assert_eq!(
            SoundCue::for_notification(&Notification::ResourceLow),
            Some(SoundCue::WARNING)
        );
        assert!(
            SoundCue::for_notification(&Notification::SaveFailed {
                reason: "disk full".to_string()
            })
            .is_none()
        );
    }

    #[test]
    fn test_two_tone_cues_are_staggered() {
        assert_eq!(SoundCue::WARNING.tones.len(), 2);
        assert_eq!(SoundCue::WARNING.tones[1].delay_secs, 0.15);
        assert_eq!(SoundCue::DELETION.tones[1].frequency_hz, 200.0);
    }

    #[test]
    fn test_total_duration_includes_delay() {
        assert!((SoundCue::WARNING.total_duration() - 0.35).abs() < 1e-6);
        assert!((SoundCue::CLICK.total_duration() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_enabled_feedback_plays() {
        let (feedback, played) = recording_feedback();
        feedback.notify(&Notification::Placed);
        feedback.notify(&Notification::Rotated);
        assert_eq!(*played.lock().unwrap(), vec!["placement", "rotate"]);
    }

    #[test]
    fn test_disabled_feedback_is_silent() {
        let (mut feedback, played) = recording_feedback();
        feedback.enabled = false;
        feedback.notify(&Notification::ResourceLow);
        assert!(played.lock().unwrap().is_empty());
    }
}
