//! Player feedback for habitat actions.
//!
//! Gameplay code only writes [`Notification`] messages. The consumers here
//! turn them into sound cues and toasts; neither can affect habitat state.

mod sound;
mod toast;

pub use sound::SoundFeedback;
pub use toast::{Toast, ToastKind, ToastQueue};

use bevy::prelude::*;

use crate::config::AppConfig;

/// Fire-and-forget signal describing something the player should notice
#[derive(Message, Debug, Clone, PartialEq)]
pub enum Notification {
    Placed,
    Deleted,
    Rotated,
    Cleared,
    Undo,
    Redo,
    /// UI click (selecting a catalog item or a placed module)
    Click,
    Saved,
    SaveFailed { reason: String },
    /// At least one resource is below the low threshold
    ResourceLow,
}

fn apply_sound_config(config: Res<AppConfig>, mut sound: ResMut<SoundFeedback>) {
    sound.enabled = config.data.sound_enabled;
}

fn play_notification_sounds(
    mut notifications: MessageReader<Notification>,
    sound: Res<SoundFeedback>,
) {
    for notification in notifications.read() {
        sound.notify(notification);
    }
}

fn queue_notification_toasts(
    mut notifications: MessageReader<Notification>,
    mut toasts: ResMut<ToastQueue>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs();
    for notification in notifications.read() {
        if let Some(toast) = Toast::for_notification(notification, now) {
            toasts.push(toast);
        }
    }
    toasts.expire(now);
}

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundFeedback>()
            .init_resource::<ToastQueue>()
            .add_message::<Notification>()
            .add_systems(
                Update,
                apply_sound_config.run_if(resource_changed::<AppConfig>),
            )
            .add_systems(
                PostUpdate,
                (play_notification_sounds, queue_notification_toasts),
            );
    }
}
