use bevy::prelude::*;

use crate::constants::TOAST_LIFETIME_SECS;

use super::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    /// `Time::elapsed_secs` after which the toast is dropped
    pub expires_at: f32,
}

impl Toast {
    /// Only a few notifications are worth a toast; the rest are sound-only
    pub fn for_notification(notification: &Notification, now: f32) -> Option<Toast> {
        let (title, description, kind) = match notification {
            Notification::Saved => (
                "Game Saved",
                "Your Mars habitat has been saved successfully!".to_string(),
                ToastKind::Info,
            ),
            Notification::SaveFailed { reason } => {
                ("Save Failed", reason.clone(), ToastKind::Destructive)
            }
            Notification::Cleared => (
                "Habitat Cleared",
                "All items have been removed.".to_string(),
                ToastKind::Destructive,
            ),
            _ => return None,
        };

        Some(Toast {
            title: title.to_string(),
            description,
            kind,
            expires_at: now + TOAST_LIFETIME_SECS,
        })
    }
}

#[derive(Resource, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn expire(&mut self, now: f32) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
