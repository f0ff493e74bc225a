//! Notification sink.
//!
//! The dispatcher hands a `Notice` to a `Notifier` when an interval ends.
//! Delivery is fire-and-forget: errors are reported back only so they can
//! be logged.

use notify_rust::Notification;

use crate::error::Result;
use crate::model::constants::{NOTICE_SOUND, NOTICE_SUBTITLE_TIME_OUT, NOTICE_TITLE};

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// Play the default alert sound.
    pub sound: bool,
}

impl Notice {
    /// The "Time out" notice sent when an interval elapses.
    pub fn time_out(body: impl Into<String>) -> Self {
        Self {
            title: NOTICE_TITLE.to_string(),
            subtitle: NOTICE_SUBTITLE_TIME_OUT.to_string(),
            body: body.into(),
            sound: true,
        }
    }

    /// Sound name handed to the notification center, if any.
    pub fn sound_name(&self) -> Option<&'static str> {
        self.sound.then_some(NOTICE_SOUND)
    }
}

/// Something that can show a `Notice`.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notice: &Notice) -> Result<()> {
        (**self).notify(notice)
    }
}

/// Delivers notices through the OS notification center via notify-rust.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&mut self, notice: &Notice) -> Result<()> {
        let mut notification = Notification::new();
        notification.summary(&notice.title).body(&notice.body);

        // Subtitles are a macOS-only field.
        #[cfg(target_os = "macos")]
        notification.subtitle(&notice.subtitle);

        if let Some(sound) = notice.sound_name() {
            notification.sound_name(sound);
        }

        notification.show()?;
        Ok(())
    }
}

/// Drops every notice.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SilentNotifier;

#[cfg(test)]
impl Notifier for SilentNotifier {
    fn notify(&mut self, _notice: &Notice) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_out_notice() {
        let notice = Notice::time_out("2 interval(s) passed");
        assert_eq!(notice.title, "Pomodoro");
        assert_eq!(notice.subtitle, "Time out");
        assert_eq!(notice.body, "2 interval(s) passed");
        assert!(notice.sound);
    }

    #[test]
    fn test_time_out_notice_plays_default_alert_sound() {
        let notice = Notice::time_out("1 interval(s) passed");
        assert_eq!(
            notice.sound_name(),
            Some("NSUserNotificationDefaultSoundName")
        );
    }

    #[test]
    fn test_muted_notice_has_no_sound_name() {
        let notice = Notice {
            sound: false,
            ..Notice::time_out("x")
        };
        assert_eq!(notice.sound_name(), None);
    }

    #[test]
    fn test_silent_notifier_accepts_everything() {
        let mut notifier = SilentNotifier;
        assert!(notifier.notify(&Notice::time_out("x")).is_ok());
    }

    #[test]
    fn test_boxed_notifier_forwards() {
        let mut boxed: Box<dyn Notifier> = Box::new(SilentNotifier);
        assert!(boxed.notify(&Notice::time_out("x")).is_ok());
    }
}
