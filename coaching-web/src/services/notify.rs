//! Notification banner backend

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::{Notice, NoticeLevel, Notifier};

use crate::utils::constants::NOTICE_DISMISS_MS;

/// Publishes notices into a signal rendered by the banner component.
///
/// A notice clears itself after [`NOTICE_DISMISS_MS`] unless a newer one
/// replaced it in the meantime.
pub struct SignalNotifier {
    notice: RwSignal<Option<Notice>>,
}

impl SignalNotifier {
    pub fn new(notice: RwSignal<Option<Notice>>) -> Self {
        Self { notice }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}", notice.message),
            NoticeLevel::Error => log::error!("{}", notice.message),
        }

        let slot = self.notice;
        slot.set(Some(notice.clone()));

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            slot.update(|current| {
                if current.as_ref() == Some(&notice) {
                    *current = None;
                }
            });
        });
    }
}
