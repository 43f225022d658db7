//! User-facing notifications.
//!
//! Fire-and-forget transient messages. The surface never reads anything
//! back from a notifier.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Forwards notices to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => log::error!("{}", notice.message),
            NoticeLevel::Success | NoticeLevel::Info => log::info!("{}", notice.message),
        }
    }
}

/// Keeps every notice in memory; cheap to clone and share between the
/// surface and whoever inspects it.
#[derive(Debug, Default, Clone)]
pub struct NoticeLog {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub(crate) mod messages {
    pub const READY: &str = "✨ Let your feelings flow! Draw anything you want!";
    pub const CLEARED: &str = "🧹 Canvas cleared! Fresh start!";
    pub const ERASER_MODE: &str = "✨ Eraser mode";
    pub const BRUSH_MODE: &str = "🖌️ Brush mode";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn notice_log_is_shared_between_clones() {
        let log = NoticeLog::new();
        let sink: Box<dyn Notifier> = Box::new(log.clone());
        sink.notify(Notice::info(messages::CLEARED));
        sink.notify(Notice::error("boom"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(Notice::error("boom")));
        assert_eq!(log.notices()[0].level, NoticeLevel::Info);
    }
}
