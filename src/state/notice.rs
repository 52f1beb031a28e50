//! The single transient message slot under the signup form.
//!
//! DESIGN
//! ======
//! A new notice overwrites the previous one; nothing is queued. Every notice
//! gets a fresh sequence number so an auto-hide timer scheduled for an older
//! notice cannot hide a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Styling kind of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class for the message element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub seq: u64,
    /// Delay before the notice hides itself.
    pub hide_after_ms: u32,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
    visible: bool,
    next_seq: u64,
}

impl NoticeSlot {
    /// Replace the current notice and reveal it. Returns its sequence number.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind, hide_after_ms: u32) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice {
            text: text.into(),
            kind,
            seq,
            hide_after_ms,
        });
        self.visible = true;
        seq
    }

    /// Hide the notice if it is still the one numbered `seq`.
    pub fn hide(&mut self, seq: u64) -> bool {
        match &self.current {
            Some(notice) if notice.seq == seq && self.visible => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// The last notice keeps its text and kind while hidden, like the
    /// `hidden` class on the message element.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `(seq, delay)` of the visible notice, for scheduling its auto-hide.
    pub fn pending_hide(&self) -> Option<(u64, u32)> {
        self.current
            .as_ref()
            .filter(|_| self.visible)
            .map(|n| (n.seq, n.hide_after_ms))
    }

    /// Class list for the message element, e.g. `"success"` or `"error hidden"`.
    pub fn class_list(&self) -> String {
        match (&self.current, self.visible) {
            (Some(notice), true) => notice.kind.class().to_owned(),
            (Some(notice), false) => format!("{} hidden", notice.kind.class()),
            (None, _) => "hidden".to_owned(),
        }
    }
}
