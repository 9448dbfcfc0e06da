//! User visible error messages. Nothing in here ever blocks an interaction.

use crate::{ApiError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    pub fn push<S>(&mut self, kind: ErrorKind, message: S) -> NoticeId
    where
        S: Into<String>,
    {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Adds a notice for a failed request, prefixed with what was attempted.
    pub fn report(&mut self, action: &str, error: &ApiError) -> NoticeId {
        let message = match error.kind() {
            ErrorKind::Conflict => format!("{}: a record for this player and game already exists", action),
            _ => format!("{}: {}", action, error),
        };
        self.push(error.kind(), message)
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
