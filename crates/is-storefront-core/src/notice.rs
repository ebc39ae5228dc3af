use is_api_types::ItemKey;

/// How long a toast stays on screen.
pub const NOTICE_TTL_MS: u64 = 3000;
/// Exit animation length before the toast element is removed.
pub const NOTICE_EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Cart,
    Favorite,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Cart => "cart",
            NoticeKind::Favorite => "favorite",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub created_ms: u64,
    /// Item the notice is about, when there is one.
    pub key: Option<ItemKey>,
}

#[derive(Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push_for(kind, message, None, now_ms)
    }

    pub fn push_for(
        &mut self,
        kind: NoticeKind,
        message: impl Into<String>,
        key: Option<ItemKey>,
        now_ms: u64,
    ) -> u64 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
            created_ms: now_ms,
            key,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drop notices older than the TTL; returns the ids removed.
    pub fn expire(&mut self, now_ms: u64) -> Vec<u64> {
        let mut expired = Vec::new();
        self.notices.retain(|n| {
            let alive = now_ms.saturating_sub(n.created_ms) < NOTICE_TTL_MS;
            if !alive {
                expired.push(n.id);
            }
            alive
        });
        expired
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }
}

pub fn added_to_project(name: &str) -> String {
    format!("{name} added to project")
}

pub fn favorite_toggled(name: &str, now_favorite: bool) -> String {
    if now_favorite {
        format!("{name} added to favorites")
    } else {
        format!("{name} removed from favorites")
    }
}
