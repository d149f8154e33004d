//! Toast notifications.
//!
//! A notification is plain data with a creation timestamp; the front end asks
//! [`Notification::is_expired`] on each tick instead of arming a timer.

use crate::types::NotificationKind;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> Self {
        Self { message: message.into(), kind, created_at: now }
    }

    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(message, NotificationKind::Success, now)
    }

    pub fn info(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(message, NotificationKind::Info, now)
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(message, NotificationKind::Error, now)
    }

    /// True once `ttl` has fully elapsed since creation.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_exactly_at_ttl() {
        let t0 = Utc::now();
        let ttl = Duration::milliseconds(3000);
        let n = Notification::success("saved", t0);
        assert!(!n.is_expired(t0, ttl));
        assert!(!n.is_expired(t0 + Duration::milliseconds(2999), ttl));
        assert!(n.is_expired(t0 + Duration::milliseconds(3000), ttl));
    }
}
