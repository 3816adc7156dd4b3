use std::time::{Duration, Instant};

use ratatui::style::Style;

use crate::ui::theme::{COLOR_GOOD, COLOR_WARN};

const STATUS_TTL: Duration = Duration::from_secs(4);

/// Transient operator notice shown in the footer until it expires.
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    pub expires_at: Instant,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: String) -> Self {
        Self {
            level,
            text,
            expires_at: Instant::now() + STATUS_TTL,
        }
    }

    pub fn info(text: String) -> Self {
        Self::new(StatusLevel::Info, text)
    }

    pub fn warn(text: String) -> Self {
        Self::new(StatusLevel::Warn, text)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}

impl StatusLevel {
    pub fn style(self) -> Style {
        match self {
            StatusLevel::Info => Style::default().fg(COLOR_GOOD),
            StatusLevel::Warn => Style::default().fg(COLOR_WARN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_message_is_not_expired() {
        let message = StatusMessage::info("terminated".to_string());
        assert!(!message.is_expired());
        assert_eq!(message.level, StatusLevel::Info);
    }
}
