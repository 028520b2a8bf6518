//! アクションごとのUI状態とステータスバナー

use std::fmt;

/// ユーザー操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Extract,
    Save,
    Copy,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Extract => "extract",
            Action::Save => "save",
            Action::Copy => "copy",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1アクション分の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl UiStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            UiStatus::Success(msg) => Some(msg),
            _ => None,
        }
    }

    /// Error/Successのメッセージを消す（Loadingは維持）
    pub fn clear_message(&mut self) {
        if matches!(self, UiStatus::Error(_) | UiStatus::Success(_)) {
            *self = UiStatus::Idle;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// ステータスバナーの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn from_status(status: &UiStatus) -> Option<Self> {
        match status {
            UiStatus::Error(msg) => Some(Self {
                kind: BannerKind::Error,
                message: msg.clone(),
            }),
            UiStatus::Success(msg) => Some(Self {
                kind: BannerKind::Success,
                message: msg.clone(),
            }),
            UiStatus::Idle | UiStatus::Loading => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            BannerKind::Error => "❌",
            BannerKind::Success => "✅",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Error => "error",
            BannerKind::Success => "success",
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_message_keeps_loading() {
        let mut status = UiStatus::Loading;
        status.clear_message();
        assert_eq!(status, UiStatus::Loading);

        let mut status = UiStatus::Error("falhou".into());
        status.clear_message();
        assert_eq!(status, UiStatus::Idle);

        let mut status = UiStatus::Success("ok".into());
        status.clear_message();
        assert_eq!(status, UiStatus::Idle);
    }

    #[test]
    fn test_banner_projection() {
        assert_eq!(Banner::from_status(&UiStatus::Idle), None);
        assert_eq!(Banner::from_status(&UiStatus::Loading), None);

        let banner = Banner::from_status(&UiStatus::Error("boom".into())).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.to_string(), "❌ boom");

        let banner = Banner::from_status(&UiStatus::Success("ok".into())).unwrap();
        assert_eq!(banner.css_class(), "success");
    }
}
