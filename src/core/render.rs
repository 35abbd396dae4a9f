//! HTML fragments for badges, toasts, the loading placeholder and the user menu.
//! Interpolated values are escaped; the surrounding markup is fixed.

use crate::core::{ApplicationStatus, User};

pub const FALLBACK_BADGE_CLASS: &str = "bg-secondary";
pub const PROFILE_PATH: &str = "/profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// 只有 "success" 算成功，其餘一律視為錯誤
    pub fn parse(value: &str) -> Self {
        if value == "success" {
            ToastKind::Success
        } else {
            ToastKind::Error
        }
    }

    fn header_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Error => "bg-danger",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn status_badge_class(status: &str) -> &'static str {
    ApplicationStatus::parse(status)
        .map(|s| s.badge_class())
        .unwrap_or(FALLBACK_BADGE_CLASS)
}

pub fn status_badge(status: &str) -> String {
    format!(
        r#"<span class="badge {}">{}</span>"#,
        status_badge_class(status),
        escape_html(&status.replace('_', " "))
    )
}

pub fn toast_markup(message: &str, kind: ToastKind) -> String {
    format!(
        r#"<div class="toast show position-fixed top-0 end-0 m-3" style="z-index: 9999">
    <div class="toast-header {header} text-white">
        <strong class="me-auto">{title}</strong>
        <button type="button" class="btn-close btn-close-white" data-bs-dismiss="toast"></button>
    </div>
    <div class="toast-body">{message}</div>
</div>"#,
        header = kind.header_class(),
        title = kind.title(),
        message = escape_html(message),
    )
}

pub fn loading_markup() -> &'static str {
    r#"<div class="text-center py-5">
    <div class="loading-spinner"></div>
    <p class="mt-3 text-muted">Loading...</p>
</div>"#
}

pub fn user_menu_markup(user: &User) -> String {
    format!(
        r##"<li class="nav-item dropdown">
    <a class="nav-link dropdown-toggle" href="#" data-bs-toggle="dropdown">
        <i class="fas fa-user-circle me-1"></i>{name}
    </a>
    <ul class="dropdown-menu dropdown-menu-end">
        <li><a class="dropdown-item" href="{dashboard}"><i class="fas fa-tachometer-alt me-2"></i>Dashboard</a></li>
        <li><a class="dropdown-item" href="{profile}"><i class="fas fa-user me-2"></i>Profile</a></li>
        <li><hr class="dropdown-divider"></li>
        <li><a class="dropdown-item" href="#" data-action="logout"><i class="fas fa-sign-out-alt me-2"></i>Logout</a></li>
    </ul>
</li>"##,
        name = escape_html(&user.name),
        dashboard = user.role.dashboard_path(),
        profile = PROFILE_PATH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn test_hired_badge() {
        let badge = status_badge("HIRED");
        assert!(badge.contains("bg-teal"));
        assert!(badge.contains("HIRED"));
    }

    #[test]
    fn test_unknown_badge_falls_back() {
        let badge = status_badge("ON_HOLD");
        assert!(badge.contains("bg-secondary"));
        assert!(badge.contains("ON HOLD"));
    }

    #[test]
    fn test_badge_replaces_every_underscore() {
        assert_eq!(
            status_badge("INTERVIEW_SCHEDULED"),
            r#"<span class="badge bg-purple">INTERVIEW SCHEDULED</span>"#
        );
        assert!(status_badge("UNDER_REVIEW").contains("bg-warning text-dark"));
    }

    #[test]
    fn test_toast_markup_by_kind() {
        let success = toast_markup("Saved", ToastKind::Success);
        assert!(success.contains("bg-success"));
        assert!(success.contains("<strong class=\"me-auto\">Success</strong>"));

        let error = toast_markup("Failed", ToastKind::parse("warning"));
        assert!(error.contains("bg-danger"));
        assert!(error.contains(">Error<"));
    }

    #[test]
    fn test_toast_message_is_escaped() {
        let toast = toast_markup("<script>x</script>", ToastKind::Error);
        assert!(toast.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!toast.contains("<script>"));
    }

    #[test]
    fn test_user_menu_links() {
        let menu = user_menu_markup(&User::new("Meera", Role::Recruiter));
        assert!(menu.contains("href=\"/recruiter/dashboard\""));
        assert!(menu.contains("href=\"/profile\""));
        assert!(menu.contains("Meera"));
        assert!(menu.contains("data-action=\"logout\""));
    }
}
