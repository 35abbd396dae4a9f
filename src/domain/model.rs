use serde::{Deserialize, Serialize};
use std::fmt;

/// 使用者角色。未知的角色字串原樣保留，確保存取來回一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Recruiter,
    JobSeeker,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Recruiter => "RECRUITER",
            Role::JobSeeker => "JOB_SEEKER",
            Role::Other(value) => value,
        }
    }

    /// 依角色決定儀表板路徑，其餘角色一律導向求職者儀表板
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Recruiter => "/recruiter/dashboard",
            _ => "/seeker/dashboard",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ADMIN" => Role::Admin,
            "RECRUITER" => Role::Recruiter,
            "JOB_SEEKER" => Role::JobSeeker,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            user_id: None,
            name: name.into(),
            email: None,
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Applied,
    UnderReview,
    Shortlisted,
    InterviewScheduled,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::UnderReview => "UNDER_REVIEW",
            ApplicationStatus::Shortlisted => "SHORTLISTED",
            ApplicationStatus::InterviewScheduled => "INTERVIEW_SCHEDULED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Hired => "HIRED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "bg-info",
            ApplicationStatus::UnderReview => "bg-warning text-dark",
            ApplicationStatus::Shortlisted => "bg-success",
            ApplicationStatus::InterviewScheduled => "bg-purple",
            ApplicationStatus::Rejected => "bg-danger",
            ApplicationStatus::Hired => "bg-teal",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 後端統一的回應外層 `{ success, message, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// 登入 / 註冊成功後後端回傳的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl AuthResponse {
    pub fn user(&self) -> User {
        User {
            user_id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keeps_unknown_values() {
        let role: Role = serde_json::from_str("\"HIRING_MANAGER\"").unwrap();
        assert_eq!(role, Role::Other("HIRING_MANAGER".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"HIRING_MANAGER\"");
        assert_eq!(role.dashboard_path(), "/seeker/dashboard");
    }

    #[test]
    fn test_role_dashboard_paths() {
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
        assert_eq!(Role::Recruiter.dashboard_path(), "/recruiter/dashboard");
        assert_eq!(Role::JobSeeker.dashboard_path(), "/seeker/dashboard");
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User = serde_json::from_str(
            r#"{"userId":7,"name":"Asha","email":"asha@example.com","role":"RECRUITER","phone":"123"}"#,
        )
        .unwrap();
        assert_eq!(user.user_id, Some(7));
        assert_eq!(user.role, Role::Recruiter);
    }

    #[test]
    fn test_auth_response_defaults_token_type() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"token":"abc","userId":1,"name":"Ravi","email":"ravi@example.com","role":"JOB_SEEKER"}"#,
        )
        .unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user().name, "Ravi");
    }

    #[test]
    fn test_application_status_parse() {
        assert_eq!(
            ApplicationStatus::parse("INTERVIEW_SCHEDULED"),
            Some(ApplicationStatus::InterviewScheduled)
        );
        assert_eq!(ApplicationStatus::parse("ARCHIVED"), None);
    }

    #[test]
    fn test_api_response_without_data() {
        let response: ApiResponse<AuthResponse> = serde_json::from_str(
            r#"{"success":false,"message":"Invalid email or password"}"#,
        )
        .unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid email or password"));
    }
}
