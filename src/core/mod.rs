pub mod api;
pub mod auth;
pub mod format;
pub mod page;
pub mod render;

pub use crate::domain::model::{
    ApiResponse, ApplicationStatus, AuthResponse, LoginRequest, RegisterRequest, Role, Session,
    User,
};
pub use crate::domain::ports::{ConfigProvider, Document, KeyValueStore, Navigator, NodeHandle};
pub use crate::utils::error::Result;
