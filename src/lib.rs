pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{LocalStorage, LoggingNavigator, MemoryDocument, MemoryStorage};
pub use crate::config::{ClientSettings, TomlConfig};
pub use crate::core::{api::ApiClient, auth::Auth, page::Page, render::ToastKind};
pub use crate::domain::model::{ApplicationStatus, Role, Session, User};
pub use crate::utils::error::{ClientError, Result};
