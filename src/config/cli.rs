use crate::config::{ClientSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "job-portal")]
#[command(about = "Command-line client for the job portal API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "API base URL, e.g. http://localhost:8080/api")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "File used to persist the session")]
    pub storage_path: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// POST/PUT 必須帶 `--data`；GET/DELETE 不送 body
    pub fn request_body(&self, data: &Option<String>) -> Result<Option<serde_json::Value>> {
        match self {
            HttpMethod::Post | HttpMethod::Put => {
                let raw = validate_required_field("--data", data)?;
                Ok(Some(serde_json::from_str(raw)?))
            }
            HttpMethod::Get | HttpMethod::Delete => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log in and save the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and save the session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "JOB_SEEKER")]
        role: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company_name: Option<String>,
    },
    /// Clear the saved session
    Logout,
    /// Show the saved session, or the server's view of it with --remote
    Whoami {
        #[arg(long)]
        remote: bool,
    },
    /// Send an authenticated request and print the JSON response
    Request {
        #[arg(value_enum)]
        method: HttpMethod,
        endpoint: String,
        #[arg(long, help = "JSON request body for POST/PUT")]
        data: Option<String>,
    },
    /// Print the navigation fragment for the saved session
    Nav,
    /// Render the toast markup for a message
    Toast {
        message: String,
        #[arg(long, default_value = "success", help = "\"success\" or anything else for an error toast")]
        kind: String,
    },
    /// Format a salary range
    Salary {
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Render the badge markup for an application status
    Badge { status: String },
    /// Format a date string
    Date {
        value: Option<String>,
        #[arg(long, help = "Include the time of day")]
        time: bool,
    },
    /// Shorten text, appending an ellipsis
    Truncate {
        text: String,
        #[arg(long, default_value_t = crate::core::format::DEFAULT_TRUNCATE_LENGTH)]
        length: usize,
    },
}

impl CliConfig {
    /// 預設值 < TOML 檔案 < 命令列參數
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = ClientSettings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            settings = settings.merge_toml(&file);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(storage_path) = &self.storage_path {
            settings.storage_path = storage_path.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = Some(timeout);
        }

        settings.validate()?;
        Ok(settings)
    }
}
