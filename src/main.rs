use clap::Parser;
use job_portal_client::config::cli::{Command, HttpMethod};
use job_portal_client::core::format;
use job_portal_client::core::page::NAV_AUTH_ID;
use job_portal_client::core::{render, ConfigProvider, RegisterRequest};
use job_portal_client::utils::error::ErrorSeverity;
use job_portal_client::utils::logger;
use job_portal_client::{
    ApiClient, Auth, CliConfig, ClientSettings, LocalStorage, LoggingNavigator, MemoryDocument,
    Page, Result, ToastKind,
};
use std::sync::Arc;

const LOGGED_OUT_NAV: &str = r#"<a class="btn btn-outline-light me-2" href="/login">Login</a><a class="btn btn-primary" href="/register">Register</a>"#;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config.command);
    }

    let result = match config.settings() {
        Ok(settings) => run(config.command, settings).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, settings: ClientSettings) -> Result<()> {
    tracing::debug!("Using API at {}", settings.base_url());

    let storage = Arc::new(LocalStorage::open(settings.storage_path())?);
    let auth = Auth::new(storage);

    match command {
        Command::Login { email, password } => {
            let api = ApiClient::from_config(&settings, auth);
            let response = api.login(&email, &password).await?;
            println!("✅ Logged in as {} ({})", response.name, response.role);
            println!("➡️ Dashboard: {}", response.role.dashboard_path());
        }
        Command::Register {
            name,
            email,
            password,
            role,
            phone,
            company_name,
        } => {
            let api = ApiClient::from_config(&settings, auth);
            let request = RegisterRequest {
                name,
                email,
                password,
                role: role.into(),
                phone,
                company_name,
            };
            let response = api.register(&request).await?;
            println!("✅ Registered {} ({})", response.name, response.role);
        }
        Command::Logout => {
            auth.logout(&LoggingNavigator)?;
            println!("👋 Logged out");
        }
        Command::Whoami { remote } => {
            if remote {
                let api = ApiClient::from_config(&settings, auth);
                let user = api.current_user().await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                match auth.user() {
                    Some(user) if auth.is_logged_in() => {
                        println!("{} <{}>", user.name, user.email.as_deref().unwrap_or("-"));
                        println!("Role: {}", user.role);
                        println!("Dashboard: {}", user.role.dashboard_path());
                    }
                    _ => println!("Not logged in"),
                }
            }
        }
        Command::Request {
            method,
            endpoint,
            data,
        } => {
            let body = method.request_body(&data)?.unwrap_or_default();
            let api = ApiClient::from_config(&settings, auth);

            let response: serde_json::Value = match method {
                HttpMethod::Get => api.get(&endpoint).await?,
                HttpMethod::Post => api.post(&endpoint, &body).await?,
                HttpMethod::Put => api.put(&endpoint, &body).await?,
                HttpMethod::Delete => api.delete(&endpoint).await?,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Nav => {
            let document =
                Arc::new(MemoryDocument::new().with_element(NAV_AUTH_ID, LOGGED_OUT_NAV));
            let page = Page::new(Arc::clone(&document), auth);
            page.on_load();
            println!("{}", document.inner_html(NAV_AUTH_ID).unwrap_or_default());
        }
        Command::Toast { message, kind } => {
            println!("{}", render::toast_markup(&message, ToastKind::parse(&kind)));
        }
        Command::Salary { min, max, currency } => {
            let currency = currency.unwrap_or_else(|| settings.default_currency().to_string());
            println!("{}", format::format_salary(min, max, Some(&currency)));
        }
        Command::Badge { status } => {
            println!("{}", render::status_badge(&status));
        }
        Command::Date { value, time } => {
            let formatted = if time {
                format::format_date_time(value.as_deref())
            } else {
                format::format_date(value.as_deref())
            };
            println!("{}", formatted);
        }
        Command::Truncate { text, length } => {
            println!("{}", format::truncate(Some(&text), length));
        }
    }

    Ok(())
}
