use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port("APP_PORT", "3000")?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            mail: MailConfig::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

const DEFAULT_SENDER_NAME: &str = "Summer Industrial Training Program";

/// Mail relay settings read from the environment at startup. The relay
/// address, credentials, and the fixed staff recipient are mandatory; the
/// service cannot deliver anything without them, so missing values fail the
/// boot instead of the first submission.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub staff_recipient: String,
    pub sender_name: String,
}

impl MailConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            smtp_host: required("SMTP_HOST")?,
            smtp_port: parse_port("SMTP_PORT", "587")?,
            smtp_user: required("SMTP_USER")?,
            smtp_password: required("SMTP_PASSWORD")?,
            staff_recipient: required("RECIPIENT_EMAIL")?,
            sender_name: env::var("MAIL_SENDER_NAME")
                .unwrap_or_else(|_| DEFAULT_SENDER_NAME.to_string()),
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar { var })
}

fn parse_port(var: &'static str, default: &str) -> Result<u16, ConfigError> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { var })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort { var: &'static str },
    InvalidHost { source: std::net::AddrParseError },
    MissingVar { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { var } => write!(f, "{var} must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingVar { var } => write!(f, "{var} must be set"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } | ConfigError::MissingVar { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
