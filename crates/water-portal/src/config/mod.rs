use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

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

/// Top-level configuration for the portal service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulation: SimulationConfig::from_env()?,
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

/// Artificial latencies standing in for the municipal backend, plus the
/// optional property directory export that replaces the built-in table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub lookup_delay: Duration,
    pub ocr_delay: Duration,
    pub assistant_delay: Duration,
    pub submit_delay: Duration,
    pub property_directory_csv: Option<PathBuf>,
}

impl SimulationConfig {
    /// No artificial waits; used by tests and the CLI commands.
    pub fn instant() -> Self {
        Self {
            lookup_delay: Duration::ZERO,
            ocr_delay: Duration::ZERO,
            assistant_delay: Duration::ZERO,
            submit_delay: Duration::ZERO,
            property_directory_csv: None,
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            lookup_delay: delay_from_env("APP_LOOKUP_DELAY_MS", 1000)?,
            ocr_delay: delay_from_env("APP_OCR_DELAY_MS", 2500)?,
            assistant_delay: delay_from_env("APP_ASSISTANT_DELAY_MS", 500)?,
            submit_delay: delay_from_env("APP_SUBMIT_DELAY_MS", 2000)?,
            property_directory_csv: env::var("APP_PROPERTY_DIRECTORY_CSV")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lookup_delay: Duration::from_millis(1000),
            ocr_delay: Duration::from_millis(2500),
            assistant_delay: Duration::from_millis(500),
            submit_delay: Duration::from_millis(2000),
            property_directory_csv: None,
        }
    }
}

fn delay_from_env(variable: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { variable }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDelay { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDelay { variable } => {
                write!(f, "{variable} must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDelay { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
