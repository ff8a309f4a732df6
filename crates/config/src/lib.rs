//! Process-wide settings, read once at startup.

const DEFAULT_APP_NAME: &str = "Check Tarefas";
const DEFAULT_DATABASE_URL: &str = "sqlite://check_tarefas.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Builds settings from the environment, honoring a `.env` file when
    /// present. Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "Invalid PORT; using default");
                    defaults.port
                }
            },
            Err(_) => defaults.port,
        };

        Self {
            app_name: std::env::var("APP_NAME").unwrap_or(defaults.app_name),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
        }
    }
}
