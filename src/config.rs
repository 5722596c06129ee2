use serde::{Deserialize, Serialize};

use std::{env, ffi::OsString, fmt, fs, path::Path};

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_LISTEN_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    pub mail: MailConfig,
}

/// SMTP account and the fixed sender/receiver pair every relayed form uses.
#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
    pub receiver: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .field("receiver", &self.receiver)
            .finish()
    }
}

const fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

const fn default_listen_port() -> u16 {
    DEFAULT_LISTEN_PORT
}

fn describe_env_error(e: envy::Error) -> String {
    match e {
        envy::Error::MissingValue(field) => {
            format!("MAIL_{} environment variable is required", field.to_uppercase())
        }
        other => format!("Failed to parse MAIL_* environment variables: {other}"),
    }
}

fn load_from_vars(vars: Vec<(String, String)>) -> Result<Config, Box<dyn std::error::Error>> {
    let listen_port = match vars.iter().find(|(key, _)| key == "RELAY_PORT") {
        Some((_, value)) => value
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse RELAY_PORT: {e}"))?,
        None => DEFAULT_LISTEN_PORT,
    };

    let mail = envy::prefixed("MAIL_")
        .from_iter::<_, MailConfig>(vars)
        .map_err(describe_env_error)?;

    Ok(Config { listen_port, mail })
}

/// Keeps the relay's own variables, skipping any that are not valid UTF-8.
fn relay_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| key.starts_with("MAIL_") || key == "RELAY_PORT")
        .collect()
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    load_from_vars(relay_vars(env::vars_os()))
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Explicit config file wins over the environment
    if let Ok(config_path) = env::var("MAIL_RELAY_CONFIG") {
        if Path::new(&config_path).exists() {
            let contents = fs::read_to_string(&config_path)?;
            return serde_yaml::from_str(&contents).map_err(Into::into);
        }

        tracing::warn!(
            "Config file '{}' not found, falling back to environment variables",
            config_path
        );
    }

    tracing::info!("Loading configuration from environment variables");
    load_from_env()
        .map_err(|e| format!("Environment variables are incomplete. Error: {e}").into())
}
