use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;
const BIND_HOST: &str = "0.0.0.0";

/// Credentials for the account that acts on behalf of every request.
pub struct DefaultUserConfig {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Credentials for the acting user, only set when both variables are present.
    /// Startup falls back to built-in credentials otherwise.
    pub default_user: Option<DefaultUserConfig>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable if set.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable is either valid or absent
    /// - `Err(AppError::ConfigErr)` - `PORT` is not a port number, or only one of
    ///   `DEFAULT_USER_EMAIL` / `DEFAULT_USER_PASSWORD` is set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let default_user = match (lookup("DEFAULT_USER_EMAIL"), lookup("DEFAULT_USER_PASSWORD")) {
            (Some(email), Some(password)) => Some(DefaultUserConfig { email, password }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("DEFAULT_USER_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("DEFAULT_USER_EMAIL".to_string()).into())
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url,
            port,
            default_user,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}
