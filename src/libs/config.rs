//! Database connection settings.
//!
//! Settings come from the process environment, optionally seeded from a `.env`
//! file by the binary before [`DbConfig::from_env`] is called. The struct is
//! built once and handed to the connection provider; nothing else in the crate
//! reads the environment for database settings.
//!
//! | variable      | meaning                                                    |
//! |---------------|------------------------------------------------------------|
//! | `DB_NAME`     | database name, stored as `<DB_NAME>.db` (required)         |
//! | `DB_HOST`     | directory holding the database file                        |
//! | `DB_PORT`     | port number; validated, unused by the embedded store       |
//! | `DB_USER`     | user name; reported in diagnostics                         |
//! | `DB_PASSWORD` | password; never printed                                    |
//!
//! Missing values are not an error here. They surface as an unavailable store
//! the first time a connection is requested.

use std::env;
use std::fmt;

pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl DbConfig {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`. Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            name: read(ENV_DB_NAME),
            user: read(ENV_DB_USER),
            password: read(ENV_DB_PASSWORD),
            host: read(ENV_DB_HOST),
            port: read(ENV_DB_PORT),
        }
    }

    /// Settings for a database named `name` stored in directory `host`.
    pub fn local(name: &str, host: impl Into<String>) -> Self {
        Self {
            name: Some(name.to_string()),
            host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Parsed port, `Ok(None)` when unset.
    pub fn port_number(&self) -> Result<Option<u16>, String> {
        match &self.port {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map(Some)
                .map_err(|_| format!("{} must be a port number, got '{}'", ENV_DB_PORT, raw)),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
