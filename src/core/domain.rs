use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::str::FromStr;
use crate::core::library::{LibraryError, LibraryResult};

const TEST_DATABASE_URL: &str = "sqlite::memory:";
const PRODUCTION_DATABASE_URL: &str = "sqlite://books.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Environment selects which database the service talks to
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Environment {
    Test,
    Production,
}

impl Environment {
    pub fn default_database_url(&self) -> &'static str {
        match self {
            Environment::Test => TEST_DATABASE_URL,
            Environment::Production => PRODUCTION_DATABASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(LibraryError::validation(
                "invalid configuration", vec![format!("BOOKS_ENV {:?}: expected test or production", s)])),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

// Configuration abstracts config options for the books service. It is built once at
// startup and handed to the factories, nothing reads the environment afterwards.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub environment: Environment,
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: Option<SocketAddr>,
}

impl Configuration {
    pub fn new(environment: Environment) -> Self {
        Configuration {
            environment,
            database_url: environment.default_database_url().to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            listen_addr: None,
        }
    }

    pub fn with_database_url(mut self, database_url: &str) -> Self {
        self.database_url = database_url.to_string();
        self
    }

    /// Reads `BOOKS_ENV`, `DATABASE_URL`, `BOOKS_MAX_CONNECTIONS` and `BOOKS_LISTEN_ADDR`.
    /// `DATABASE_URL` only applies to the production environment so tests never touch it.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let environment = match lookup("BOOKS_ENV") {
            Some(name) => name.parse::<Environment>()?,
            None => Environment::Production,
        };
        let mut config = Configuration::new(environment);
        if environment == Environment::Production {
            if let Some(url) = lookup("DATABASE_URL") {
                config = config.with_database_url(url.as_str());
            }
        }
        if let Some(max) = lookup("BOOKS_MAX_CONNECTIONS") {
            config.max_connections = max.parse::<NonZeroU32>().map_err(|err| LibraryError::validation(
                "invalid configuration", vec![format!("BOOKS_MAX_CONNECTIONS {:?}: {}", max, err)]))?.get();
        }
        if let Some(addr) = lookup("BOOKS_LISTEN_ADDR") {
            config.listen_addr = Some(addr.parse::<SocketAddr>().map_err(|err| LibraryError::validation(
                "invalid configuration", vec![format!("BOOKS_LISTEN_ADDR {:?}: {}", addr, err)]))?);
        }
        Ok(config)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
