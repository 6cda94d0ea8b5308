pub const DEFAULT_CONFIG_FILE: &str = "/etc/noteful/noteful.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTEFUL_";

pub const DEFAULT_DATABASE_PATH: &str = "/var/noteful/noteful.sqlite3";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

// opens a private database that lives as long as the connection
pub const IN_MEMORY_DATABASE_PATH: &str = ":memory:";
