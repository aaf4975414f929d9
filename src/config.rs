use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;

const MONGODB_URI: &str = "MONGODB_URI";
const MONGODB_DATABASE: &str = "MONGODB_DATABASE";
const LISTEN_ADDR: &str = "LISTEN_ADDR";

#[derive(Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Loads configuration, aborting startup when it is unusable. A missing
    /// database target must never be discovered one request at a time.
    pub fn from_env() -> Config {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_from_env() -> Result<Config, String> {
        // Load .env file
        dotenv().ok();

        let mongodb_uri = env::var(MONGODB_URI)
            .map_err(|_| format!("failed to load environment variable {}", MONGODB_URI))?;

        let database = env::var(MONGODB_DATABASE).unwrap_or_else(|_| "eventline".to_string());

        let listen_addr = env::var(LISTEN_ADDR)
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse::<SocketAddr>()
            .map_err(|_| format!("failed to parse environment variable {}", LISTEN_ADDR))?;

        Ok(Config {
            mongodb_uri,
            database,
            listen_addr,
        })
    }
}
