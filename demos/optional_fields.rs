//! Example demonstrating Option<T> for optional fields

use envbind::{Bindable, Snapshot};

#[derive(Debug, Default, Bindable)]
struct Config {
    // Required field
    #[env = "APP_NAME"]
    pub app_name: String,

    // Optional fields - None if not set
    #[env = "API_KEY"]
    pub api_key: Option<String>,
    #[env = "PORT"]
    pub port: Option<i64>,
    #[env = "DEBUG"]
    pub debug: Option<bool>,

    // Raw bytes - None if not set, Some(empty) if set to ""
    #[env = "BANNER"]
    pub banner: Option<Vec<u8>>,
}

fn main() -> anyhow::Result<()> {
    // Set only some variables; BANNER is set but empty
    let env = Snapshot::from([("APP_NAME", "my-application"), ("PORT", "8080"), ("BANNER", "")]);
    // API_KEY, DEBUG not set

    let config = Config::from_snapshot(&env)?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // None
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Debug: {:?}", config.debug); // None
    println!("  Banner: {:?}", config.banner); // Some([])

    Ok(())
}
