//! Basic usage example

use envbind::Bindable;

#[derive(Debug, Default, Bindable)]
struct Config {
    // Loaded from the DATABASE_URL environment variable
    #[env = "DATABASE_URL"]
    pub database_url: String,

    // Numeric type: fails if MAX_CONNECTIONS is unset or malformed
    #[env = "MAX_CONNECTIONS"]
    pub max_connections: i64,

    // Boolean type: accepts 1/0/t/f/true/false in any case
    #[env = "DEBUG_MODE"]
    pub debug_mode: bool,

    // Never read from the environment
    #[env(skip)]
    pub started_by: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "10");
    std::env::set_var("DEBUG_MODE", "TRUE");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Started By: {:?}", config.started_by);

    Ok(())
}
