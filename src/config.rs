use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub cors_origin: String,
    pub tls_cert_path: String,
    pub tls_key_path: String,
    pub admin_account_number: String,
    pub admin_password: String,
}

impl Config {
    /// Reads the configuration from the environment. The service cannot run
    /// without the required variables, so a missing one exits the process.
    pub fn init() -> Config {
        Config {
            db_url: required("DATABASE_URL"),
            jwt_secret: required("JWT_SECRET"),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            tls_cert_path: required("TLS_CERT_PATH"),
            tls_key_path: required("TLS_KEY_PATH"),
            admin_account_number: required("ADMIN_ACCOUNT_NUMBER"),
            admin_password: required("ADMIN_PASSWORD"),
        }
    }
}

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        eprintln!("Environment variable {name} is missing. Exiting...");
        std::process::exit(1);
    })
}
