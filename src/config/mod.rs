use std::env;
use std::time::Duration;

/// Runtime profile, selected by `APP_ENV`. Anything other than
/// `production` is treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub environment: Environment,
}

// Signing key substituted when JWT_SECRET is unset outside production.
const DEV_JWT_SECRET: &str = "dev-only-signing-key-not-for-production";

const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };
        let jwt_secret = resolve_jwt_secret(
            environment,
            env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
        )?;

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL")?,
            admin_password: env::var("ADMIN_PASSWORD")?,
            jwt_secret,
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_SECS),
            server_host: env::var("SERVER_HOST")?,
            server_port: env::var("SERVER_PORT")?.parse().unwrap_or(3000),
            environment,
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// The production profile refuses to start on an implicit signing key;
/// development substitutes a fixed local-only value so the login flow
/// works out of the box.
fn resolve_jwt_secret(
    environment: Environment,
    configured: Option<String>,
) -> Result<String, env::VarError> {
    match (environment, configured) {
        (_, Some(secret)) => Ok(secret),
        (Environment::Production, None) => Err(env::VarError::NotPresent),
        (Environment::Development, None) => {
            tracing::warn!("JWT_SECRET is not set; using the development-only signing key");
            Ok(DEV_JWT_SECRET.to_string())
        }
    }
}
