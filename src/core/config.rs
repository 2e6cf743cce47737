use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub admin: AdminConfig,
    pub geo_analyst: GeoAnalystConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Basic-auth credentials guarding the disaster registry write endpoints.
/// When either value is missing the write endpoints are not mounted.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Tunables for the map overview attached to every analysis
#[derive(Debug, Clone)]
pub struct GeoAnalystConfig {
    /// Max registry rows taken from the user's own region
    pub same_region_limit: usize,
    /// Max registry rows taken from other regions for comparison
    pub other_region_limit: usize,
    /// Detail text is truncated to this many characters
    pub detail_max_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            geo_analyst: GeoAnalystConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "VAM Geo-Analyst API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Geo-risk insurance recommendation API for VAM Insurance".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        basic_credentials(&self.username, &self.password)
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        let username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self { username, password })
    }

    /// Returns credentials in "username:password" format if admin routes are enabled
    pub fn credentials(&self) -> Option<String> {
        basic_credentials(&self.username, &self.password)
    }
}

impl GeoAnalystConfig {
    const DEFAULT_SAME_REGION_LIMIT: usize = 8;
    const DEFAULT_OTHER_REGION_LIMIT: usize = 2;
    const DEFAULT_DETAIL_MAX_CHARS: usize = 100;
    /// Hard cap on the number of map overview entries
    pub const MAX_OVERVIEW_ENTRIES: usize = 10;

    pub fn from_env() -> Result<Self, String> {
        let same_region_limit = env::var("GEO_MAP_SAME_REGION_LIMIT")
            .unwrap_or_else(|_| Self::DEFAULT_SAME_REGION_LIMIT.to_string())
            .parse::<usize>()
            .map_err(|_| "GEO_MAP_SAME_REGION_LIMIT must be a valid number".to_string())?;

        let other_region_limit = env::var("GEO_MAP_OTHER_REGION_LIMIT")
            .unwrap_or_else(|_| Self::DEFAULT_OTHER_REGION_LIMIT.to_string())
            .parse::<usize>()
            .map_err(|_| "GEO_MAP_OTHER_REGION_LIMIT must be a valid number".to_string())?;

        let detail_max_chars = env::var("GEO_DETAIL_MAX_CHARS")
            .unwrap_or_else(|_| Self::DEFAULT_DETAIL_MAX_CHARS.to_string())
            .parse::<usize>()
            .map_err(|_| "GEO_DETAIL_MAX_CHARS must be a valid number".to_string())?;

        Ok(Self::new(
            same_region_limit,
            other_region_limit,
            detail_max_chars,
        ))
    }

    /// Builds a config, clamping the limits so the overview stays within
    /// `MAX_OVERVIEW_ENTRIES`.
    pub fn new(same_region_limit: usize, other_region_limit: usize, detail_max_chars: usize) -> Self {
        let same_region_limit = same_region_limit.min(Self::MAX_OVERVIEW_ENTRIES);
        let other_region_limit =
            other_region_limit.min(Self::MAX_OVERVIEW_ENTRIES - same_region_limit);

        Self {
            same_region_limit,
            other_region_limit,
            detail_max_chars,
        }
    }
}

impl Default for GeoAnalystConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SAME_REGION_LIMIT,
            Self::DEFAULT_OTHER_REGION_LIMIT,
            Self::DEFAULT_DETAIL_MAX_CHARS,
        )
    }
}

fn basic_credentials(username: &Option<String>, password: &Option<String>) -> Option<String> {
    match (username, password) {
        (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_analyst_defaults() {
        let config = GeoAnalystConfig::default();
        assert_eq!(config.same_region_limit, 8);
        assert_eq!(config.other_region_limit, 2);
        assert_eq!(config.detail_max_chars, 100);
    }

    #[test]
    fn test_geo_analyst_limits_are_clamped() {
        let config = GeoAnalystConfig::new(9, 5, 100);
        assert_eq!(config.same_region_limit, 9);
        assert_eq!(config.other_region_limit, 1);

        let config = GeoAnalystConfig::new(50, 50, 100);
        assert_eq!(config.same_region_limit, 10);
        assert_eq!(config.other_region_limit, 0);
    }

    #[test]
    fn test_credentials_require_both_values() {
        let admin = AdminConfig {
            username: Some("admin".to_string()),
            password: None,
        };
        assert_eq!(admin.credentials(), None);

        let admin = AdminConfig {
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
        };
        assert_eq!(admin.credentials(), Some("admin:secret".to_string()));
    }
}
