use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub rate_limit_window_secs: u64,
    pub rate_limit_requests: u32,
    pub cache_ttl_secs: u64,
    pub cache_random_ttl_secs: u64,
    pub cache_check_period_secs: u64,
    pub upstream_timeout_secs: u64,
    pub jikan_base_url: String,
    pub invidious_base_url: String,
    pub static_dir: String,
    pub body_limit_mb: usize,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            rate_limit_window_secs: 60,
            rate_limit_requests: 100,
            cache_ttl_secs: 600,
            cache_random_ttl_secs: 300,
            cache_check_period_secs: 120,
            upstream_timeout_secs: 30,
            jikan_base_url: "https://api.jikan.moe/v4".to_string(),
            invidious_base_url: "https://yewtu.be/api/v1".to_string(),
            static_dir: "public".to_string(),
            body_limit_mb: 50,
            rng_seed: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Config {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("PORT", defaults.server_port)?,
            rate_limit_window_secs: parse_var(
                "RATE_LIMIT_WINDOW",
                defaults.rate_limit_window_secs,
            )?,
            rate_limit_requests: parse_var("RATE_LIMIT_REQUESTS", defaults.rate_limit_requests)?,
            cache_ttl_secs: parse_var("CACHE_TTL", defaults.cache_ttl_secs)?,
            cache_random_ttl_secs: parse_var("CACHE_RANDOM_TTL", defaults.cache_random_ttl_secs)?,
            cache_check_period_secs: parse_var(
                "CACHE_CHECK_PERIOD",
                defaults.cache_check_period_secs,
            )?,
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT", defaults.upstream_timeout_secs)?,
            jikan_base_url: env::var("JIKAN_BASE_URL").unwrap_or(defaults.jikan_base_url),
            invidious_base_url: env::var("INVIDIOUS_BASE_URL")
                .unwrap_or(defaults.invidious_base_url),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            body_limit_mb: parse_var("BODY_LIMIT_MB", defaults.body_limit_mb)?,
            rng_seed: match env::var("RNG_SEED") {
                Ok(raw) => Some(parse_value("RNG_SEED", &raw)?),
                Err(_) => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("RATE_LIMIT_WINDOW", self.rate_limit_window_secs),
            ("RATE_LIMIT_REQUESTS", u64::from(self.rate_limit_requests)),
            ("CACHE_CHECK_PERIOD", self.cache_check_period_secs),
            ("UPSTREAM_TIMEOUT", self.upstream_timeout_secs),
        ];
        match positive.into_iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::Zero { name }),
            None => Ok(()),
        }
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn cache_random_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_random_ttl_secs)
    }

    pub fn cache_check_period(&self) -> Duration {
        Duration::from_secs(self.cache_check_period_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}
