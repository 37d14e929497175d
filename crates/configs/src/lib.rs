use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

/// Token settings. Without a secret, login hands out placeholder tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: None, token_ttl_hours: default_token_ttl() }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_token_ttl() -> i64 { 24 }
fn default_true() -> bool { true }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

impl AppConfig {
    /// Build a config purely from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = env_parse("SERVER_PORT") {
            cfg.server.port = port;
        }
        if let Some(w) = env_parse("TOKIO_WORKER_THREADS") {
            cfg.server.worker_threads = Some(w);
        }
        if let Some(n) = env_parse("DATABASE_MAX_CONNECTIONS") {
            cfg.database.max_connections = n;
        }
        if let Some(flag) = env_parse("DATABASE_RUN_MIGRATIONS") {
            cfg.database.run_migrations = flag;
        }
        if let Some(flag) = env_parse("DATABASE_SQLX_LOGGING") {
            cfg.database.sqlx_logging = flag;
        }
        if let Some(ttl) = env_parse("JWT_TTL_HOURS") {
            cfg.auth.token_ttl_hours = ttl;
        }
        cfg
    }

    /// Load `config.toml` (or `CONFIG_PATH`), then validate.
    /// 仅当配置文件不存在时回退到环境变量；解析错误直接返回
    pub fn load() -> Result<Self> {
        let path = config_path();
        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(content) => parse(&content).with_context(|| format!("failed to parse {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow!(e).context(format!("failed to read {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        // 归一化 server
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供 URL，则尝试从环境变量填充
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.is_none() {
            self.jwt_secret = std::env::var("JWT_SECRET").ok();
        }
        if matches!(&self.jwt_secret, Some(s) if s.trim().is_empty()) {
            self.jwt_secret = None;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_ttl_hours <= 0 {
            return Err(anyhow!("auth.token_ttl_hours must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [server]
        host = "0.0.0.0"
        port = 9090

        [database]
        url = "postgres://qa:qa@localhost:5432/qa_system"
        max_connections = 5
        min_connections = 1

        [auth]
        jwt_secret = "s3cret"
    "#;

    #[test]
    fn parses_full_file() {
        let mut cfg = parse(SAMPLE).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9090");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.database.max_connections, 5);
        assert!(cfg.database.run_migrations);
        assert_eq!(cfg.auth.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(cfg.auth.token_ttl_hours, 24);
    }

    // CONFIG_PATH 为进程级环境变量，相关用例串行执行
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn load_with_file(name: &str, content: Option<&str>) -> Result<AppConfig> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = std::env::temp_dir().join(format!("qa_cfg_{}_{name}.toml", std::process::id()));
        match content {
            Some(c) => std::fs::write(&path, c).unwrap(),
            None => { let _ = std::fs::remove_file(&path); }
        }
        std::env::set_var("CONFIG_PATH", &path);
        std::env::set_var("DATABASE_URL", "postgres://env/db");
        let res = AppConfig::load();
        std::env::remove_var("CONFIG_PATH");
        let _ = std::fs::remove_file(&path);
        res
    }

    #[test]
    fn load_rejects_malformed_file() {
        let res = load_with_file("broken", Some("[server]\nport = 9090\n[database\n"));
        assert!(res.is_err());
    }

    #[test]
    fn load_falls_back_to_env_when_missing() {
        let cfg = load_with_file("missing", None).unwrap();
        assert_eq!(cfg.database.url, "postgres://env/db");
    }

    #[test]
    fn load_reads_existing_file() {
        let cfg = load_with_file("ok", Some(SAMPLE)).unwrap();
        assert_eq!(cfg.server.port, 9090);
    }

    #[test]
    fn rejects_non_postgres_url() {
        let db = DatabaseConfig { url: "mysql://localhost/qa".into(), ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/qa".into(),
            max_connections: 1,
            min_connections: 4,
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_zero_port() {
        let mut s = ServerConfig { host: String::new(), port: 0, worker_threads: None };
        assert!(s.normalize().is_err());
    }

    #[test]
    fn rejects_non_positive_ttl() {
        let a = AuthConfig { jwt_secret: None, token_ttl_hours: 0 };
        assert!(a.validate().is_err());
    }
}
