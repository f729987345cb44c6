use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// Allowed cross-origin request sources; "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "0.0.0.0".to_owned(),
            port: 8000,
            default_page_size: 10,
            max_page_size: 100,
            cors_origins: vec!["*".to_owned()],
        }
    }
}
