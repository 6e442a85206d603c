use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "mockvec-server")]
#[command(about = "Mock vector database HTTP endpoint for testing")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "MOCKVEC_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "MOCKVEC_PORT")]
    pub port: u16,

    /// Enable CORS for all origins
    #[arg(long, default_value = "false", env = "MOCKVEC_CORS")]
    pub cors: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::parse_from(["mockvec-server"]);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(!config.cors);
    }

    #[test]
    fn overrides() {
        let config =
            ServerConfig::parse_from(["mockvec-server", "-H", "127.0.0.1", "-p", "7530"]);
        assert_eq!(config.bind_addr(), "127.0.0.1:7530");
    }
}
