use std::net::{IpAddr, SocketAddr};
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed to call the API.
    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_line_overrides() {
        let config = Config::try_parse_from([
            "pension-quote",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--origin-urls",
            "https://ferienhof.example,http://localhost:5173",
        ]).unwrap();

        assert_eq!(config.listen_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.origin_urls.split(',').count(), 2);
    }
}
