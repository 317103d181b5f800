use anyhow::Context;
use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub utc_offset: Option<FixedOffset>, // pins the day key; None follows the host zone
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().with_context(|| format!("invalid APP_PORT {v:?}"))?,
            Err(_) => 8080,
        };
        let utc_offset = match std::env::var("APP_UTC_OFFSET") {
            Ok(v) => Some(parse_utc_offset(&v)?),
            Err(_) => None,
        };
        Ok(Self {
            host,
            port,
            utc_offset,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_utc_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    raw.trim()
        .parse::<FixedOffset>()
        .with_context(|| format!("invalid APP_UTC_OFFSET {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_offsets() {
        let east = parse_utc_offset("+02:00").expect("positive offset");
        assert_eq!(east.local_minus_utc(), 2 * 3600);

        let west = parse_utc_offset(" -05:30 ").expect("negative offset");
        assert_eq!(west.local_minus_utc(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn rejects_unsigned_or_garbage_offsets() {
        assert!(parse_utc_offset("02:00").is_err());
        assert!(parse_utc_offset("utc").is_err());
        let err = parse_utc_offset("").unwrap_err();
        assert!(err.to_string().contains("APP_UTC_OFFSET"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = AppConfig {
            host: "127.0.0.1".into(),
            port: 9000,
            utc_offset: None,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
    }
}
