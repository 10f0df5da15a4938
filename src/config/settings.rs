//! Process settings read from the environment.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "products_data.json";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// `HOST`, default `0.0.0.0`.
    pub host: IpAddr,
    /// `PORT`, default 3000.
    pub port: u16,
    /// `CATALOG_DATA_PATH`: JSON file backing the catalog.
    pub data_path: PathBuf,
    /// `CATALOG_BODY_LIMIT`: max request body in bytes.
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();
        Ok(Settings {
            host: parse_or("HOST", get("HOST"), defaults.host)?,
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            data_path: get("CATALOG_DATA_PATH").map(PathBuf::from).unwrap_or(defaults.data_path),
            body_limit: parse_or("CATALOG_BODY_LIMIT", get("CATALOG_BODY_LIMIT"), defaults.body_limit)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("CATALOG_DATA_PATH", "/tmp/catalog.json"),
            ("CATALOG_BODY_LIMIT", "1024"),
        ])
        .unwrap();
        assert_eq!(s.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(s.data_path, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(s.body_limit, 1024);
    }

    #[test]
    fn blank_port_falls_back_to_default() {
        assert_eq!(settings(&[("PORT", " ")]).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_bad_port() {
        let err = settings(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
