// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8085";
pub const DEFAULT_BACKEND_HOST: &str = "localhost";
pub const DEFAULT_BACKEND_PORT: u16 = 6379;

#[derive(Debug)]
pub enum ConfigError {
    InvalidArgument(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidArgument(msg) => {
                write!(f, "Configuration argument error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the backing key-value store lives. The wiki only knows an address;
/// connection handling belongs to the store client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
}

impl BackendConfig {
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    pub listen: SocketAddr,
    pub backend: BackendConfig,
}

impl WikiConfig {
    /// Parse command line arguments (without the program name). Accepted:
    /// an optional positional backend host, `--listen <addr>` and
    /// `--backend-port <port>`.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut listen: SocketAddr = DEFAULT_LISTEN_ADDR
            .parse()
            .expect("default listen address is valid");
        let mut host = DEFAULT_BACKEND_HOST.to_string();
        let mut port = DEFAULT_BACKEND_PORT;
        let mut saw_host = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--listen" => {
                    let value = args.next().ok_or_else(|| {
                        ConfigError::InvalidArgument("--listen requires an address".to_string())
                    })?;
                    listen = value.parse().map_err(|_| {
                        ConfigError::InvalidArgument(format!("invalid listen address '{}'", value))
                    })?;
                }
                "--backend-port" => {
                    let value = args.next().ok_or_else(|| {
                        ConfigError::InvalidArgument(
                            "--backend-port requires a port number".to_string(),
                        )
                    })?;
                    port = value.parse().map_err(|_| {
                        ConfigError::InvalidArgument(format!("invalid backend port '{}'", value))
                    })?;
                }
                other if other.starts_with("--") => {
                    return Err(ConfigError::InvalidArgument(format!(
                        "unknown option '{}'",
                        other
                    )));
                }
                other => {
                    if saw_host {
                        return Err(ConfigError::InvalidArgument(format!(
                            "unexpected extra argument '{}'",
                            other
                        )));
                    }
                    if other.trim().is_empty() {
                        return Err(ConfigError::InvalidArgument(
                            "backend host must not be empty".to_string(),
                        ));
                    }
                    host = other.to_string();
                    saw_host = true;
                }
            }
        }

        Ok(Self {
            listen,
            backend: BackendConfig { host, port },
        })
    }
}
