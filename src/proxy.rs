//! Proxy routing for the search request.
//!
//! A proxy is given as a URL string. Only the scheme, host, port and
//! optional credentials are taken from it; any path or query is ignored.

use reqwest::Proxy as ReqwestProxy;
use url::Url;

use crate::{Result, SearchError};

/// Proxy protocol type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProxyProtocol {
    /// HTTP proxy
    #[default]
    Http,
    /// HTTPS proxy
    Https,
}

impl ProxyProtocol {
    /// Returns the URL scheme.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Port used when the proxy URL does not name one.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// A single proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy host (IP or domain)
    pub host: String,
    /// Proxy port
    pub port: u16,
    /// Proxy protocol
    pub protocol: ProxyProtocol,
    /// Optional username for authentication
    pub username: Option<String>,
    /// Optional password for authentication
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Creates a new proxy configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: ProxyProtocol::Http,
            username: None,
            password: None,
        }
    }

    /// Parses a proxy URL.
    ///
    /// The protocol is HTTPS when the string begins with `https`, HTTP
    /// otherwise. A missing port defaults to 443 or 80 accordingly.
    pub fn parse(proxy: &str) -> Result<Self> {
        let url = Url::parse(proxy)
            .map_err(|e| SearchError::Request(format!("invalid proxy URL '{}': {}", proxy, e)))?;

        let protocol = if proxy.starts_with("https") {
            ProxyProtocol::Https
        } else {
            ProxyProtocol::Http
        };

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SearchError::Request(format!("proxy URL '{}' has no host", proxy)))?;
        let port = url.port().unwrap_or_else(|| protocol.default_port());

        let mut config = Self::new(host, port).with_protocol(protocol);
        if !url.username().is_empty() {
            config.username = Some(url.username().to_string());
            config.password = url.password().map(str::to_string);
        }
        Ok(config)
    }

    /// Sets the proxy protocol.
    pub fn with_protocol(mut self, protocol: ProxyProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets authentication credentials.
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Returns the proxy URL string.
    pub fn url(&self) -> String {
        let scheme = self.protocol.scheme();

        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => {
                format!("{}://{}:{}@{}:{}", scheme, user, pass, self.host, self.port)
            }
            (Some(user), None) => format!("{}://{}@{}:{}", scheme, user, self.host, self.port),
            _ => format!("{}://{}:{}", scheme, self.host, self.port),
        }
    }

    /// Builds the reqwest proxy that routes all traffic through this config.
    pub fn to_reqwest(&self) -> Result<ReqwestProxy> {
        ReqwestProxy::all(self.url())
            .map_err(|e| SearchError::Request(format!("failed to create proxy: {}", e)))
    }
}
