//! Compiler Configuration
//!
//! Replaces the process-wide `global` lookup in util.ts: the host environment
//! is resolved once from `CompilerConfig` and handed to whoever needs it.

use crate::value::{StringMap, Value};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that overrides the configured host.
pub const HOST_ENV_VAR: &str = "NG_HOST";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown host kind `{0}` (expected node, window, worker or detached)")]
    UnknownHost(String),
}

/// The kind of global scope the compiled code runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostKind {
    #[default]
    Node,
    Window,
    Worker,
    /// No global scope at all.
    Detached,
}

impl FromStr for HostKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "node" | "global" => Ok(HostKind::Node),
            "window" | "browser" => Ok(HostKind::Window),
            "worker" | "self" => Ok(HostKind::Worker),
            "detached" | "none" => Ok(HostKind::Detached),
            other => Err(ConfigError::UnknownHost(other.to_string())),
        }
    }
}

impl HostKind {
    /// Name of the global object in this host.
    pub fn global_name(&self) -> Option<&'static str> {
        match self {
            HostKind::Node => Some("global"),
            HostKind::Window => Some("window"),
            HostKind::Worker => Some("self"),
            HostKind::Detached => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    pub host: HostKind,
    /// `tracing` filter directive, e.g. `info` or `angular_compiler=debug`
    pub log_level: String,
    /// Extra properties visible on the global object.
    pub globals: serde_json::Map<String, serde_json::Value>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            host: HostKind::default(),
            log_level: "info".to_string(),
            globals: serde_json::Map::new(),
        }
    }
}

impl CompilerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: CompilerConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Apply `NG_HOST` if set.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = std::env::var(HOST_ENV_VAR) {
            self.host = host.parse()?;
        }
        Ok(self)
    }
}

/// The resolved global scope, created once at startup and passed explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalContext {
    host: HostKind,
    properties: StringMap,
}

impl GlobalContext {
    pub fn resolve(config: &CompilerConfig) -> Self {
        tracing::debug!(host = ?config.host, globals = config.globals.len(), "resolved global context");
        GlobalContext {
            host: config.host,
            properties: config
                .globals
                .iter()
                .map(|(name, value)| (name.clone(), Value::from(value.clone())))
                .collect(),
        }
    }

    pub fn host(&self) -> HostKind {
        self.host
    }

    /// `None` when running detached from any global scope.
    pub fn global_name(&self) -> Option<&'static str> {
        self.host.global_name()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &StringMap {
        &self.properties
    }
}
