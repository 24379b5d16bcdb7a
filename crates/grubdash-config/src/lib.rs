//! grubdash-config
//!
//! Layered YAML configuration for the daemon.
//!
//! - YAML documents are merged in order: earlier docs are base, later docs
//!   override (objects merge key by key, everything else is replaced).
//! - The merged document is rendered as canonical JSON and hashed (SHA-256)
//!   so a running daemon can log exactly which configuration it booted with.
//! - [`DaemonConfig`] is the typed view the daemon reads; keys outside the
//!   consumed prefixes are reported by [`report_unused_keys`].

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;
use std::net::SocketAddr;

mod pointer;

use pointer::{collect_leaf_pointers, is_prefix_pointer, normalize_pointer};

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://127.0.0.1",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// JSON-pointer prefixes the daemon actually reads.
pub const CONSUMED_PREFIXES: &[&str] = &["/server", "/seed", "/cors"];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        // An empty document parses as null; treat it as "no overrides".
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

/// serde_json's default `Map` is ordered by key, so plain serialization is
/// already canonical.
fn canonicalize_json(v: &Value) -> Result<String> {
    serde_json::to_string(v).context("canonical json serialize failed")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

// ---------------------------------------------------------------------------
// Typed view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    pub bind_addr: SocketAddr,
    /// JSON file of orders loaded into the store at boot.
    pub seed_path: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            seed_path: None,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DaemonConfig {
    /// Build from merged config JSON. Every key is optional:
    /// - server.addr (string, "host:port"); default 127.0.0.1:5000
    /// - seed.path (string)
    /// - cors.allowed_origins (list of strings); default localhost origins
    pub fn from_config_json(cfg: &Value) -> Result<Self> {
        let mut out = Self::default();

        if let Some(v) = cfg.pointer("/server/addr") {
            let s = v.as_str().context("server.addr must be a string")?;
            out.bind_addr = s
                .parse()
                .with_context(|| format!("server.addr is not a socket address: {s}"))?;
        }

        if let Some(v) = cfg.pointer("/seed/path") {
            let s = v.as_str().context("seed.path must be a string")?;
            out.seed_path = Some(s.to_string()).filter(|s| !s.is_empty());
        }

        if let Some(v) = cfg.pointer("/cors/allowed_origins") {
            let arr = v
                .as_array()
                .context("cors.allowed_origins must be a list")?;
            let mut origins = Vec::with_capacity(arr.len());
            for o in arr {
                let s = o
                    .as_str()
                    .context("cors.allowed_origins entries must be strings")?;
                origins.push(s.to_string());
            }
            out.allowed_origins = origins;
        }

        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Unused-key guard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Minimal set of unused leaf pointers (sorted)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Report config leaves not under any of [`CONSUMED_PREFIXES`].
/// With `UnusedKeyPolicy::Fail` a non-clean report is an error.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = CONSUMED_PREFIXES.iter().map(|p| normalize_pointer(p)).collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|lp| !consumed.iter().any(|cp| is_prefix_pointer(cp, lp)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        unused_leaf_pointers: unused,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        bail!(
            "CONFIG_UNUSED_KEYS: {} unused config key(s): {:?}",
            report.unused_leaf_pointers.len(),
            report.unused_leaf_pointers
        );
    }

    Ok(report)
}
