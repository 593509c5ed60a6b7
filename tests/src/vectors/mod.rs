//! Known-answer vectors for the GF(2^293) kernel, loaded from TOML.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use thiserror::Error;

/// Errors raised while loading a vector file
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Two-operand vector (`add`, `mul`)
#[derive(Debug, Clone, Deserialize)]
pub struct BinaryOpVector {
    pub name: String,
    pub op: String,
    pub lhs: String,
    pub rhs: String,
    pub result: String,
}

/// One-operand vector (`square`, `sqrt`, `invert`)
#[derive(Debug, Clone, Deserialize)]
pub struct UnaryOpVector {
    pub name: String,
    pub op: String,
    pub input: String,
    pub result: String,
}

/// Exponentiation vector; the exponent is a plain big-endian integer
#[derive(Debug, Clone, Deserialize)]
pub struct PowVector {
    pub name: String,
    pub base: String,
    pub exponent: String,
    pub result: String,
}

/// Trace vector
#[derive(Debug, Clone, Deserialize)]
pub struct TraceVector {
    pub input: String,
    pub result: u8,
}

/// A complete vector file
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    pub field: String,
    pub prime: u32,
    #[serde(default)]
    pub binary_op: Vec<BinaryOpVector>,
    #[serde(default)]
    pub unary_op: Vec<UnaryOpVector>,
    #[serde(default)]
    pub pow: Vec<PowVector>,
    #[serde(default)]
    pub trace: Vec<TraceVector>,
}

/// Directory holding the vector files
pub fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Load and parse a vector file by name
pub fn load(name: &str) -> Result<VectorFile, VectorError> {
    let path = vectors_dir().join(name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| VectorError::Parse { path, source })
}

/// The GF(2^293) known-answer vectors
pub static ONB293_KAT: Lazy<VectorFile> =
    Lazy::new(|| load("onb293_kat.toml").expect("onb293 vector file must load"));
