use std::path::Path;
use serde::{Serialize, Deserialize};
use fxhash::FxHashMap;
use crate::error::{ResolveError, ResolveResult};

/// Wire widths the type engine resolves names down to.
///
/// Neither table is derived from description documents; both are supplied
/// by the environment. [`WireConfig::default`] carries the X11 values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireConfig {
    /// Byte width of every primitive base type.
    pub base_sizes: FxHashMap<String, u64>,

    /// Byte width shared by all resource (handle) types.
    pub resource_width: u64,
}

/// On-disk form: every key is optional and overrides the default table.
#[derive(Debug, Clone, Deserialize, Default)]
struct WireConfigFile {
    #[serde(default)]
    base_sizes: FxHashMap<String, u64>,

    #[serde(default)]
    resource_width: Option<u64>,
}

const X11_BASE_SIZES: &[(&str, u64)] = &[
    ("CARD8", 1),
    ("CARD16", 2),
    ("CARD32", 4),
    ("CARD64", 8),
    ("INT8", 1),
    ("INT16", 2),
    ("INT32", 4),
    ("INT64", 8),
    ("BYTE", 1),
    ("BOOL", 1),
    ("char", 1),
    ("float", 4),
    ("double", 8),
    ("void", 1),
];

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            base_sizes: X11_BASE_SIZES
                .iter()
                .map(|(name, size)| (name.to_string(), *size))
                .collect(),
            resource_width: 4,
        }
    }
}

impl WireConfig {
    /// Width of a primitive base type, if `name` is one.
    pub fn base_size(&self, name: &str) -> Option<u64> {
        self.base_sizes.get(name).copied()
    }

    pub fn is_base_type(&self, name: &str) -> bool {
        self.base_sizes.contains_key(name)
    }

    /// Parses a TOML table and layers it over the default X11 table.
    pub fn from_toml_str(source: &str) -> ResolveResult<Self> {
        let file: WireConfigFile = toml::from_str(source).map_err(|e| ResolveError::InvalidConfig {
            path: None,
            reason: e.to_string(),
        })?;
        Ok(Self::default().merged(file))
    }

    pub fn from_path(path: &Path) -> ResolveResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ResolveError::InvalidConfig {
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source).map_err(|e| match e {
            ResolveError::InvalidConfig { reason, .. } => ResolveError::InvalidConfig {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })
    }

    fn merged(mut self, file: WireConfigFile) -> Self {
        self.base_sizes.extend(file.base_sizes);
        if let Some(width) = file.resource_width {
            self.resource_width = width;
        }
        self
    }
}
