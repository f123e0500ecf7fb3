//! Generator configuration: runtime path and the known-package import table.
//!
//! Loaded once and handed to the compiler; nothing here is mutated after start-up.
//!
//! ```toml
//! runtime_crate = "rosgen"
//!
//! [imports]
//! my_msgs = "crate::my_msgs"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Packages whose generated types are expected under `crate::msgs::<package>`.
pub const WELL_KNOWN_PACKAGES: &[&str] = &[
    "actionlib_msgs",
    "common_msgs",
    "control_msgs",
    "diagnostic_msgs",
    "geometry_msgs",
    "map_msgs",
    "nav_msgs",
    "rosgraph_msgs",
    "sensor_msgs",
    "shape_msgs",
    "smach_msgs",
    "stereo_msgs",
    "tf2_msgs",
    "trajectory_msgs",
    "visualization_msgs",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Path of the wire runtime as seen from emitted code.
    pub runtime_crate: String,
    /// Definition package name -> Rust module path.
    pub imports: BTreeMap<String, String>,
}

/// On-disk shape; every key is optional and overlays the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    runtime_crate: Option<String>,
    imports: BTreeMap<String, String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig::with_runtime("rosgen")
    }
}

impl GenConfig {
    /// Defaults with a different runtime path (`crate` for the bundled messages).
    pub fn with_runtime(runtime_crate: &str) -> Self {
        let mut imports = BTreeMap::new();
        imports.insert("std_msgs".to_string(), format!("{}::msgs::std_msgs", runtime_crate));
        for pkg in WELL_KNOWN_PACKAGES {
            imports.insert(pkg.to_string(), format!("crate::msgs::{}", pkg));
        }
        GenConfig {
            runtime_crate: runtime_crate.to_string(),
            imports,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = match file.runtime_crate {
            Some(rt) => GenConfig::with_runtime(&rt),
            None => GenConfig::default(),
        };
        config.imports.extend(file.imports);
        Ok(config)
    }

    /// Module path for a foreign package, if known.
    pub fn import_path(&self, package: &str) -> Option<&str> {
        self.imports.get(package).map(String::as_str)
    }
}
