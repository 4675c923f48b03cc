//! Output and backup naming policy
//!
//! Pure path arithmetic, no file system access.

use decomment_config::StripConfig;
use std::path::{Path, PathBuf};

/// Decides where transformed output and backups are written
pub trait NamingPolicy: Send + Sync {
    /// Destination for the transformed content of `source`
    fn output_path(&self, source: &Path) -> PathBuf;

    /// Destination for the untouched original of `source`
    fn backup_path(&self, source: &Path) -> PathBuf;
}

/// Default policy
///
/// - in place: output overwrites the source
/// - side by side: `dir/Name.java` becomes `dir/Name<output_suffix>.java`
/// - backup: `dir/Name.java` becomes `dir/Name.java<backup_suffix>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultNaming {
    pub in_place: bool,
    pub output_suffix: String,
    pub backup_suffix: String,
}

impl DefaultNaming {
    pub fn from_config(config: &StripConfig) -> Self {
        Self {
            in_place: config.in_place,
            output_suffix: config.output_suffix.clone(),
            backup_suffix: config.backup_suffix.clone(),
        }
    }
}

impl Default for DefaultNaming {
    fn default() -> Self {
        Self::from_config(&StripConfig::default())
    }
}

impl NamingPolicy for DefaultNaming {
    fn output_path(&self, source: &Path) -> PathBuf {
        if self.in_place {
            return source.to_path_buf();
        }

        let mut name = source.file_stem().unwrap_or_default().to_os_string();
        name.push(&self.output_suffix);
        if let Some(ext) = source.extension() {
            name.push(".");
            name.push(ext);
        }
        source.with_file_name(name)
    }

    fn backup_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_os_string();
        name.push(&self.backup_suffix);
        PathBuf::from(name)
    }
}
