//! Installed package metadata and version lookup.

use std::collections::HashMap;

use crate::error::{Result, UtilsError};

/// Metadata for an installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version_name: String,
    pub version_code: u32,
}

impl PackageInfo {
    /// Build from a `MAJOR.MINOR.PATCH` version string.
    ///
    /// The version code is `major * 10000 + minor * 100 + patch`, so minor and
    /// patch are expected to stay below 100.
    pub fn from_version(name: impl Into<String>, version: &str) -> Result<Self> {
        let invalid = || UtilsError::InvalidVersion(version.to_string());

        let mut parts = version.trim().split('.');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .ok_or_else(invalid)?
                .parse::<u32>()
                .map_err(|_| invalid())
        };
        let (major, minor, patch) = (next()?, next()?, next()?);
        if parts.next().is_some() || minor >= 100 || patch >= 100 {
            return Err(invalid());
        }

        let version_code = major
            .checked_mul(10_000)
            .and_then(|v| v.checked_add(minor * 100 + patch))
            .ok_or_else(invalid)?;

        Ok(Self {
            name: name.into(),
            version_name: version.trim().to_string(),
            version_code,
        })
    }
}

/// Looks up installed packages by name.
pub trait PackageManager {
    fn package_info(&self, name: &str) -> Result<PackageInfo>;
}

/// In-memory package registry.
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: HashMap<String, PackageInfo>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, info: PackageInfo) {
        self.packages.insert(info.name.clone(), info);
    }
}

impl PackageManager for PackageRegistry {
    fn package_info(&self, name: &str) -> Result<PackageInfo> {
        self.packages
            .get(name)
            .cloned()
            .ok_or_else(|| UtilsError::PackageNotFound(name.to_string()))
    }
}

/// Version code of `name`, or `None` (with a warning) when it cannot be read.
pub fn application_version_code(manager: &dyn PackageManager, name: &str) -> Option<u32> {
    match manager.package_info(name) {
        Ok(info) => Some(info.version_code),
        Err(e) => {
            log::warn!("Unable to get application version: {}", e);
            None
        }
    }
}
