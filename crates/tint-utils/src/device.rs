use tint_config::DeviceConfig;

use crate::density::{DENSITY_MEDIUM, DensitySource, DensityTier};

/// Static description of the display and form factor Tint runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub density_dpi: u32,
    pub tablet: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            density_dpi: DENSITY_MEDIUM,
            tablet: false,
        }
    }
}

impl DeviceProfile {
    /// Build from configuration; a missing dpi falls back to the medium bucket.
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            density_dpi: config.density_dpi.unwrap_or(DENSITY_MEDIUM),
            tablet: config.tablet,
        }
    }

    pub fn is_tablet(&self) -> bool {
        self.tablet
    }
}

impl DensitySource for DeviceProfile {
    fn density_tier(&self) -> DensityTier {
        DensityTier::from_dpi(self.density_dpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = DeviceConfig {
            density_dpi: Some(240),
            tablet: true,
        };
        let profile = DeviceProfile::from_config(&config);
        assert!(profile.is_tablet());
        assert_eq!(profile.density_tier(), DensityTier::High);
    }

    #[test]
    fn test_missing_dpi_is_medium() {
        let profile = DeviceProfile::from_config(&DeviceConfig::default());
        assert_eq!(profile.density_dpi, 160);
        assert_eq!(profile.density_tier(), DensityTier::Medium);
        assert!(!profile.is_tablet());
    }
}
