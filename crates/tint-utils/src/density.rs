//! Density-tiered sizing for favicons and application buttons.
//!
//! The host display reports a density in dpi; sizes are looked up per tier
//! and memoized on the resolver for as long as it lives.

use std::sync::OnceLock;

/// Low density bucket (ldpi).
pub const DENSITY_LOW: u32 = 120;
/// Medium density bucket (mdpi), also the platform default.
pub const DENSITY_MEDIUM: u32 = 160;
/// High density bucket (hdpi).
pub const DENSITY_HIGH: u32 = 240;
/// Extra-high density bucket (xhdpi).
pub const DENSITY_XHIGH: u32 = 320;

/// Coarse classification of screen pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityTier {
    Low,
    Medium,
    High,
    ExtraHigh,
    /// Any density that is not one of the exact buckets above.
    Other,
}

impl DensityTier {
    /// Classify a dpi reading. Only exact bucket values map to a named tier.
    pub fn from_dpi(dpi: u32) -> Self {
        match dpi {
            DENSITY_LOW => Self::Low,
            DENSITY_MEDIUM => Self::Medium,
            DENSITY_HIGH => Self::High,
            DENSITY_XHIGH => Self::ExtraHigh,
            _ => Self::Other,
        }
    }
}

/// What a resolved size is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeKind {
    Favicon,
    Button,
}

impl SizeKind {
    /// Pixel size for this kind at `tier`. Unknown tiers use the medium sizes.
    #[inline]
    pub fn pixels_for(self, tier: DensityTier) -> u32 {
        match (self, tier) {
            (SizeKind::Favicon, DensityTier::Low) => 12,
            (SizeKind::Favicon, DensityTier::Medium) => 16,
            (SizeKind::Favicon, DensityTier::High) => 24,
            (SizeKind::Favicon, DensityTier::ExtraHigh) => 32,
            (SizeKind::Favicon, DensityTier::Other) => 16,
            (SizeKind::Button, DensityTier::Low) => 36,
            (SizeKind::Button, DensityTier::Medium) => 48,
            (SizeKind::Button, DensityTier::High) => 60,
            (SizeKind::Button, DensityTier::ExtraHigh) => 72,
            (SizeKind::Button, DensityTier::Other) => 48,
        }
    }
}

/// Anything that can report the current display density.
pub trait DensitySource {
    fn density_tier(&self) -> DensityTier;
}

/// A fixed reading.
impl DensitySource for DensityTier {
    fn density_tier(&self) -> DensityTier {
        *self
    }
}

/// Resolves and memoizes pixel sizes per [`SizeKind`].
///
/// The first call for a kind fixes its value; later calls return it no matter
/// which tier they pass. Construct one at startup and share it by reference.
#[derive(Debug, Default)]
pub struct SizeResolver {
    favicon: OnceLock<u32>,
    button: OnceLock<u32>,
}

impl SizeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: SizeKind) -> &OnceLock<u32> {
        match kind {
            SizeKind::Favicon => &self.favicon,
            SizeKind::Button => &self.button,
        }
    }

    /// Size in pixels for `kind`, computed from `tier` on first use only.
    pub fn resolve(&self, kind: SizeKind, tier: DensityTier) -> u32 {
        *self.slot(kind).get_or_init(|| {
            let px = kind.pixels_for(tier);
            log::debug!("resolved {:?} size {}px for {:?}", kind, px, tier);
            px
        })
    }

    /// Cached size for `kind`, if it has been resolved.
    pub fn cached(&self, kind: SizeKind) -> Option<u32> {
        self.slot(kind).get().copied()
    }

    /// Favicon size in pixels for the density reported by `source`.
    pub fn favicon_size(&self, source: &dyn DensitySource) -> u32 {
        if let Some(px) = self.cached(SizeKind::Favicon) {
            return px;
        }
        self.resolve(SizeKind::Favicon, source.density_tier())
    }

    /// Application button size in pixels for the density reported by `source`.
    pub fn button_size(&self, source: &dyn DensitySource) -> u32 {
        if let Some(px) = self.cached(SizeKind::Button) {
            return px;
        }
        self.resolve(SizeKind::Button, source.density_tier())
    }

    /// Forget every memoized size, e.g. after the display was reconfigured.
    pub fn invalidate(&mut self) {
        self.favicon.take();
        self.button.take();
    }
}
