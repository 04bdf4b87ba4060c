//! tint-utils: density-aware sizing, favicon compositing and resource helpers
//! shared by the Tint browser shell.

pub mod button;
pub mod compositor;
pub mod density;
mod device;
pub mod error;
pub mod package;
pub mod resources;

pub use button::{ButtonImageFactory, FileFrameSource, FrameSource};
pub use compositor::{centered_offset, composite};
pub use density::{DensitySource, DensityTier, SizeKind, SizeResolver};
pub use device::DeviceProfile;
pub use error::{Result, UtilsError};
pub use package::{PackageInfo, PackageManager, PackageRegistry, application_version_code};
pub use resources::{ThumbnailDimensions, changelog, read_raw_text};
