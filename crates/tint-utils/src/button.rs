//! Application button images: a favicon composited onto the button frame at
//! the sizes the current display density calls for.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::compositor::composite;
use crate::density::{DensitySource, SizeResolver};
use crate::error::{Result, UtilsError};

/// Supplies the background frame drawn behind each favicon.
pub trait FrameSource {
    fn load_frame(&self) -> Result<RgbaImage>;
}

/// Loads the frame from an image file on every request.
#[derive(Debug, Clone)]
pub struct FileFrameSource {
    path: PathBuf,
}

impl FileFrameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSource for FileFrameSource {
    fn load_frame(&self) -> Result<RgbaImage> {
        let img = image::open(&self.path).map_err(|source| UtilsError::ImageLoad {
            path: self.path.clone(),
            source,
        })?;
        Ok(img.to_rgba8())
    }
}

/// Builds application button images from favicons.
pub struct ButtonImageFactory<'a, F: FrameSource> {
    resolver: &'a SizeResolver,
    density: &'a dyn DensitySource,
    frames: F,
}

impl<'a, F: FrameSource> ButtonImageFactory<'a, F> {
    pub fn new(resolver: &'a SizeResolver, density: &'a dyn DensitySource, frames: F) -> Self {
        Self {
            resolver,
            density,
            frames,
        }
    }

    /// Composite `icon` onto the button frame.
    ///
    /// Returns `Ok(None)` without touching the frame source when there is no icon.
    pub fn button_image(&self, icon: Option<&RgbaImage>) -> Result<Option<RgbaImage>> {
        let Some(icon) = icon else {
            return Ok(None);
        };

        let button_size = self.resolver.button_size(self.density);
        let favicon_size = self.resolver.favicon_size(self.density);
        let frame = self.frames.load_frame()?;

        log::trace!(
            "compositing {}x{} favicon into {}px button ({}px icon)",
            icon.width(),
            icon.height(),
            button_size,
            favicon_size
        );
        Ok(composite(&frame, Some(icon), button_size, favicon_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::DensityTier;
    use image::Rgba;
    use std::cell::Cell;

    struct CountingFrames {
        loads: Cell<usize>,
    }

    impl FrameSource for CountingFrames {
        fn load_frame(&self) -> Result<RgbaImage> {
            self.loads.set(self.loads.get() + 1);
            Ok(RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])))
        }
    }

    struct BrokenFrames;

    impl FrameSource for BrokenFrames {
        fn load_frame(&self) -> Result<RgbaImage> {
            Err(UtilsError::ImageLoad {
                path: PathBuf::from("frame.png"),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "frame missing",
                )),
            })
        }
    }

    #[test]
    fn test_no_icon_skips_frame_load() {
        let resolver = SizeResolver::new();
        let frames = CountingFrames { loads: Cell::new(0) };
        let factory = ButtonImageFactory::new(&resolver, &DensityTier::High, frames);

        assert!(factory.button_image(None).unwrap().is_none());
        assert_eq!(factory.frames.loads.get(), 0);
    }

    #[test]
    fn test_sizes_follow_density() {
        let resolver = SizeResolver::new();
        let frames = CountingFrames { loads: Cell::new(0) };
        let factory = ButtonImageFactory::new(&resolver, &DensityTier::High, frames);
        let icon = RgbaImage::from_pixel(24, 24, Rgba([255, 0, 0, 255]));

        let out = factory.button_image(Some(&icon)).unwrap().unwrap();
        assert_eq!(out.dimensions(), (60, 60));
        // 60/2 - 24/2 = 18
        assert_eq!(*out.get_pixel(18, 18), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(17, 17), Rgba([255, 255, 255, 255]));
        assert_eq!(factory.frames.loads.get(), 1);
    }

    #[test]
    fn test_frame_error_propagates() {
        let resolver = SizeResolver::new();
        let factory = ButtonImageFactory::new(&resolver, &DensityTier::Medium, BrokenFrames);
        let icon = RgbaImage::new(16, 16);

        let err = factory.button_image(Some(&icon)).unwrap_err();
        assert!(matches!(err, UtilsError::ImageLoad { .. }));
    }

    #[test]
    fn test_missing_frame_file() {
        let frames = FileFrameSource::new("no/such/frame.png");
        let err = frames.load_frame().unwrap_err();
        match err {
            UtilsError::ImageLoad { path, .. } => assert_eq!(path, frames.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
