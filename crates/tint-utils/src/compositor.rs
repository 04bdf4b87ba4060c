//! Favicon compositing onto a square button background.

use std::borrow::Cow;

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Top-left offset, on both axes, that centres an `icon_size` square inside a
/// `button_size` square. Both halves truncate, so odd sizes lean top-left.
#[inline]
pub fn centered_offset(button_size: u32, icon_size: u32) -> i64 {
    (button_size / 2) as i64 - (icon_size / 2) as i64
}

/// Scale `src` to a `side`×`side` square, borrowing it when it already fits.
fn fit_square(src: &RgbaImage, side: u32) -> Cow<'_, RgbaImage> {
    if src.width() == side && src.height() == side {
        Cow::Borrowed(src)
    } else if src.width() == 0 || src.height() == 0 {
        Cow::Owned(RgbaImage::new(side, side))
    } else {
        Cow::Owned(imageops::resize(src, side, side, FilterType::Triangle))
    }
}

/// Draw `background` stretched over a `button_size` square and centre `icon`
/// on top of it at `icon_size`×`icon_size`.
///
/// Returns `None` when there is no icon to draw.
pub fn composite(
    background: &RgbaImage,
    icon: Option<&RgbaImage>,
    button_size: u32,
    icon_size: u32,
) -> Option<RgbaImage> {
    let icon = icon?;

    let mut out = RgbaImage::new(button_size, button_size);
    if button_size == 0 {
        return Some(out);
    }

    let frame = fit_square(background, button_size);
    imageops::overlay(&mut out, &*frame, 0, 0);

    if icon_size > 0 {
        let offset = centered_offset(button_size, icon_size);
        let icon = fit_square(icon, icon_size);
        imageops::overlay(&mut out, &*icon, offset, offset);
    }

    Some(out)
}
