//! Coordinate spaces for the paginated exporter.
//!
//! Three spaces are in play and must not be mixed up:
//!
//! - **display pixels** — on-screen geometry of a region at capture time,
//!   already multiplied by whatever zoom the surface was displayed at;
//! - **bitmap pixels** — rows and columns of the captured bitmap, which is
//!   rasterized at a fixed oversampling factor independent of zoom;
//! - **millimeters** — physical units of the output page.
//!
//! Display pixels reach millimeters by dividing out the display scale and
//! multiplying by [`PX_TO_MM`]; bitmap pixels by dividing out the
//! oversampling factor instead.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Millimeters per CSS pixel at 96 dpi.
pub const PX_TO_MM: f32 = 0.264583;

/// A physical length on the output page, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Mm(pub f32);

impl Mm {
    pub const ZERO: Mm = Mm(0.0);

    /// Convert intrinsic (unscaled) CSS pixels to millimeters.
    pub fn from_css_px(px: f32) -> Mm {
        Mm(px * PX_TO_MM)
    }

    /// Convert on-screen pixels to millimeters, dividing out the display
    /// scale the surface was captured at.
    pub fn from_display_px(px: f32, display_scale: f32) -> Mm {
        Mm::from_css_px(px / display_scale)
    }

    /// Convert bitmap pixels to millimeters, dividing out the oversampling
    /// factor the bitmap was rasterized at.
    pub fn from_bitmap_px(px: f32, oversample: f32) -> Mm {
        Mm::from_css_px(px / oversample)
    }

    /// Convert back to bitmap pixels at the given oversampling factor.
    pub fn to_bitmap_px(self, oversample: f32) -> f32 {
        self.0 / PX_TO_MM * oversample
    }

    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }
}

impl Add for Mm {
    type Output = Mm;
    fn add(self, rhs: Mm) -> Mm {
        Mm(self.0 + rhs.0)
    }
}

impl AddAssign for Mm {
    fn add_assign(&mut self, rhs: Mm) {
        self.0 += rhs.0;
    }
}

impl Sub for Mm {
    type Output = Mm;
    fn sub(self, rhs: Mm) -> Mm {
        Mm(self.0 - rhs.0)
    }
}

impl SubAssign for Mm {
    fn sub_assign(&mut self, rhs: Mm) {
        self.0 -= rhs.0;
    }
}

/// Fixed page geometry of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Page width
    pub width: Mm,

    /// Page height
    pub height: Mm,

    /// Margin on all four sides
    pub margin: Mm,

    /// Vertical gap between the repeated header and the content strip
    pub header_gap: Mm,
}

impl PageMetrics {
    /// Portrait A4 with an 8 mm margin and a 4 mm header gap.
    pub fn a4() -> Self {
        Self {
            width: Mm(210.0),
            height: Mm(297.0),
            margin: Mm(8.0),
            header_gap: Mm(4.0),
        }
    }

    /// Horizontal width available to placed content.
    pub fn content_width(&self) -> Mm {
        self.width - self.margin - self.margin
    }

    /// Vertical space below a cursor position, down to the bottom margin.
    pub fn space_below(&self, cursor: Mm) -> Mm {
        self.height - self.margin - cursor
    }
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::a4()
    }
}
