//! Proportional scaling of real-world extents into pixels.
//!
//! The largest of the three extents is mapped to [`TARGET_EXTENT`] pixels and
//! the other two keep their ratio to it. Each axis is then clamped into its own
//! band so that very flat or very thin boxes stay legible; the clamp may
//! distort proportions, which is intended.

use log::debug;

use crate::error::FiguraError;

/// Pixel length of the largest extent before clamping.
pub const TARGET_EXTENT: f32 = 120.0;

/// An inclusive pixel range a scaled extent is forced into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBand {
    min: f32,
    max: f32,
}

impl ClampBand {
    pub const LENGTH: Self = Self::new(60.0, 200.0);
    pub const WIDTH: Self = Self::new(40.0, 150.0);
    pub const HEIGHT: Self = Self::new(50.0, 180.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Pixel extents of a box after scaling and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledDimensions {
    length: f32,
    width: f32,
    height: f32,
    scale: f32,
}

impl ScaledDimensions {
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Pixels per real-world unit, before clamping.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Scales three real-world extents into their pixel bands.
///
/// # Errors
///
/// Returns [`FiguraError::InvalidDimension`] if any extent is not a finite
/// positive number.
///
/// ```
/// # use figura::scale::scale_dimensions;
/// let scaled = scale_dimensions(40.0, 25.0, 60.0).unwrap();
/// assert_eq!(scaled.height(), 120.0);
/// assert_eq!(scaled.length(), 80.0);
/// assert_eq!(scaled.width(), 50.0);
/// ```
pub fn scale_dimensions(
    length: f32,
    width: f32,
    height: f32,
) -> Result<ScaledDimensions, FiguraError> {
    validate_extent("length", length)?;
    validate_extent("width", width)?;
    validate_extent("height", height)?;

    let scale = TARGET_EXTENT / length.max(width).max(height);
    let scaled = ScaledDimensions {
        length: ClampBand::LENGTH.clamp(length * scale),
        width: ClampBand::WIDTH.clamp(width * scale),
        height: ClampBand::HEIGHT.clamp(height * scale),
        scale,
    };
    debug!(scaled:?; "Scaled tank dimensions");

    Ok(scaled)
}

/// Checks that an extent is finite and strictly positive.
pub(crate) fn validate_extent(name: &'static str, value: f32) -> Result<(), FiguraError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FiguraError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_largest_extent_maps_to_target() {
        let scaled = scale_dimensions(20.0, 10.0, 15.0).unwrap();
        assert_approx_eq!(f32, scaled.scale(), 6.0);
        assert_approx_eq!(f32, scaled.length(), 120.0);
        assert_approx_eq!(f32, scaled.width(), 60.0);
        assert_approx_eq!(f32, scaled.height(), 90.0);
    }

    #[test]
    fn test_each_axis_clamped_independently() {
        // A long flat tray: width and height fall below their bands
        let scaled = scale_dimensions(100.0, 10.0, 5.0).unwrap();
        assert_approx_eq!(f32, scaled.length(), 120.0);
        assert_approx_eq!(f32, scaled.width(), 40.0);
        assert_approx_eq!(f32, scaled.height(), 50.0);
    }

    #[test]
    fn test_cube_is_uniform() {
        let scaled = scale_dimensions(20.0, 20.0, 20.0).unwrap();
        assert_approx_eq!(f32, scaled.length(), 120.0);
        assert_approx_eq!(f32, scaled.width(), 120.0);
        assert_approx_eq!(f32, scaled.height(), 120.0);
    }

    #[test]
    fn test_rejects_invalid_extents() {
        for (l, w, h, name) in [
            (0.0, 1.0, 1.0, "length"),
            (1.0, -2.0, 1.0, "width"),
            (1.0, 1.0, f32::NAN, "height"),
            (f32::INFINITY, 1.0, 1.0, "length"),
        ] {
            match scale_dimensions(l, w, h) {
                Err(FiguraError::InvalidDimension { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected invalid {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_band_contains() {
        assert!(ClampBand::LENGTH.contains(60.0));
        assert!(ClampBand::LENGTH.contains(200.0));
        assert!(!ClampBand::WIDTH.contains(151.0));
        assert_eq!(ClampBand::HEIGHT.min(), 50.0);
        assert_eq!(ClampBand::HEIGHT.max(), 180.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn extent_strategy() -> impl Strategy<Value = f32> {
        0.01f32..10_000.0
    }

    /// Equal extents scale to equal pixel lengths.
    fn check_equal_extents_scale_equally(extent: f32) -> Result<(), TestCaseError> {
        let scaled = scale_dimensions(extent, extent, extent).unwrap();

        prop_assert!(approx_eq!(f32, scaled.length(), scaled.width(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, scaled.width(), scaled.height(), epsilon = 0.001));
        Ok(())
    }

    /// Every scaled extent lands inside its band.
    fn check_results_within_bands(l: f32, w: f32, h: f32) -> Result<(), TestCaseError> {
        let scaled = scale_dimensions(l, w, h).unwrap();

        prop_assert!(ClampBand::LENGTH.contains(scaled.length()));
        prop_assert!(ClampBand::WIDTH.contains(scaled.width()));
        prop_assert!(ClampBand::HEIGHT.contains(scaled.height()));
        Ok(())
    }

    /// Without clamping, the scaled ratio equals the real ratio.
    fn check_unclamped_ratio_preserved(l: f32, h: f32) -> Result<(), TestCaseError> {
        let scaled = scale_dimensions(l, l.min(h), h).unwrap();
        let (sl, sh) = (l * scaled.scale(), h * scaled.scale());

        if ClampBand::LENGTH.contains(sl) && ClampBand::HEIGHT.contains(sh) {
            prop_assert!(approx_eq!(
                f32,
                scaled.length() / scaled.height(),
                l / h,
                epsilon = 0.001
            ));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn equal_extents_scale_equally(extent in extent_strategy()) {
            check_equal_extents_scale_equally(extent)?;
        }

        #[test]
        fn results_within_bands(l in extent_strategy(), w in extent_strategy(), h in extent_strategy()) {
            check_results_within_bands(l, w, h)?;
        }

        #[test]
        fn unclamped_ratio_preserved(l in extent_strategy(), h in extent_strategy()) {
            check_unclamped_ratio_preserved(l, h)?;
        }
    }
}
