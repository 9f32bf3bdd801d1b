//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry gives a neighbor offset `(dx, dy)` and a weight numerator.
/// A neighbor receives `error * weight / divisor`. Offsets only point at
/// pixels the row-major scan has not reached yet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Kernel {
    /// `(dx, dy, weight)` entries.
    pub(crate) entries: &'static [(isize, isize, u8)],

    /// Total divisor for normalizing weights.
    pub(crate) divisor: u8,
}

impl Kernel {
    /// Fraction of the error carried by one entry's weight.
    #[inline]
    pub(crate) fn fraction(&self, weight: u8) -> f32 {
        weight as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub(crate) const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // southwest
        (0, 1, 5),  // south
        (1, 1, 1),  // southeast
    ],
    divisor: 16,
};
