// File: crates/heatmap-core/src/scale.rs
// Summary: Band (categorical), linear, and quantize scale transforms.

/// Maps `count` ordered categories onto evenly spaced, zero-padding bands
/// covering `[start_px, end_px]`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f64,
    pub end_px: f64,
    count: usize,
}

impl BandScale {
    pub fn new(start_px: f64, end_px: f64, count: usize) -> Self {
        Self { start_px, end_px, count: count.max(1) }
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Width of one band in pixels.
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        (self.end_px - self.start_px) / self.count as f64
    }

    /// Left/top edge of band `i`.
    #[inline]
    pub fn band_start(&self, i: usize) -> f64 {
        self.start_px + self.bandwidth() * i as f64
    }

    /// Center of band `i`; where axis ticks sit.
    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        self.band_start(i) + self.bandwidth() * 0.5
    }
}

/// Maps a continuous value domain onto `[start_px, end_px]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub start_px: f64,
    pub end_px: f64,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, start_px: f64, end_px: f64) -> Self {
        let mut s = Self { vmin, vmax, start_px, end_px };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.start_px + (v - self.vmin) / span * (self.end_px - self.start_px)
    }
}

/// Maps `[vmin, vmax]` onto a fixed slice of discrete outputs through
/// equal-width buckets. Values outside the domain clamp to the first/last
/// output, so the mapping is total and deterministic.
#[derive(Clone, Copy, Debug)]
pub struct QuantizeScale<'a, T> {
    pub vmin: f64,
    pub vmax: f64,
    outputs: &'a [T],
}

impl<'a, T: Copy> QuantizeScale<'a, T> {
    /// `outputs` must be non-empty.
    pub fn new(vmin: f64, vmax: f64, outputs: &'a [T]) -> Self {
        debug_assert!(!outputs.is_empty(), "quantize scale needs at least one output");
        let mut s = Self { vmin, vmax, outputs };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    /// Number of buckets (== number of outputs).
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Bucket index for `v`, clamped to `0..len`.
    #[inline]
    pub fn index_of(&self, v: f64) -> usize {
        let n = self.outputs.len();
        let span = (self.vmax - self.vmin).max(1e-12);
        let raw = ((v - self.vmin) / span * n as f64).floor();
        if raw < 0.0 {
            0
        } else {
            (raw as usize).min(n - 1)
        }
    }

    /// Output value for `v`.
    #[inline]
    pub fn value_for(&self, v: f64) -> T {
        self.outputs[self.index_of(v)]
    }

    /// Lower bound of each bucket, in order; `len()` values starting at
    /// `vmin` and excluding `vmax`. Used as legend tick values.
    pub fn thresholds(&self) -> Vec<f64> {
        let n = self.outputs.len();
        let step = (self.vmax - self.vmin) / n as f64;
        (0..n).map(|i| self.vmin + step * i as f64).collect()
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
