// File: crates/heatmap-core/src/axis.rs
// Summary: Tick layout for the year, month, and legend axes.

use crate::dataset::month_name;
use crate::scale::{BandScale, LinearScale, QuantizeScale};

/// One axis tick: pixel position along the axis plus its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Bottom axis: one tick per distinct year divisible by 10, at band centers.
pub fn year_ticks(years: &[i32], x: &BandScale) -> Vec<Tick> {
    years
        .iter()
        .enumerate()
        .filter(|(_, year)| *year % 10 == 0)
        .map(|(i, year)| Tick { position: x.center(i), label: year.to_string() })
        .collect()
}

/// Left axis: one tick per month, labeled with the full month name.
pub fn month_ticks(y: &BandScale) -> Vec<Tick> {
    (0..12u32)
        .map(|m| Tick { position: y.center(m as usize), label: month_name(m).to_string() })
        .collect()
}

/// Legend axis: one tick per quantize bucket lower bound, labels to 1 decimal.
pub fn legend_ticks<T: Copy>(color: &QuantizeScale<'_, T>, axis: &LinearScale) -> Vec<Tick> {
    color
        .thresholds()
        .into_iter()
        .map(|v| Tick { position: axis.to_px(v), label: format!("{v:.1}") })
        .collect()
}
