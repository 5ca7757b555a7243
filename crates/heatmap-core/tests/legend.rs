// File: crates/heatmap-core/tests/legend.rs
// Purpose: Validate legend swatch and tick counts against the palette size.

use heatmap_core::axis::legend_ticks;
use heatmap_core::{Dataset, HeatMap, LinearScale, MonthRecord, QuantizeScale, RenderOptions, PALETTE};

fn sample_dataset() -> Dataset {
    Dataset {
        base_temperature: 8.0,
        monthly_variance: vec![
            MonthRecord { year: 1950, month: 1, variance: -3.0 },
            MonthRecord { year: 1950, month: 7, variance: 3.0 },
        ],
    }
}

#[test]
fn one_swatch_per_palette_entry() {
    let chart = HeatMap::new(sample_dataset()).expect("valid dataset");
    let svg = chart.render_svg(&RenderOptions::default());
    assert_eq!(svg.matches("class=\"legend-cell\"").count(), PALETTE.len());
    assert!(svg.contains("id=\"legend\""));
}

#[test]
fn legend_tick_count_equals_palette_size() {
    let color = QuantizeScale::new(5.0, 11.0, &PALETTE);
    let axis = LinearScale::new(5.0, 11.0, 0.0, 400.0);
    let ticks = legend_ticks(&color, &axis);

    assert_eq!(ticks.len(), PALETTE.len());
    assert_eq!(ticks[0].label, "5.0");
    assert!((ticks[0].position - 0.0).abs() < 1e-9);
    // last tick is the lower bound of the final bucket, short of the domain max
    assert!(ticks.last().unwrap().position < 400.0);
}

#[test]
fn swatches_are_evenly_spaced() {
    let chart = HeatMap::new(sample_dataset()).expect("valid dataset");
    let mut opts = RenderOptions::default();
    opts.legend_width = 440; // step of 40.0 divides evenly by 11
    let svg = chart.render_svg(&opts);

    for i in 0..PALETTE.len() {
        let x = format!("x=\"{:.1}\"", 40.0 * i as f64);
        let swatch = format!("class=\"legend-cell\" {x}");
        assert!(svg.contains(&swatch), "missing swatch at {x}");
    }
}
