// File: crates/heatmap-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and HTML files.

use heatmap_core::{Dataset, HeatMap, MonthRecord, RenderOptions};

fn sample_dataset() -> Dataset {
    Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            MonthRecord { year: 1950, month: 1, variance: -0.5 },
            MonthRecord { year: 1950, month: 2, variance: 0.1 },
            MonthRecord { year: 1951, month: 1, variance: 0.3 },
            MonthRecord { year: 1951, month: 12, variance: -1.2 },
        ],
    }
}

#[test]
fn render_smoke_svg_and_html() {
    let chart = HeatMap::new(sample_dataset()).expect("valid dataset");
    let opts = RenderOptions::default();

    let svg = chart.render_svg(&opts);
    assert!(svg.starts_with("<svg"), "should open with an svg element");
    assert!(svg.trim_end().ends_with("</svg>"), "should close the svg element");

    let out_svg = std::path::PathBuf::from("target/test_out/heatmap.svg");
    chart.render_to_svg(&opts, &out_svg).expect("render svg should succeed");
    let meta = std::fs::metadata(&out_svg).expect("svg output exists");
    assert!(meta.len() > 0, "svg should be non-empty");

    let out_html = std::path::PathBuf::from("target/test_out/heatmap.html");
    chart.render_to_html(&opts, &out_html).expect("render html should succeed");
    let html = std::fs::read_to_string(&out_html).expect("read html output");
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("id=\"title\""));
    assert!(html.contains("id=\"description\""));
    assert!(html.contains("id=\"tooltip\""));
    assert!(html.contains("<svg"), "page should embed the chart");
}

#[test]
fn html_description_mentions_span_and_base() {
    let chart = HeatMap::new(sample_dataset()).expect("valid dataset");
    let html = chart.render_html_page(&RenderOptions::default());
    assert!(html.contains("1950 - 1951"));
    assert!(html.contains("8.66"));
}
