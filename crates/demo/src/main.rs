// File: crates/demo/src/main.rs
// Summary: Demo fetches the global temperature dataset (URL or local file) and renders SVG + HTML.

use std::path::PathBuf;

use anyhow::{Context, Result};
use heatmap_core::{theme, Dataset, HeatMap, RenderOptions};

/// Canonical dataset location; used when no source argument is given.
const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

struct Args {
    source: String,
    out_dir: PathBuf,
    theme: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let dataset = load_dataset(&args.source)
        .with_context(|| format!("failed to load dataset from '{}'", args.source))?;
    let (min_temp, max_temp) = dataset.temperature_range();
    log::info!(
        "loaded {} records across {} years, temperature range [{:.2}, {:.2}] °C",
        dataset.len(),
        dataset.years().len(),
        min_temp,
        max_temp
    );

    let chart = HeatMap::new(dataset)?;
    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);

    let svg_path = args.out_dir.join("heatmap.svg");
    chart.render_to_svg(&opts, &svg_path)?;
    log::info!("wrote {}", svg_path.display());

    let html_path = args.out_dir.join("heatmap.html");
    chart.render_to_html(&opts, &html_path)?;
    log::info!("wrote {}", html_path.display());

    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut source = DEFAULT_URL.to_string();
    let mut out_dir = PathBuf::from("target/out");
    let mut theme = "light".to_string();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--out-dir" => {
                out_dir = PathBuf::from(argv.next().context("--out-dir requires a value")?);
            }
            "--theme" => {
                theme = argv.next().context("--theme requires a value")?;
            }
            "--help" | "-h" => {
                eprintln!("usage: heatmap-demo [SOURCE] [--out-dir DIR] [--theme NAME]");
                eprintln!("  SOURCE   dataset URL or local JSON file (default: upstream dataset)");
                std::process::exit(0);
            }
            other => source = other.to_string(),
        }
    }

    Ok(Args { source, out_dir, theme })
}

/// Load the dataset from a URL or a local file path. One shot; a failure is
/// reported up the error chain rather than silently skipping the render.
fn load_dataset(source: &str) -> Result<Dataset> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_dataset(source)
    } else {
        let text =
            std::fs::read_to_string(source).with_context(|| format!("reading {source}"))?;
        Dataset::from_json_str(&text)
    }
}

fn fetch_dataset(url: &str) -> Result<Dataset> {
    log::info!("fetching {url}");
    let response = reqwest::blocking::get(url)
        .context("requesting dataset")?
        .error_for_status()
        .context("dataset request failed")?;
    let dataset: Dataset = response.json().context("decoding dataset JSON")?;
    dataset.validate()?;
    Ok(dataset)
}
