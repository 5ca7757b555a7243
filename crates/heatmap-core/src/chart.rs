// File: crates/heatmap-core/src/chart.rs
// Summary: Heat-map chart struct and the SVG/HTML rendering pipeline.

use std::collections::HashMap;

use anyhow::Result;

use crate::axis;
use crate::dataset::{Dataset, DatasetError};
use crate::scale::{BandScale, LinearScale, QuantizeScale};
use crate::svg::{fmt_px, SvgWriter};
use crate::theme::Theme;
use crate::tooltip;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub legend_width: i32,
    pub legend_height: i32,
    /// Vertical gap between the plot bottom and the legend axis line.
    pub legend_offset: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            legend_width: 400,
            legend_height: 20,
            legend_offset: 50,
        }
    }
}

/// One heat map over one validated dataset. Rendering is pure with respect
/// to the dataset and options: identical inputs yield byte-identical output.
pub struct HeatMap {
    dataset: Dataset,
}

impl HeatMap {
    /// Validates the dataset up front; rendering itself cannot fail.
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        dataset.validate()?;
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Render the full SVG document as a string.
    pub fn render_svg(&self, opts: &RenderOptions) -> String {
        let base = self.dataset.base_temperature;
        let years = self.dataset.years();
        let year_index: HashMap<i32, usize> =
            years.iter().enumerate().map(|(i, &y)| (y, i)).collect();

        let plot_w = (opts.width - opts.insets.hsum() as i32).max(1) as f64;
        let plot_h = (opts.height - opts.insets.vsum() as i32).max(1) as f64;
        let x = BandScale::new(0.0, plot_w, years.len());
        let y = BandScale::new(0.0, plot_h, 12);

        let (min_temp, max_temp) = self.dataset.temperature_range();
        let palette = opts.theme.palette();
        let color = QuantizeScale::new(min_temp, max_temp, palette);

        log::debug!(
            "rendering {} cells over {} years, temperature range [{:.2}, {:.2}]",
            self.dataset.len(),
            years.len(),
            min_temp,
            max_temp
        );

        let mut w = SvgWriter::new();
        w.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg"),
                ("width", &opts.width.to_string()),
                ("height", &opts.height.to_string()),
                ("viewBox", &format!("0 0 {} {}", opts.width, opts.height)),
                ("font-family", "sans-serif"),
                ("font-size", "12"),
            ],
        );
        w.empty(
            "rect",
            &[("width", "100%"), ("height", "100%"), ("fill", opts.theme.background)],
        );
        w.open(
            "g",
            &[(
                "transform",
                &format!("translate({}, {})", opts.insets.left, opts.insets.top),
            )],
        );

        self.draw_cells(&mut w, opts, &x, &y, &color, &year_index);
        self.draw_x_axis(&mut w, opts, &years, &x, plot_w, plot_h);
        self.draw_y_axis(&mut w, opts, &y, plot_h);
        self.draw_legend(&mut w, opts, &color, min_temp, max_temp, plot_w, plot_h);

        w.close("g");
        w.close("svg");
        w.into_string()
    }

    /// Render the SVG to a file, creating parent directories as needed.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let svg = self.render_svg(opts);
        if let Some(parent) = output_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, svg)?;
        Ok(())
    }

    /// Render a self-contained HTML page: headings, the inline SVG, a tooltip
    /// element, and the hover script that drives it.
    pub fn render_html_page(&self, opts: &RenderOptions) -> String {
        let years = self.dataset.years();
        let first = years.iter().min().copied().unwrap_or_default();
        let last = years.iter().max().copied().unwrap_or_default();
        let description = format!(
            "{} - {}: base temperature {:.2}\u{b0}C",
            first, last, self.dataset.base_temperature
        );

        // No format!() here: the embedded script uses braces freely.
        PAGE_TEMPLATE
            .replace("__DESCRIPTION__", &crate::svg::escape(&description))
            .replace("__TOOLTIP_BG__", opts.theme.tooltip_background)
            .replace("__TOOLTIP_FG__", opts.theme.tooltip_text)
            .replace("__BACKGROUND__", opts.theme.background)
            .replace("__LABEL__", opts.theme.axis_label)
            .replace("__SVG__", &self.render_svg(opts))
    }

    /// Render the HTML page to a file, creating parent directories as needed.
    pub fn render_to_html(
        &self,
        opts: &RenderOptions,
        output_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let html = self.render_html_page(opts);
        if let Some(parent) = output_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, html)?;
        Ok(())
    }

    // ---- drawing helpers ----------------------------------------------------

    fn draw_cells(
        &self,
        w: &mut SvgWriter,
        opts: &RenderOptions,
        x: &BandScale,
        y: &BandScale,
        color: &QuantizeScale<'_, &'static str>,
        year_index: &HashMap<i32, usize>,
    ) {
        let base = self.dataset.base_temperature;
        let bw = fmt_px(x.bandwidth());
        let bh = fmt_px(y.bandwidth());

        for rec in &self.dataset.monthly_variance {
            // Every year is in the index; years() was built from these records.
            let xi = match year_index.get(&rec.year) {
                Some(&i) => i,
                None => continue,
            };
            let temp = rec.temperature(base);
            w.open(
                "rect",
                &[
                    ("class", "cell"),
                    ("x", &fmt_px(x.band_start(xi))),
                    ("y", &fmt_px(y.band_start(rec.month_index() as usize))),
                    ("width", &bw),
                    ("height", &bh),
                    ("fill", color.value_for(temp)),
                    ("stroke", opts.theme.cell_stroke),
                    ("data-year", &rec.year.to_string()),
                    ("data-month", &rec.month_index().to_string()),
                    ("data-temp", &temp.to_string()),
                    ("data-variance", &rec.variance.to_string()),
                ],
            );
            w.element("title", &[], &tooltip::tooltip_text(rec, base));
            w.close("rect");
        }
    }

    fn draw_x_axis(
        &self,
        w: &mut SvgWriter,
        opts: &RenderOptions,
        years: &[i32],
        x: &BandScale,
        plot_w: f64,
        plot_h: f64,
    ) {
        w.open(
            "g",
            &[("id", "x-axis"), ("transform", &format!("translate(0, {})", fmt_px(plot_h)))],
        );
        w.line(0.0, 0.0, plot_w, 0.0, opts.theme.axis_line);
        for tick in axis::year_ticks(years, x) {
            w.line(tick.position, 0.0, tick.position, 6.0, opts.theme.axis_line);
            w.element(
                "text",
                &[
                    ("x", &fmt_px(tick.position)),
                    ("y", "20"),
                    ("text-anchor", "middle"),
                    ("fill", opts.theme.tick),
                ],
                &tick.label,
            );
        }
        w.close("g");
    }

    fn draw_y_axis(&self, w: &mut SvgWriter, opts: &RenderOptions, y: &BandScale, plot_h: f64) {
        w.open("g", &[("id", "y-axis")]);
        w.line(0.0, 0.0, 0.0, plot_h, opts.theme.axis_line);
        for tick in axis::month_ticks(y) {
            w.line(-6.0, tick.position, 0.0, tick.position, opts.theme.axis_line);
            w.element(
                "text",
                &[
                    ("x", "-10"),
                    ("y", &fmt_px(tick.position)),
                    ("text-anchor", "end"),
                    ("dominant-baseline", "middle"),
                    ("fill", opts.theme.tick),
                ],
                &tick.label,
            );
        }
        w.close("g");
    }

    fn draw_legend(
        &self,
        w: &mut SvgWriter,
        opts: &RenderOptions,
        color: &QuantizeScale<'_, &'static str>,
        min_temp: f64,
        max_temp: f64,
        plot_w: f64,
        plot_h: f64,
    ) {
        let legend_w = opts.legend_width as f64;
        let legend_h = opts.legend_height as f64;
        let origin_x = (plot_w - legend_w) * 0.5;
        let origin_y = plot_h + opts.legend_offset as f64;

        w.open(
            "g",
            &[
                ("id", "legend"),
                ("transform", &format!("translate({}, {})", fmt_px(origin_x), fmt_px(origin_y))),
            ],
        );

        // Swatches sit above the axis line, one per palette entry.
        let palette = opts.theme.palette();
        let step = legend_w / palette.len() as f64;
        for (i, swatch) in palette.iter().enumerate() {
            w.empty(
                "rect",
                &[
                    ("class", "legend-cell"),
                    ("x", &fmt_px(step * i as f64)),
                    ("y", &fmt_px(-legend_h)),
                    ("width", &fmt_px(step)),
                    ("height", &fmt_px(legend_h)),
                    ("fill", swatch),
                    ("stroke", opts.theme.axis_line),
                ],
            );
        }

        let legend_axis = LinearScale::new(min_temp, max_temp, 0.0, legend_w);
        w.line(0.0, 0.0, legend_w, 0.0, opts.theme.axis_line);
        for tick in axis::legend_ticks(color, &legend_axis) {
            w.line(tick.position, 0.0, tick.position, 10.0, opts.theme.axis_line);
            w.element(
                "text",
                &[
                    ("x", &fmt_px(tick.position)),
                    ("y", "22"),
                    ("text-anchor", "middle"),
                    ("fill", opts.theme.tick),
                ],
                &tick.label,
            );
        }
        w.close("g");
    }
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Monthly Global Land-Surface Temperature</title>
<style>
  body { font-family: sans-serif; background: __BACKGROUND__; color: __LABEL__; margin: 0; padding: 16px; }
  h1, h2 { text-align: center; margin: 8px 0; }
  #heat-map { display: flex; justify-content: center; }
  #tooltip {
    position: absolute;
    opacity: 0;
    pointer-events: none;
    background: __TOOLTIP_BG__;
    color: __TOOLTIP_FG__;
    padding: 6px 10px;
    border-radius: 6px;
    font-size: 13px;
    text-align: center;
  }
</style>
</head>
<body>
<h1 id="title">Monthly Global Land-Surface Temperature</h1>
<h2 id="description">__DESCRIPTION__</h2>
<div id="heat-map">
__SVG__
</div>
<div id="tooltip"></div>
<script>
const MONTHS = ["January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December"];
const tooltip = document.getElementById("tooltip");

for (const cell of document.querySelectorAll(".cell")) {
  cell.addEventListener("pointerenter", () => {
    const year = cell.dataset.year;
    const month = MONTHS[Number(cell.dataset.month)];
    const temp = Number(cell.dataset.temp).toFixed(1);
    const variance = Number(cell.dataset.variance);
    const sign = variance > 0 ? "+" : "";
    tooltip.dataset.year = year;
    tooltip.innerHTML = year + " - " + month + "<br>" +
      temp + "&#176;C<br>" +
      sign + variance.toFixed(1) + "&#176;C";
    tooltip.style.opacity = 0.9;
  });
  cell.addEventListener("pointermove", (e) => {
    tooltip.style.left = (e.pageX + 10) + "px";
    tooltip.style.top = (e.pageY - 28) + "px";
  });
  cell.addEventListener("pointerleave", () => {
    tooltip.style.opacity = 0;
  });
}
</script>
</body>
</html>
"#;
