// File: crates/heatmap-core/src/svg.rs
// Summary: Minimal SVG element writer over a String buffer.

use std::fmt::Write as _;

/// Escape text for use in attribute values and element content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Pixel coordinate formatting: fixed 1-decimal so output is stable and
/// diffable across runs.
pub fn fmt_px(v: f64) -> String {
    format!("{v:.1}")
}

/// Appends elements to an internal buffer; no nesting validation beyond
/// what the caller does with `open`/`close`.
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Append pre-built markup verbatim.
    pub fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    /// `<tag a="b" ...>` with escaped attribute values.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.write_attrs(attrs);
        self.buf.push_str(">\n");
    }

    /// `</tag>`
    pub fn close(&mut self, tag: &str) {
        let _ = writeln!(self.buf, "</{tag}>");
    }

    /// `<tag a="b" .../>` (no children).
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.write_attrs(attrs);
        self.buf.push_str("/>\n");
    }

    /// `<tag a="b">escaped content</tag>`
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], content: &str) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.write_attrs(attrs);
        self.buf.push('>');
        self.buf.push_str(&escape(content));
        let _ = writeln!(self.buf, "</{tag}>");
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.empty(
            "line",
            &[
                ("x1", &fmt_px(x1)),
                ("y1", &fmt_px(y1)),
                ("x2", &fmt_px(x2)),
                ("y2", &fmt_px(y2)),
                ("stroke", stroke),
            ],
        );
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            let _ = write!(self.buf, " {}=\"{}\"", name, escape(value));
        }
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}
