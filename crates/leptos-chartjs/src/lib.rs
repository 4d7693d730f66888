//! Leptos Chart.js Bindings
//!
//! Thin typed wrapper around the global `Chart` constructor from Chart.js.
//! Callers describe a chart as a [`ChartSpec`] (labels plus numeric series)
//! and mount it with [`ChartCanvas`]; Chart.js does the drawing.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` class from Chart.js
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(static_method_of = Chart, js_name = getChart, catch)]
    fn get_chart(canvas: &HtmlCanvasElement) -> Result<Option<Chart>, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

// ========================
// Chart Description
// ========================

/// Chart.js chart type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One labelled series of numbers
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// Curve smoothing used for line series
const LINE_TENSION: f64 = 0.4;

/// Fill opacity under line series
const LINE_FILL_ALPHA: f64 = 0.1;

impl Dataset {
    /// Smoothed line with a translucent fill of the same colour
    pub fn line(label: impl Into<String>, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: Some(color.to_string()),
            background_color: Some(translucent(color, LINE_FILL_ALPHA)),
            tension: Some(LINE_TENSION),
        }
    }

    /// Solid bar series
    pub fn bar(label: impl Into<String>, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: Some(color.to_string()),
            tension: None,
        }
    }
}

/// Everything needed to draw one chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            labels,
            datasets: Vec::new(),
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Chart.js configuration object for this spec
    fn config(&self) -> ChartConfig<'_> {
        ChartConfig {
            kind: self.kind,
            data: ChartData {
                labels: &self.labels,
                datasets: &self.datasets,
            },
            options: ChartOptions {
                responsive: true,
                plugins: ChartPlugins {
                    title: ChartTitle {
                        display: !self.title.is_empty(),
                        text: &self.title,
                    },
                },
            },
        }
    }
}

// ========================
// Chart.js Config Shape
// ========================

#[derive(Serialize)]
struct ChartConfig<'a> {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: ChartData<'a>,
    options: ChartOptions<'a>,
}

#[derive(Serialize)]
struct ChartData<'a> {
    labels: &'a [String],
    datasets: &'a [Dataset],
}

#[derive(Serialize)]
struct ChartOptions<'a> {
    responsive: bool,
    plugins: ChartPlugins<'a>,
}

#[derive(Serialize)]
struct ChartPlugins<'a> {
    title: ChartTitle<'a>,
}

#[derive(Serialize)]
struct ChartTitle<'a> {
    display: bool,
    text: &'a str,
}

/// `#RRGGBB` to `rgba(r, g, b, alpha)`; anything else is returned unchanged
pub fn translucent(hex: &str, alpha: f64) -> String {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.is_ascii() => d,
        _ => return hex.to_string(),
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}

// ========================
// Drawing
// ========================

/// Something that can be torn down, i.e. a live Chart.js instance
pub trait Destroy {
    fn destroy(&self);
}

impl Destroy for Chart {
    fn destroy(&self) {
        Chart::destroy(self)
    }
}

/// Holds at most one live chart; replacing or clearing destroys the old one
pub struct ChartSlot<C: Destroy> {
    current: Option<C>,
}

impl<C: Destroy> Default for ChartSlot<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: Destroy> ChartSlot<C> {
    pub fn replace(&mut self, chart: C) {
        self.clear();
        self.current = Some(chart);
    }

    pub fn clear(&mut self) {
        if let Some(chart) = self.current.take() {
            chart.destroy();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// Draw `spec` on `canvas`, replacing any chart already bound to it
pub fn draw(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<Chart, JsValue> {
    if let Some(existing) = Chart::get_chart(canvas)? {
        existing.destroy();
    }
    let config = serde_wasm_bindgen::to_value(&spec.config())?;
    Chart::new(canvas, &config)
}

/// Canvas that draws `spec` once it is mounted and destroys the chart when
/// it is unmounted
#[component]
pub fn ChartCanvas(
    spec: ChartSpec,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let slot = StoredValue::new_local(ChartSlot::<Chart>::default());

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            match draw(&canvas, &spec) {
                Ok(chart) => slot.update_value(|s| s.replace(chart)),
                Err(err) => tracing::error!(error = ?err, title = %spec.title, "chart draw failed"),
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|s| s.clear());
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class=class.unwrap_or_else(|| "chart-canvas".to_string())
        ></canvas>
    }
}
