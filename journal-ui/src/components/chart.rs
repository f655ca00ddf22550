//! Chart Component
//!
//! Line chart of the selected session's sets using HTML5 Canvas, x = set
//! sequence, y = volume (or weight and reps).

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use workout_journal::{ChartMetric, ChartSeries, EMPTY_CHART_MESSAGE};

use crate::state::use_global_state;

/// Chart colors for different series
const SERIES_COLORS: [&str; 2] = [
    "#FF9800", // Orange (primary)
    "#2196F3", // Blue
];

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Set chart component; a placeholder stands in while there are no sets
#[component]
pub fn VolumeChart() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (metric, set_metric) = create_signal(ChartMetric::Volume);

    let series = create_memo(move |_| {
        state
            .view
            .with(|v| ChartSeries::from_sets(v.sets(), metric.get()))
    });

    // Redraw chart when the sets or the metric change
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series);
        }
    });

    view! {
        <div class="relative">
            <p
                class="h-64 flex items-center justify-center text-gray-400"
                style:display=move || if series.with(|s| s.is_empty()) { "flex" } else { "none" }
            >
                {EMPTY_CHART_MESSAGE}
            </p>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 rounded-lg"
                style:display=move || if series.with(|s| s.is_empty()) { "none" } else { "block" }
            />

            <ChartLegend series=series />

            <div class="flex justify-center space-x-2 mt-4">
                <MetricButton label="Volume" target=ChartMetric::Volume current=metric set_metric=set_metric />
                <MetricButton label="Weight & reps" target=ChartMetric::WeightAndReps current=metric set_metric=set_metric />
            </div>
        </div>
    }
}

#[component]
fn ChartLegend(series: Memo<ChartSeries>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                series.with(|s| s.names())
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| {
                        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300 capitalize">{*name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn MetricButton(
    label: &'static str,
    target: ChartMetric,
    current: ReadSignal<ChartMetric>,
    set_metric: WriteSignal<ChartMetric>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| set_metric.set(target)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Y axis bounds with 10% padding; a flat series gets ±1
fn y_bounds(series: &ChartSeries) -> (f64, f64) {
    let (min, max) = series.value_range().unwrap_or((0.0, 1.0));
    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Canvas coordinates of each point of series `index`
fn plot_points(series: &ChartSeries, index: usize, width: f64, height: f64) -> Vec<(f64, f64)> {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (y_min, y_max) = y_bounds(series);
    let count = series.points.len();

    series
        .points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let value = *point.values.get(index)?;
            // Evenly spaced by position; a single point sits in the middle
            let x = if count > 1 {
                MARGIN_LEFT + (i as f64 / (count - 1) as f64) * chart_width
            } else {
                MARGIN_LEFT + chart_width / 2.0
            };
            let y = MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;
            Some((x, y))
        })
        .collect()
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        return;
    }

    let (y_min, y_max) = y_bounds(series);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    for index in 0..series.names().len() {
        let points = plot_points(series, index, width, height);
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];

        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(*x, *y);
            } else {
                ctx.line_to(*x, *y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X-axis labels: set sequence numbers
    ctx.set_fill_style(&"#9ca3af".into());
    for ((x, _), point) in plot_points(series, 0, width, height).iter().zip(&series.points) {
        let _ = ctx.fill_text(&format!("#{}", point.seq), x - 8.0, height - 10.0);
    }
}
