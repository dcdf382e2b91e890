//! Status Chart Component
//!
//! Donut chart of ticket status counts using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, Stats};

const PENDING_COLOR: &str = "#f59e0b"; // amber
const RESOLVED_COLOR: &str = "#22c55e"; // green
const BACKGROUND_COLOR: &str = "#1f2937"; // gray-800
const EMPTY_RING_COLOR: &str = "#374151"; // gray-700

/// Fraction of the outer radius kept as the donut hole
const CUTOUT: f64 = 0.75;

/// Ticket status donut chart.
///
/// The component owns the canvas through its node ref; the effect below is the
/// only writer, and every refresh clears and repaints the whole surface, so a
/// stale rendering never survives a stats update.
#[component]
pub fn StatusChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Repaint when the counters change
    create_effect(move |_| {
        let stats = state.stats.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_status_chart(&canvas, &stats);
        }
    });

    view! {
        <div class="flex items-center gap-6">
            <canvas
                node_ref=canvas_ref
                width="220"
                height="220"
                class="w-44 h-44"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend showing segment colors and counts
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-2">
            <LegendEntry
                color=PENDING_COLOR
                label="Pending"
                count=Signal::derive(move || state.stats.get().pending)
            />
            <LegendEntry
                color=RESOLVED_COLOR
                label="Resolved"
                count=Signal::derive(move || state.stats.get().resolved)
            />
        </div>
    }
}

#[component]
fn LegendEntry(
    color: &'static str,
    label: &'static str,
    #[prop(into)]
    count: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-300">{label}</span>
            <span class="text-sm font-semibold">{move || count.get()}</span>
        </div>
    }
}

/// Fraction of the full turn a segment covers
fn segment_sweep(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total)
    }
}

/// Draw the donut on canvas
fn draw_status_chart(canvas: &HtmlCanvasElement, stats: &Stats) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) - 6.0;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND_COLOR.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let total = stats.pending + stats.resolved;

    if total == 0 {
        // Placeholder ring
        ctx.set_fill_style(&EMPTY_RING_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, 0.0, std::f64::consts::TAU);
        ctx.fill();
    } else {
        // Segments start at 12 o'clock and run clockwise
        let mut start = -std::f64::consts::FRAC_PI_2;
        for (count, color) in [(stats.pending, PENDING_COLOR), (stats.resolved, RESOLVED_COLOR)] {
            let sweep = segment_sweep(count, total) * std::f64::consts::TAU;
            if sweep == 0.0 {
                continue;
            }

            ctx.set_fill_style(&color.into());
            ctx.begin_path();
            ctx.move_to(cx, cy);
            let _ = ctx.arc(cx, cy, outer, start, start + sweep);
            ctx.close_path();
            ctx.fill();

            start += sweep;
        }
    }

    // Punch the hole
    ctx.set_fill_style(&BACKGROUND_COLOR.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, outer * CUTOUT, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Center label
    ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
    ctx.set_text_align("center");
    if total == 0 {
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No tickets", cx, cy + 5.0);
    } else {
        ctx.set_font("bold 28px sans-serif");
        let _ = ctx.fill_text(&total.to_string(), cx, cy + 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweeps_are_proportional() {
        assert_eq!(segment_sweep(2, 8), 0.25);
        assert_eq!(segment_sweep(8, 8), 1.0);
        assert_eq!(segment_sweep(0, 8), 0.0);
    }

    #[test]
    fn test_sweeps_cover_full_turn() {
        let stats = Stats { total: 7, pending: 3, resolved: 4 };
        let sum = segment_sweep(stats.pending, 7) + segment_sweep(stats.resolved, 7);
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_has_no_sweep() {
        assert_eq!(segment_sweep(0, 0), 0.0);
    }
}
