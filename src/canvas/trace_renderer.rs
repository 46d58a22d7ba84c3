use ecg_viewer_core::SignalStats;
use web_sys::CanvasRenderingContext2d;

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#edf2f7";
const AXIS_TEXT: &str = "#4a5568";
const TRACE_STROKE: &str = "#667eea";
const TRACE_FILL: &str = "rgba(102, 126, 234, 0.1)";

// Margins around the plot, in px. Left and bottom hold tick labels and
// axis titles.
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// Rectangle the trace is drawn into, plus the mapping from data to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (canvas_width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (canvas_height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X pixel for sample `index` out of `len` samples.
    pub fn x_for(&self, index: f64, len: usize) -> f64 {
        let span = (len.max(2) - 1) as f64;
        self.left + index / span * self.width
    }

    pub fn y_for(&self, value: f64, lo: f64, hi: f64) -> f64 {
        let t = (value - lo) / (hi - lo);
        self.bottom() - t * self.height
    }
}

// Spans below this fraction of the signal's magnitude count as flat.
const FLAT_RELATIVE_SPAN: f64 = 1e-9;

/// Vertical extent of the trace with 5% headroom. A flat signal gets a
/// unit-wide band so it still draws mid-plot. Flatness is relative to the
/// signal's magnitude, so a large offset with a tiny wobble is flat too.
pub fn value_range(samples: &[f64]) -> (f64, f64) {
    let Some(stats) = SignalStats::from_signal(samples) else {
        return (0.0, 1.0);
    };
    let span = stats.max - stats.min;
    let magnitude = stats.max.abs().max(stats.min.abs()).max(1.0);
    if span <= magnitude * FLAT_RELATIVE_SPAN {
        (stats.min - 0.5, stats.max + 0.5)
    } else {
        (stats.min - span * 0.05, stats.max + span * 0.05)
    }
}

/// Smallest value from the 1-2-5 progression that is >= `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * base)
        .find(|&s| s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * base)
}

/// Tick positions covering `[lo, hi]`, at most about `max_ticks` of them.
///
/// Positions are computed as `first + k * step` with `k` bounded, so a step
/// below the precision of `lo` cannot stall the loop.
pub fn ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if hi <= lo || max_ticks == 0 {
        return Vec::new();
    }
    let step = nice_step((hi - lo) / max_ticks as f64);
    let first = (lo / step).ceil() * step;
    let limit = max_ticks * 2 + 2;

    (0..limit)
        .map(|k| first + k as f64 * step)
        .take_while(|&v| v <= hi + step * 1e-9)
        // Snap drift like 0.30000000000000004; `+ 0.0` turns -0.0 into 0.0
        .map(|v| (v / step).round() * step + 0.0)
        .collect()
}

fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", value)
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// Draw one signal as a line chart: x is the sample position, y the
/// amplitude. Uses a min/max envelope when there are more samples than
/// pixel columns.
pub fn draw_trace(
    ctx: &CanvasRenderingContext2d,
    samples: &[f64],
    canvas_width: f64,
    canvas_height: f64,
) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    let plot = PlotArea::new(canvas_width, canvas_height);
    let (lo, hi) = value_range(samples);

    draw_axes(ctx, &plot, lo, hi, samples.len());

    if samples.is_empty() {
        return;
    }

    let samples_per_pixel = samples.len() as f64 / plot.width;

    if samples_per_pixel <= 2.0 {
        // Area fill under the line first, then the line itself.
        ctx.begin_path();
        ctx.move_to(plot.x_for(0.0, samples.len()), plot.bottom());
        for (i, &s) in samples.iter().enumerate() {
            ctx.line_to(plot.x_for(i as f64, samples.len()), plot.y_for(s, lo, hi));
        }
        ctx.line_to(plot.x_for((samples.len() - 1) as f64, samples.len()), plot.bottom());
        ctx.close_path();
        ctx.set_fill_style_str(TRACE_FILL);
        ctx.fill();

        ctx.set_stroke_style_str(TRACE_STROKE);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, &s) in samples.iter().enumerate() {
            let x = plot.x_for(i as f64, samples.len());
            let y = plot.y_for(s, lo, hi);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    } else {
        ctx.set_stroke_style_str(TRACE_STROKE);
        ctx.set_line_width(1.0);
        for px in 0..(plot.width as usize) {
            let i0 = ((px as f64 * samples_per_pixel) as usize).min(samples.len());
            let i1 = (((px + 1) as f64 * samples_per_pixel) as usize).min(samples.len());
            if i0 >= i1 {
                break;
            }

            let mut min_val = f64::MAX;
            let mut max_val = f64::MIN;
            for &s in &samples[i0..i1] {
                if s < min_val { min_val = s; }
                if s > max_val { max_val = s; }
            }

            let x = plot.left + px as f64 + 0.5;
            ctx.begin_path();
            ctx.move_to(x, plot.y_for(max_val, lo, hi));
            ctx.line_to(x, plot.y_for(min_val, lo, hi));
            ctx.stroke();
        }
    }
}

fn draw_axes(ctx: &CanvasRenderingContext2d, plot: &PlotArea, lo: f64, hi: f64, len: usize) {
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");
    ctx.set_fill_style_str(AXIS_TEXT);

    // Amplitude grid + labels
    let y_ticks = ticks(lo, hi, 5);
    let y_step = if y_ticks.len() > 1 { y_ticks[1] - y_ticks[0] } else { 1.0 };
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for &v in &y_ticks {
        let y = plot.y_for(v, lo, hi);
        ctx.set_stroke_style_str(GRID);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.left + plot.width, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format_tick(v, y_step), plot.left - 6.0, y);
    }

    // Sample-position grid + labels
    if len > 1 {
        let x_ticks = ticks(0.0, (len - 1) as f64, 8);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for &t in &x_ticks {
            let x = plot.x_for(t, len);
            ctx.set_stroke_style_str(GRID);
            ctx.begin_path();
            ctx.move_to(x, plot.top);
            ctx.line_to(x, plot.bottom());
            ctx.stroke();
            let _ = ctx.fill_text(&format!("{:.0}", t), x, plot.bottom() + 4.0);
        }
    }

    // Axis titles
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    let _ = ctx.fill_text(
        "Time (samples)",
        plot.left + plot.width / 2.0,
        plot.bottom() + MARGIN_BOTTOM - 2.0,
    );

    ctx.save();
    let _ = ctx.translate(12.0, plot.top + plot.height / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    ctx.set_text_baseline("top");
    let _ = ctx.fill_text("Amplitude", 0.0, -10.0);
    ctx.restore();

    // reset
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(37.0), 50.0);
        assert!((nice_step(0.013) - 0.02).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_ticks_cover_range() {
        // 186 / 8 = 23.25 rounds up to a step of 50
        assert_eq!(ticks(0.0, 186.0, 8), vec![0.0, 50.0, 100.0, 150.0]);
        assert!(ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn test_ticks_fractional_range() {
        // 1.45 / 8 rounds up to a step of 0.2
        let t = ticks(-0.35, 1.1, 8);
        assert_eq!(t.len(), 7);
        assert!((t[0] + 0.2).abs() < 1e-9);
        assert_eq!(t[1].to_string(), "0");
        assert!((t[6] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_offset_narrow_signal_is_flat() {
        let (lo, hi) = value_range(&[1e9, 1e9 + 2.4e-7]);
        assert!((lo - (1e9 - 0.5)).abs() < 1e-6);
        assert!((hi - (1e9 + 0.5)).abs() < 1e-6);

        let t = ticks(lo, hi, 5);
        assert!(!t.is_empty() && t.len() <= 12);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_ticks_bounded_below_precision() {
        // Step is smaller than one ULP at 1e9, so positions do not advance
        let t = ticks(1e9, 1e9 + 2.4e-7, 5);
        assert!(t.len() <= 12);
    }

    #[test]
    fn test_value_range_pads() {
        let (lo, hi) = value_range(&[0.0, 1.0]);
        assert!((lo + 0.05).abs() < 1e-12);
        assert!((hi - 1.05).abs() < 1e-12);

        assert_eq!(value_range(&[0.3, 0.3]), (-0.2, 0.8));
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_plot_mapping() {
        let plot = PlotArea::new(400.0, 200.0);
        assert_eq!(plot.x_for(0.0, 10), plot.left);
        assert!((plot.x_for(9.0, 10) - (plot.left + plot.width)).abs() < 1e-9);
        assert_eq!(plot.y_for(0.0, 0.0, 1.0), plot.bottom());
        assert!((plot.y_for(1.0, 0.0, 1.0) - plot.top).abs() < 1e-9);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(50.0, 25.0), "50");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
    }
}
