use std::ops::Range;

use plotters::prelude::*;

use crate::{
    curve::{CurveConfig, CurveSample},
    error::{MorphkitError, MorphkitResult},
};

/// Output bitmap size of the curve figure, square like the classic plot.
pub const FIGURE_SIZE_PX: (u32, u32) = (800, 800);

/// Render the De Casteljau figure for `samples` to `config.output_path` as
/// a PNG: red control points with their polygon legs, a blue rung between
/// the two first-level points at every sample, and green dots tracing the
/// curve itself. Deterministic for a given config.
pub fn render_curve_figure(
    config: &CurveConfig,
    samples: &[CurveSample],
) -> MorphkitResult<()> {
    let path = &config.output_path;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| MorphkitError::encoding_failure(path, e))?;
    }

    draw(config, samples).map_err(|e| MorphkitError::encoding_failure(path, e))
}

fn draw(
    config: &CurveConfig,
    samples: &[CurveSample],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let root =
        BitMapBackend::new(&config.output_path, FIGURE_SIZE_PX).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = padded_bounds(config);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Quadratic Bezier via De Casteljau",
            ("sans-serif", 28),
        )
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("B(t)")
        .draw()?;

    let controls = [config.p0, config.p1, config.p2];

    // Control polygon legs under everything else.
    chart.draw_series(LineSeries::new(
        controls.iter().map(|p| (p.x, p.y)),
        BLUE.mix(0.3).stroke_width(1),
    ))?;

    // One rung per sample between the two first-level points.
    chart
        .draw_series(samples.iter().map(|s| {
            PathElement::new(
                vec![(s.q0.x, s.q0.y), (s.q1.x, s.q1.y)],
                BLUE.mix(0.25),
            )
        }))?
        .label("intermediate points")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], BLUE));

    chart
        .draw_series(
            samples
                .iter()
                .map(|s| Circle::new((s.b.x, s.b.y), 3, GREEN.filled())),
        )?
        .label("curve point B")
        .legend(|(x, y)| Circle::new((x, y), 3, GREEN.filled()));

    // Control points last so they stay visible over the rungs.
    chart
        .draw_series(
            controls
                .iter()
                .map(|p| Circle::new((p.x, p.y), 4, RED.filled())),
        )?
        .label("control points")
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Data bounds of the figure: the control point extents with 5% padding.
/// The curve lies inside the convex hull of its controls, so the controls
/// bound everything drawn.
fn padded_bounds(config: &CurveConfig) -> (Range<f64>, Range<f64>) {
    let controls = [config.p0, config.p1, config.p2];

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in controls {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    let x_pad = 0.05 * (x_max - x_min).abs().max(1e-9);
    let y_pad = 0.05 * (y_max - y_min).abs().max(1e-9);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn bounds_cover_the_controls_with_padding() {
        let config = CurveConfig::default();
        let (x, y) = padded_bounds(&config);
        assert!(x.start < 0.0 && x.end > 1.0);
        assert!(y.start < 0.0 && y.end > 1.0);
    }

    #[test]
    fn bounds_stay_nonempty_for_flat_controls() {
        let config = CurveConfig {
            p0: Point::new(0.0, 2.0),
            p1: Point::new(1.0, 2.0),
            p2: Point::new(2.0, 2.0),
            ..CurveConfig::default()
        };
        let (_, y) = padded_bounds(&config);
        assert!(y.start < y.end);
    }
}
