use std::path::Path;

use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::MoveHistogram;
use crate::error::CoreError;

const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl ChartStyle {
    pub fn for_histogram(histogram: &MoveHistogram) -> Self {
        Self {
            width: 1800,
            height: 900,
            title: format!(
                "Distribution of Moves Required to Solve Random Boards (n={})",
                histogram.total()
            ),
        }
    }
}

/// Render the histogram as an SVG file at `path`.
pub fn render_svg(
    histogram: &MoveHistogram,
    path: &Path,
    style: &ChartStyle,
) -> Result<(), CoreError> {
    if histogram.is_empty() {
        return Err(CoreError::Render("histogram has no samples".into()));
    }
    histogram.dense_buckets()?;
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw(&root, histogram, style)?;
    root.present().map_err(render_err)?;
    tracing::debug!(path = %path.display(), "chart written");
    Ok(())
}

pub fn render_svg_to_string(
    histogram: &MoveHistogram,
    style: &ChartStyle,
) -> Result<String, CoreError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        draw(&root, histogram, style)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    histogram: &MoveHistogram,
    style: &ChartStyle,
) -> Result<(), CoreError> {
    let buckets = histogram.dense_buckets()?;
    let (Some(&(lo, _)), Some(&(hi, _))) = (buckets.first(), buckets.last()) else {
        return Err(CoreError::Render("histogram has no samples".into()));
    };
    // A zero-width coordinate range cannot be mapped, so a lone value gets a spare slot.
    let (lo, upper) = if hi > lo {
        (lo, hi)
    } else if let Some(next) = lo.checked_add(1) {
        (lo, next)
    } else {
        (lo - 1, lo)
    };
    let y_top = histogram.max_count() as u32 + 1;

    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((lo..upper).into_segmented(), 0u32..y_top)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .x_labels((upper - lo) as usize + 2)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(m) | SegmentValue::Exact(m) => m.to_string(),
            SegmentValue::Last => String::new(),
        })
        .x_desc("Number of Moves Required")
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(2)
                .data(
                    buckets
                        .into_iter()
                        .map(|(moves, count)| (moves, count as u32)),
                ),
        )
        .map_err(render_err)?;

    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> CoreError {
    CoreError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_histogram() -> MoveHistogram {
        [10, 10, 12, 15, 12, 10].into_iter().collect()
    }

    #[test]
    fn test_svg_labels_every_move_count() {
        let histogram = sample_histogram();
        let svg = render_svg_to_string(&histogram, &ChartStyle::for_histogram(&histogram)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("(n=6)"));
        let labels: Vec<&str> = svg
            .split("<text")
            .skip(1)
            .filter_map(|t| {
                let start = t.find('>')? + 1;
                let end = t.find("</text>")?;
                Some(t[start..end].trim())
            })
            .collect();
        for moves in 10..=15 {
            assert!(labels.contains(&moves.to_string().as_str()), "missing tick {moves}");
        }
    }

    #[test]
    fn test_svg_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves_histogram.svg");
        let histogram = sample_histogram();
        render_svg(&histogram, &path, &ChartStyle::for_histogram(&histogram)).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn test_single_value_renders() {
        let histogram: MoveHistogram = [7].into_iter().collect();
        assert!(render_svg_to_string(&histogram, &ChartStyle::for_histogram(&histogram)).is_ok());
    }

    #[test]
    fn test_empty_histogram_is_an_error() {
        let histogram = MoveHistogram::new();
        let err = render_svg_to_string(&histogram, &ChartStyle::for_histogram(&histogram));
        assert!(matches!(err, Err(CoreError::Render(_))));
    }

    #[test]
    fn test_largest_move_count_renders() {
        let histogram: MoveHistogram = [u32::MAX].into_iter().collect();
        assert!(render_svg_to_string(&histogram, &ChartStyle::for_histogram(&histogram)).is_ok());
    }

    #[test]
    fn test_wide_range_is_refused_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.svg");
        let histogram: MoveHistogram = [0, 4_000_000_000].into_iter().collect();
        let err = render_svg(&histogram, &path, &ChartStyle::for_histogram(&histogram));
        assert!(matches!(err, Err(CoreError::AxisTooWide { .. })));
        assert!(!path.exists());
    }
}
