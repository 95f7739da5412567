// File: crates/chart-core/tests/line_scenario.rs
// Purpose: End-to-end layout check for a two-series year line chart.

use chart_core::{Chart, ChartConfig, Insets, Series, Shape, XAxis};

fn two_series_chart() -> Chart {
    let config = ChartConfig::new(
        595,
        290,
        Insets::new(40, 60, 80, 40),
        vec![
            Series::from_values("alpha", "#E3120B", &[1.8, 1.1, 1.1, 1.1, 1.1, 3.2])
                .with_stroke_width(2)
                .with_label_offsets(4.0, 0.0),
            Series::from_values("beta", "#006BA2", &[1.1, 1.1, 1.1, 1.1, 1.8, 0.9])
                .with_label_offsets(4.0, 12.0),
        ],
        XAxis::years(&["2020", "2021", "2022", "2023", "2024", "2025"]),
    );
    Chart::line(config)
}

#[test]
fn combined_domain_is_zero_to_peak() {
    let chart = two_series_chart();
    let bounds = chart_core::min_max_values(&chart.config.series);
    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 3.2);
}

#[test]
fn first_series_line_terminates_at_the_peak() {
    let chart = two_series_chart();
    let scene = chart.scene().expect("valid config renders");

    // plot: width 595-40-60=495, height 290-80-40=170, origin (40,80);
    // domain [0,3.2] so the final value 3.2 maps to the plot top.
    let path = scene
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Path { points, stroke, .. } if stroke == "#E3120B" => Some(points.clone()),
            _ => None,
        })
        .expect("first series path present");
    let &(x, y) = path.last().unwrap();
    assert!((x - 535.0).abs() < 1e-9, "last x {x}");
    assert!((y - 80.0).abs() < 1e-9, "last y {y}");
}

#[test]
fn trailing_label_sits_at_the_final_point_plus_offsets() {
    let chart = two_series_chart();
    let scene = chart.scene().unwrap();

    let label = scene
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Text { x, y, content, fill, .. } if content == "alpha" => {
                Some((*x, *y, fill.clone()))
            }
            _ => None,
        })
        .expect("series label present");
    // x = margin.left + chart_width - margin.right + label_x_offset
    assert!((label.0 - 479.0).abs() < 1e-9, "label x {}", label.0);
    assert!((label.1 - 80.0).abs() < 1e-9, "label y {}", label.1);
    assert_eq!(label.2, "#E3120B");
}

#[test]
fn year_axis_labels_use_the_compact_format() {
    let chart = two_series_chart();
    let scene = chart.scene().unwrap();

    let texts: Vec<&str> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"2020"), "first tick keeps the full year");
    assert!(texts.contains(&"21"), "later ticks are 2-digit");
    assert!(!texts.contains(&"2021"));
}

#[test]
fn gridlines_span_the_plotting_width() {
    let chart = two_series_chart();
    let scene = chart.scene().unwrap();

    let grid: Vec<_> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Line { x1, y1, x2, y2, stroke, .. } if stroke == "red" => {
                Some((*x1, *y1, *x2, *y2))
            }
            _ => None,
        })
        .collect();
    assert!(!grid.is_empty());
    for (x1, y1, x2, y2) in grid {
        assert_eq!(y1, y2, "gridlines are horizontal");
        assert!((x1 - 40.0).abs() < 1e-9);
        assert!((x2 - 535.0).abs() < 1e-9);
    }
}
