// File: crates/demo/src/main.rs
// Summary: Demo mounts each chart kind with literal configuration and writes SVGs.

use anyhow::{Context, Result};
use chart_core::{
    Chart, ChartConfig, ForceSimulation, GraphConfig, GraphLink, GraphNode, GraphView, Insets,
    Series, XAxis,
};
use chart_render_svg::write_svg;
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = PathBuf::from(
        std::env::args().nth(1).unwrap_or_else(|| "target/out".to_string()),
    );

    let bar = bar_chart().scene().context("bar chart")?;
    let bar_path = out_dir.join("bar.svg");
    write_svg(&bar, &bar_path)?;
    println!("Wrote {}", bar_path.display());

    let line = line_chart().scene().context("line chart")?;
    let line_path = out_dir.join("line.svg");
    write_svg(&line, &line_path)?;
    println!("Wrote {}", line_path.display());

    let ts = time_series_chart().scene().context("time-series chart")?;
    let ts_path = out_dir.join("line_time_series.svg");
    write_svg(&ts, &ts_path)?;
    println!("Wrote {}", ts_path.display());

    let view = GraphView::new(graph_config());
    let mut sim: ForceSimulation = view.simulation().context("force graph")?;
    let mut steps = 0usize;
    while sim.step() {
        steps += 1;
    }
    sim.stop();
    let graph_path = out_dir.join("force_graph.svg");
    write_svg(&view.scene(&sim), &graph_path)?;
    println!("Wrote {} (relaxed in {} steps)", graph_path.display(), steps);

    Ok(())
}

fn bar_chart() -> Chart {
    let config = ChartConfig::new(
        595,
        290,
        Insets::new(40, 60, 80, 40),
        vec![Series::from_values(
            "revenue",
            "#E3120B",
            &[1.8, 1.1, 1.1, 1.1, 1.1, 3.2],
        )],
        XAxis::category(&["2020", "2021", "2022", "2023", "2024", "2025"]),
    )
    .with_titles("Annual revenue", "USD, trillions", "Source: demo data");
    Chart::bar(config)
}

fn line_chart() -> Chart {
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
    )
    .with_titles("Two series", "Yearly values", "Source: demo data");
    Chart::line(config)
}

fn time_series_chart() -> Chart {
    let config = ChartConfig::new(
        903,
        290,
        Insets::new(40, 60, 80, 40),
        vec![Series::from_values(
            "intraday",
            "#E3120B",
            &[0.4, 0.9, 0.7, 1.6, 1.2, 2.1],
        )
        .with_stroke_width(2)
        .with_label_offsets(4.0, 0.0)],
        XAxis::timestamps(&[
            "2024-03-01T09:00:00Z",
            "2024-03-01T10:00:00Z",
            "2024-03-01T11:00:00Z",
            "2024-03-01T12:00:00Z",
            "2024-03-01T13:00:00Z",
            "2024-03-01T14:00:00Z",
        ]),
    )
    .with_titles("Intraday", "Hourly values", "Source: demo data");
    Chart::line(config)
}

fn graph_config() -> GraphConfig {
    let nodes = vec![
        GraphNode::new("Alice", 34.0, 1),
        GraphNode::new("Bob", 24.0, 1),
        GraphNode::new("Chen", 14.0, 1),
        GraphNode::new("Ethan", 44.0, 1),
        GraphNode::new("George", 21.0, 1),
        GraphNode::new("Fang", 56.0, 1),
        GraphNode::new("Hanks", 28.0, 1),
        GraphNode::new("Jeremy", 19.0, 2),
        GraphNode::new("Kelvin", 31.0, 2),
        GraphNode::new("Lorain", 55.0, 2),
    ];
    let links = vec![
        GraphLink::new("Alice", "Bob"),
        GraphLink::new("Chen", "Bob"),
        GraphLink::new("Ethan", "Bob"),
        GraphLink::new("Fang", "Bob"),
        GraphLink::new("Hanks", "Bob"),
        GraphLink::new("Bob", "Chen"),
        GraphLink::new("Chen", "Ethan"),
        GraphLink::new("Fang", "Hanks"),
        GraphLink::new("Lorain", "Kelvin"),
    ];
    GraphConfig::new(1600, 800, Insets::new(10, 10, 10, 10), nodes, links)
}
