use anyhow::Result;
use perf_csv_charts::chart::{GroupedBarChart, LineChart};
use perf_csv_charts::model::RunConfig;
use perf_csv_charts::orchestrator;
use perf_csv_charts::render::{ChartRenderer, TextRenderer};
use perf_csv_charts::PerfError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Debug, PartialEq)]
enum Rendered {
    Bars(GroupedBarChart),
    Lines(LineChart),
}

#[derive(Default)]
struct RecordingRenderer {
    charts: Vec<Rendered>,
}

impl ChartRenderer for RecordingRenderer {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<()> {
        self.charts.push(Rendered::Bars(chart.clone()));
        Ok(())
    }

    fn render_line_series(&mut self, chart: &LineChart) -> Result<()> {
        self.charts.push(Rendered::Lines(chart.clone()));
        Ok(())
    }
}

/// Lay out `<home>/projects/collabora-online/test/*.csv`.
fn write_suite(home: &Path) -> std::path::PathBuf {
    let test_dir = home.join("projects").join("collabora-online").join("test");
    fs::create_dir_all(&test_dir).unwrap();
    fs::write(test_dir.join("TileLatency.csv"), "<10ms,10-50ms,>50ms,\n4,2,1,\n5,1,0,\n").unwrap();
    fs::write(test_dir.join("PingLatency.csv"), "A,B,\n1,2,\n3,4,\n").unwrap();
    fs::write(test_dir.join("Network.csv"), "in,out\n100,50\n200,75\n").unwrap();
    fs::write(test_dir.join("CPU.csv"), "stress\n5\n7\n9\n").unwrap();
    test_dir
}

fn config(home: &Path) -> RunConfig {
    RunConfig {
        root: home.to_path_buf(),
        suite_dir: "collabora-online".into(),
        test_subdir: "test".into(),
    }
}

#[test]
fn renders_four_charts_in_order() {
    let home = TempDir::new().unwrap();
    write_suite(home.path());

    let mut renderer = RecordingRenderer::default();
    orchestrator::run(&config(home.path()), &mut renderer).unwrap();

    assert_eq!(renderer.charts.len(), 4);

    let Rendered::Bars(tile) = &renderer.charts[0] else {
        panic!("expected bar chart first");
    };
    assert_eq!(tile.title, "Performance Variation for TileLatency.csv");
    assert_eq!(tile.categories, vec!["<10ms", "10-50ms", ">50ms"]);
    assert_eq!(tile.series[1].label, "Run 2");
    assert_eq!(tile.series[1].values, vec![5, 1, 0]);

    let Rendered::Bars(ping) = &renderer.charts[1] else {
        panic!("expected bar chart second");
    };
    assert_eq!(ping.title, "Performance Variation for PingLatency.csv");
    assert_eq!(ping.series[0].values, vec![1, 2]);
    assert_eq!(ping.series[1].values, vec![3, 4]);

    let Rendered::Lines(network) = &renderer.charts[2] else {
        panic!("expected bandwidth line chart third");
    };
    assert_eq!(network.x_values, vec![1, 2]);
    assert_eq!(network.series[0].values, vec![100, 200]);
    assert_eq!(network.series[1].values, vec![50, 75]);

    let Rendered::Lines(cpu) = &renderer.charts[3] else {
        panic!("expected stress line chart last");
    };
    assert_eq!(cpu.title, "Stress Over Runs");
    assert_eq!(cpu.series[0].values, vec![5, 7, 9]);
}

#[test]
fn missing_suite_directory_aborts_before_rendering() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("projects").join("other")).unwrap();

    let mut renderer = RecordingRenderer::default();
    let err = orchestrator::run(&config(home.path()), &mut renderer).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PerfError>(),
        Some(PerfError::DirectoryNotFound { .. })
    ));
    assert!(renderer.charts.is_empty());
}

#[test]
fn malformed_file_stops_the_run() {
    let home = TempDir::new().unwrap();
    let test_dir = write_suite(home.path());
    fs::write(test_dir.join("PingLatency.csv"), "A,B,C\n1,x,3\n").unwrap();

    let mut renderer = RecordingRenderer::default();
    let err = orchestrator::run(&config(home.path()), &mut renderer).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PerfError>(),
        Some(PerfError::MalformedField { .. })
    ));
    assert!(format!("{err:#}").contains("PingLatency.csv"));
    // Tile latency was already shown; nothing after the bad file is.
    assert_eq!(renderer.charts.len(), 1);
}

#[test]
fn missing_cpu_file_is_file_not_found() {
    let home = TempDir::new().unwrap();
    let test_dir = write_suite(home.path());
    fs::remove_file(test_dir.join("CPU.csv")).unwrap();

    let mut renderer = RecordingRenderer::default();
    let err = orchestrator::run(&config(home.path()), &mut renderer).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PerfError>(),
        Some(PerfError::FileNotFound { .. })
    ));
    assert_eq!(renderer.charts.len(), 3);
}

#[test]
fn text_renderer_covers_every_file() {
    let home = TempDir::new().unwrap();
    write_suite(home.path());

    let mut renderer = TextRenderer::new(Vec::new());
    orchestrator::run(&config(home.path()), &mut renderer).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(out.contains("== Performance Variation for TileLatency.csv =="));
    assert!(out.contains("== Performance Variation for PingLatency.csv =="));
    assert!(out.contains("== Incoming and Outgoing Bandwidth Over Runs =="));
    assert!(out.contains("  Stress: 5 7 9"));
}
