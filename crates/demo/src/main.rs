// File: crates/demo/src/main.rs
// Summary: Demo loads bar data (CSV, JSON chart file, or a random sample) and
// renders it to PNG and SVG.

use anyhow::{Context, Result};
use barchart_core::{BarChart, ChartConfig, DataPoint, Page, RandomColors, SvgSurface, Theme};
use log::{info, warn};
use rand::Rng;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON chart file: config fields at the top level plus the data points.
#[derive(Debug, Deserialize)]
struct ChartFile {
    #[serde(flatten)]
    config: ChartConfig,
    data: Vec<DataPoint>,
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage: barchart-demo [DATA.csv|DATA.json] [OUT_DIR]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let (config, data) = match &input {
        Some(path) => load(path).with_context(|| format!("failed to load '{}'", path.display()))?,
        None => {
            info!("no input file, using random sample data");
            (ChartConfig::default(), sample_data())
        }
    };
    info!("loaded {} data points, {}x{} px", data.len(), config.width, config.height);
    if data.is_empty() {
        anyhow::bail!("no data points loaded, check headers/delimiter.");
    }

    let theme = Theme::default();
    let mut colors = RandomColors::new();

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let out_png = out_dir.join("bar_chart.png");
    barchart_render_skia::render_to_png(config, &theme, data.clone(), &mut colors, &out_png)?;
    println!("Wrote {}", out_png.display());

    let mut page: Page<SvgSurface> = Page::new().with_target("chart");
    let chart = BarChart::create_with(&mut page, "chart", config, &theme, data, &mut colors)?;
    let out_svg = out_dir.join("bar_chart.svg");
    let surface = page
        .target("chart")
        .and_then(|el| el.children().first())
        .context("svg surface was not mounted")?;
    surface.write_to(&out_svg).with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    let bounds = chart.layout().values;
    println!("Max value {} -> axis upper bound {}", bounds.max_value, bounds.upper_bound);
    Ok(())
}

fn load(path: &Path) -> Result<(ChartConfig, Vec<DataPoint>)> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)?;
            let file: ChartFile = serde_json::from_str(&text).context("parsing chart JSON")?;
            Ok((file.config, file.data))
        }
        "csv" => Ok((ChartConfig::default(), load_csv(path)?)),
        other => anyhow::bail!("unsupported input extension '{other}' (expected .csv or .json)"),
    }
}

/// Load `label,value` rows; rows whose value does not parse are skipped.
fn load_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "category", "month"]).unwrap_or(0);
    let i_value = idx(&["value", "count", "amount", "y"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or_default();
        match rec.get(i_value).and_then(|s| s.parse::<f64>().ok()) {
            Some(value) => out.push(DataPoint::new(label, value)),
            None => warn!("skipping row {}: no numeric value", row + 1),
        }
    }
    Ok(out)
}

/// Five months of random values in `1..200`.
fn sample_data() -> Vec<DataPoint> {
    let mut rng = rand::thread_rng();
    ["Jan", "Feb", "March", "April", "May"]
        .into_iter()
        .map(|label| DataPoint::new(label, f64::from(rng.gen_range(1..200u32))))
        .collect()
}
