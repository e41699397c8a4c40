use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use concat_string::concat_string;
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;

use crate::{
    crawler::screener::{section, CompanyReport},
    declare::SectionKind,
    export::output_path,
    logging,
    util::text,
};

const SIZE: (u32, u32) = (1200, 700);

pub fn file_name(company_name: &str) -> String {
    concat_string!(text::safe_file_stem(company_name), "_cash_flow.svg")
}

/// One line per cash flow row, `None` cells left out.
fn lines(report: &CompanyReport) -> Option<(Vec<String>, Vec<(String, Vec<(i32, f64)>)>)> {
    let statement = section::find_statement(&report.sections, SectionKind::CashFlow)?;
    if statement.periods.is_empty() || statement.series.is_empty() {
        return None;
    }

    let lines: Vec<(String, Vec<(i32, f64)>)> = statement
        .series
        .iter()
        .map(|(label, values)| {
            let points = values
                .iter()
                .enumerate()
                .filter_map(|(x, v)| Some((i32::try_from(x).ok()?, v.as_ref()?.to_f64()?)))
                .collect();
            (label.to_string(), points)
        })
        .collect();

    if lines.iter().all(|(_, points)| points.is_empty()) {
        return None;
    }

    Some((statement.periods.clone(), lines))
}

fn y_range(lines: &[(String, Vec<(i32, f64)>)]) -> (f64, f64) {
    let (min, max) = lines
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));

    if min > max {
        return (0.0, 1.0);
    }

    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad)
}

fn draw(path: &Path, caption: &str, periods: &[String], lines: Vec<(String, Vec<(i32, f64)>)>) -> Result<()> {
    let last = i32::try_from(periods.len().saturating_sub(1))?.max(1);
    let (y_min, y_max) = y_range(&lines);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..last, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_labels(periods.len())
        .x_label_formatter(&|x| {
            usize::try_from(*x)
                .ok()
                .and_then(|i| periods.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .x_desc("Year")
        .y_desc("Amount (in Crores)")
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (idx, (label, points)) in lines.into_iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))
}

/// Renders the cash flow rows as an SVG line chart.
///
/// `Ok(None)` when the report has no cash flow numbers to draw.
pub fn render_cash_flow(report: &CompanyReport, dir: &str) -> Result<Option<PathBuf>> {
    let Some((periods, lines)) = lines(report) else {
        return Ok(None);
    };

    let path = output_path(dir, &file_name(&report.company_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let caption = format!("{} - Cash Flow Data", report.company_name);
    draw(&path, &caption, &periods, lines)?;
    logging::info_file_async(format!("Cash flow chart written to {}", path.display()));

    Ok(Some(path))
}
