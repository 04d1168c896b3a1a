// src/analysis/charts.rs
//! Fixed 2x2 SVG chart panel for the job market report

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use std::path::Path;

use super::JobAnalyzer;

const REPORT_TITLE: &str = "Data Analyst Job Market Analysis";
const REPORT_SIZE: (u32, u32) = (1500, 1200);
const FONT: &str = "sans-serif";

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

pub fn render_report(analyzer: &JobAnalyzer, path: &Path) -> Result<()> {
    let top_locations = analyzer.get_top_locations(5);
    let top_skills = analyzer.get_top_skills(8);
    let top_companies = analyzer.get_top_companies(6);

    let root = SVGBackend::new(path, REPORT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(REPORT_TITLE, (FONT, 32).into_font().style(FontStyle::Bold))?;
    let panels = root.split_evenly((2, 2));

    draw_vertical_bars(
        &panels[0],
        "Top 5 Job Locations",
        "Number of Jobs",
        &top_locations,
        SKY_BLUE,
    )?;
    draw_horizontal_bars(
        &panels[1],
        "Most In-Demand Skills",
        "Number of Mentions",
        &top_skills,
        LIGHT_CORAL,
    )?;
    draw_pie(&panels[2], "Job Distribution by Location", &top_locations)?;
    draw_vertical_bars(
        &panels[3],
        "Top Companies by Job Postings",
        "Number of Jobs",
        &top_companies,
        LIGHT_GREEN,
    )?;

    root.present()?;
    Ok(())
}

/// Bar height for a count, saturating at the axis type's limit
fn bar_height(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn axis_max(series: &[(String, usize)]) -> u32 {
    series
        .iter()
        .map(|(_, count)| bar_height(*count))
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

fn segment_label(labels: &[(String, usize)], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
            .get(*i)
            .map(|(label, _)| label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn draw_vertical_bars(
    area: &Panel<'_>,
    title: &str,
    y_desc: &str,
    series: &[(String, usize)],
    color: RGBColor,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d((0..series.len()).into_segmented(), 0u32..axis_max(series))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|v| segment_label(series, v))
        .y_desc(y_desc)
        .label_style((FONT, 13))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(12)
            .data(
                series
                    .iter()
                    .enumerate()
                    .map(|(i, (_, count))| (i, bar_height(*count))),
            ),
    )?;

    Ok(())
}

fn draw_horizontal_bars(
    area: &Panel<'_>,
    title: &str,
    x_desc: &str,
    series: &[(String, usize)],
    color: RGBColor,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0u32..axis_max(series), (0..series.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(series.len())
        .y_label_formatter(&|v| segment_label(series, v))
        .x_desc(x_desc)
        .label_style((FONT, 13))
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(6)
            .data(
                series
                    .iter()
                    .enumerate()
                    .map(|(i, (_, count))| (i, bar_height(*count))),
            ),
    )?;

    Ok(())
}

/// Pie with wedges laid out counter-clockwise from twelve o'clock
fn draw_pie(area: &Panel<'_>, title: &str, series: &[(String, usize)]) -> Result<()> {
    let total: usize = series.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Ok(());
    }

    let area = area.titled(title, (FONT, 22))?;
    let (width, height) = area.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = (width.min(height) as f64 / 2.0) * 0.7;

    let point_at = |angle: f64, r: f64| -> (i32, i32) {
        (
            (center.0 + r * angle.cos()).round() as i32,
            (center.1 - r * angle.sin()).round() as i32,
        )
    };

    let mut start = PI / 2.0;
    for (i, (label, count)) in series.iter().enumerate() {
        let share = *count as f64 / total as f64;
        let sweep = share * 2.0 * PI;
        let steps = ((sweep / (2.0 * PI)) * 120.0).ceil().max(2.0) as usize;

        let mut wedge = vec![point_at(0.0, 0.0)];
        wedge.extend((0..=steps).map(|s| point_at(start + sweep * s as f64 / steps as f64, radius)));
        area.draw(&Polygon::new(wedge, Palette99::pick(i).filled()))?;

        let mid = start + sweep / 2.0;
        let (lx, ly) = point_at(mid, radius * 1.15);
        area.draw(&Text::new(
            label.clone(),
            (lx, ly),
            (FONT, 14).into_font().color(&BLACK).pos(label_anchor(mid)),
        ))?;
        let (px, py) = point_at(mid, radius * 0.6);
        area.draw(&Text::new(
            format!("{:.1}%", share * 100.0),
            (px, py),
            (FONT, 13)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;

        start += sweep;
    }

    Ok(())
}

fn label_anchor(angle: f64) -> Pos {
    let h = if angle.cos() >= 0.0 { HPos::Left } else { HPos::Right };
    Pos::new(h, VPos::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_jobs;

    #[test]
    fn test_renders_demo_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.svg");

        JobAnalyzer::new(sample_jobs())
            .create_visualizations(&path)
            .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(REPORT_TITLE));
        assert!(svg.contains("Bangalore"));
        assert!(svg.contains("37.5%"));
    }

    #[test]
    fn test_renders_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("empty.svg");

        JobAnalyzer::new(Vec::new())
            .create_visualizations(&path)
            .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains(REPORT_TITLE));
        assert!(!svg.contains("Top 5 Job Locations"));
    }

    #[test]
    fn test_oversized_counts_saturate() {
        assert_eq!(bar_height(7), 7);
        assert_eq!(bar_height(usize::MAX), u32::MAX);

        let series = vec![("Pune".to_string(), usize::MAX), ("Goa".to_string(), 3)];
        assert_eq!(axis_max(&series), u32::MAX);
        assert_eq!(axis_max(&[]), 1);
    }

    #[test]
    fn test_segment_label_lookup() {
        let series = vec![("Pune".to_string(), 2), ("Goa".to_string(), 1)];
        assert_eq!(segment_label(&series, &SegmentValue::CenterOf(1)), "Goa");
        assert_eq!(segment_label(&series, &SegmentValue::Exact(7)), "");
        assert_eq!(segment_label(&series, &SegmentValue::Last), "");
    }
}
