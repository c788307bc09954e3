//! Volcano plot rendering
//!
//! One scatter series per regulation category, drawn with `plotters` onto a
//! PNG bitmap. Categories without rows get no series and no legend entry.

use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

use plotters::chart::SeriesLabelPosition;
use plotters::prelude::*;

use crate::classify::Category;
use crate::error::{Result, VolcanoError};

/// Gray used by the non-significant series
const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Marker radius in pixels
    pub point_size: u32,
    /// Marker opacity
    pub alpha: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Volcano Plot for all samples".to_string(),
            x_label: "logFC (Fold Change)".to_string(),
            y_label: "-log10 FDR".to_string(),
            point_size: 3,
            alpha: 0.7,
        }
    }
}

/// Points of one category
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoints {
    pub category: Category,
    pub points: Vec<(f64, f64)>,
}

fn category_color(category: Category) -> RGBColor {
    match category {
        Category::Up => RED,
        Category::Down => BLUE,
        Category::NonSignificant => GRAY,
    }
}

fn plot_err<E: Display>(e: E) -> VolcanoError {
    VolcanoError::Plot {
        reason: e.to_string(),
    }
}

/// Split points by category in plot order (blue, gray, red).
///
/// Points with a non-finite coordinate are dropped; categories left with no
/// points are omitted.
pub fn group_points(log_fc: &[f64], y: &[f64], categories: &[Category]) -> Result<Vec<SeriesPoints>> {
    if log_fc.len() != y.len() || log_fc.len() != categories.len() {
        return Err(VolcanoError::DimensionMismatch {
            expected: format!("{} points", log_fc.len()),
            got: format!("{} y values and {} categories", y.len(), categories.len()),
        });
    }

    let groups: Vec<SeriesPoints> = Category::PLOT_ORDER
        .iter()
        .map(|&category| SeriesPoints {
            category,
            points: log_fc
                .iter()
                .zip(y.iter())
                .zip(categories.iter())
                .filter(|((px, py), c)| **c == category && px.is_finite() && py.is_finite())
                .map(|((&px, &py), _)| (px, py))
                .collect(),
        })
        .filter(|g| !g.points.is_empty())
        .collect();

    let dropped = log_fc.len() - groups.iter().map(|g| g.points.len()).sum::<usize>();
    if dropped > 0 {
        log::warn!("{} rows with missing values left out of the plot", dropped);
    }

    Ok(groups)
}

/// Padded axis range covering `values`, or `fallback` when empty
fn axis_range<I: Iterator<Item = f64>>(values: I, fallback: Range<f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return fallback;
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

/// Draw the volcano plot to `path` and return the number of series drawn
pub fn plot_volcano(path: &Path, groups: &[SeriesPoints], config: &PlotConfig) -> Result<usize> {
    let all_points = || groups.iter().flat_map(|g| g.points.iter());
    let x_range = axis_range(all_points().map(|p| p.0), -1.0..1.0);
    let y_range = axis_range(all_points().map(|p| p.1), 0.0..1.0);

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()
        .map_err(plot_err)?;

    let size = config.point_size;
    let alpha = config.alpha;
    for group in groups {
        let color = category_color(group.category);
        chart
            .draw_series(
                group
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), size as i32, color.mix(alpha).filled())),
            )
            .map_err(plot_err)?
            .label(group.category.label())
            .legend(move |(x, y)| Circle::new((x, y), 5, color.mix(alpha).filled()));
        log::debug!("Drew {} {} points", group.points.len(), group.category.color_name());
    }

    if !groups.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(groups.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_group_points_order_and_skip() {
        let categories = [Category::Up, Category::NonSignificant, Category::Up];
        let groups = group_points(&[8.0, 0.5, 9.0], &[2.0, 0.1, 3.0], &categories).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, Category::NonSignificant);
        assert_eq!(groups[1].category, Category::Up);
        assert_eq!(groups[1].points, vec![(8.0, 2.0), (9.0, 3.0)]);
    }

    #[test]
    fn test_group_points_one_series_per_category() {
        let categories = [Category::Down, Category::Up, Category::NonSignificant, Category::Down];
        let groups = group_points(&[-9.0, 9.0, 0.0, -8.0], &[1.0, 1.0, 1.0, 1.0], &categories).unwrap();
        let order: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, vec![Category::Down, Category::NonSignificant, Category::Up]);
        assert_eq!(groups[0].points.len(), 2);
    }

    #[test]
    fn test_group_points_drops_non_finite() {
        let categories = [Category::Up, Category::Up];
        let groups = group_points(&[8.0, f64::NAN], &[f64::NAN, 1.0], &categories).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_points_length_mismatch() {
        assert!(group_points(&[1.0], &[1.0, 2.0], &[Category::Up]).is_err());
    }

    #[test]
    fn test_axis_range() {
        assert_eq!(axis_range(std::iter::empty(), -1.0..1.0), -1.0..1.0);
        assert_eq!(axis_range([2.0].into_iter(), 0.0..1.0), 1.0..3.0);
        let r = axis_range([0.0, 10.0].into_iter(), 0.0..1.0);
        assert!((r.start + 0.5).abs() < 1e-12 && (r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_plot_volcano_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volcano.png");
        let categories = [Category::Up, Category::Down, Category::NonSignificant];
        let groups = group_points(&[8.0, -8.0, 1.0], &[2.0, 1.5, 0.2], &categories).unwrap();

        let drawn = plot_volcano(&path, &groups, &PlotConfig::default()).unwrap();
        assert_eq!(drawn, 3);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_plot_volcano_empty_categories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let drawn = plot_volcano(&path, &[], &PlotConfig::default()).unwrap();
        assert_eq!(drawn, 0);
        assert!(path.exists());

        let groups = group_points(&[0.5], &[0.1], &[Category::NonSignificant]).unwrap();
        assert_eq!(plot_volcano(&path, &groups, &PlotConfig::default()).unwrap(), 1);
    }
}
