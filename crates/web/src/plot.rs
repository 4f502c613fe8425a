//! PNG rendering of the placement scatter with its regression line.
//!
//! The x axis is categorical: each distinct date sits on its ordinal
//! position and integral ticks are labeled with the date.

use std::io::Cursor;
use std::ops::Range;

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use thiserror::Error;

use offer_trend_core::PlotSeries;

/// Image width in pixels.
pub const WIDTH: u32 = 640;
/// Image height in pixels.
pub const HEIGHT: u32 = 480;

/// Padding added above and below the placement range.
const Y_PADDING: f64 = 1.0;

/// Errors that can occur while rendering the plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Drawing onto the bitmap failed (e.g. no usable font).
    #[error("drawing failed: {0}")]
    Drawing(String),

    /// The pixel buffer did not match the image dimensions.
    #[error("pixel buffer does not match {WIDTH}x{HEIGHT}")]
    Buffer,

    /// PNG encoding failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn drawing_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Axis ranges that contain every point and both ends of the trend line.
#[must_use]
pub fn axis_ranges(series: &PlotSeries) -> (Range<f64>, Range<f64>) {
    if series.is_empty() {
        return (0.5..1.5, 0.0..10.0);
    }

    let x_range = 0.5..f64::from(series.distinct_dates()) + 0.5;

    let mut ys: Vec<f64> = series
        .points()
        .iter()
        .map(|p| p.placement.as_f64())
        .collect();
    if let Some(fit) = series.trend_line() {
        ys.push(fit.predict(x_range.start));
        ys.push(fit.predict(x_range.end));
    }

    let min = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    (x_range, (min - Y_PADDING)..(max + Y_PADDING))
}

/// Render the series as a PNG image.
///
/// # Errors
///
/// Returns `PlotError` if drawing or encoding fails.
pub fn render_png(series: &PlotSeries) -> Result<Vec<u8>, PlotError> {
    let mut pixels = vec![0_u8; WIDTH as usize * HEIGHT as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (WIDTH, HEIGHT)).into_drawing_area();
        draw(&root, series)?;
        root.present().map_err(drawing_error)?;
    }

    let image = RgbImage::from_raw(WIDTH, HEIGHT, pixels).ok_or(PlotError::Buffer)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;

    Ok(bytes.into_inner())
}

fn draw(root: &DrawingArea<BitMapBackend<'_>, Shift>, series: &PlotSeries) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(drawing_error)?;

    let (x_range, y_range) = axis_ranges(series);
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range.clone(), y_range)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("date of offer")
        .y_desc("placement")
        .x_label_formatter(&|x: &f64| series.tick_label(*x))
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(series.points().iter().map(|p| {
            Circle::new(
                (f64::from(p.ordinal), p.placement.as_f64()),
                4,
                BLUE.filled(),
            )
        }))
        .map_err(drawing_error)?;

    if let Some(fit) = series.trend_line() {
        chart
            .draw_series(LineSeries::new(
                [
                    (x_range.start, fit.predict(x_range.start)),
                    (x_range.end, fit.predict(x_range.end)),
                ],
                BLUE.stroke_width(2),
            ))
            .map_err(drawing_error)?;
    }

    Ok(())
}
