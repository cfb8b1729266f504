// Drawing of bar charts with plotters.
//
// The same drawing routine runs on the SVG backend for vector output and on
// an in-memory bitmap for raster output; the bitmap is encoded with the
// image crate.

use std::fs;
use std::path::{Path, PathBuf};

use bench_log::OperationClass;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::chart::BarChart;

const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing: {0}")]
    Draw(String),
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("bitmap buffer does not match {0}x{1}")]
    Buffer(u32, u32),
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Bar color for each operation class.
pub fn class_color(class: OperationClass) -> RGBColor {
    match class {
        OperationClass::NativeReference => RGBColor(128, 128, 128),
        OperationClass::OriginalBinding => RGBColor(31, 119, 180),
        OperationClass::OptimizedBinding => RGBColor(0, 128, 0),
        OperationClass::OptimizedBindingWithScratchReuse => RGBColor(214, 39, 40),
    }
}

/// Writes `chart` once per format into `out_dir`, returning the written paths.
pub fn render(
    chart: &BarChart,
    out_dir: &Path,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = out_dir.join(format!("{}.{}", chart.file_stem, format.extension()));
        match format {
            OutputFormat::Svg => render_svg(chart, &path)?,
            OutputFormat::Png => render_png(chart, &path)?,
        }
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn render_svg(chart: &BarChart, path: &Path) -> Result<(), RenderError> {
    let root = SVGBackend::new(path, chart.size).into_drawing_area();
    draw(&root, chart)
}

fn render_png(chart: &BarChart, path: &Path) -> Result<(), RenderError> {
    let (width, height) = chart.size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    // the backend borrows the buffer until the drawing area is dropped
    {
        let root = BitMapBackend::with_buffer(&mut buffer, chart.size).into_drawing_area();
        draw(&root, chart)?;
    }

    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or(RenderError::Buffer(width, height))?;
    image.save_with_format(path, image::ImageFormat::Png)?;

    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_error)?;

    let n = chart.bars.len();
    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(260)
        .y_label_area_size(90)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..chart.y_max())
        .map_err(draw_error)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 1)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(
            (FONT, 16)
                .into_font()
                .style(FontStyle::Bold)
                .transform(FontTransform::Rotate90),
        )
        .y_label_style((FONT, 16).into_font())
        .x_desc("Operation")
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style((FONT, 20).into_font().style(FontStyle::Bold))
        .draw()
        .map_err(draw_error)?;

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            class_color(bar.class).filled(),
        );
        rect.set_margin(0, 0, 6, 6);
        rect
    }))
    .map_err(draw_error)?;

    // value on top of every bar
    let value_style = (FONT, 16)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            format!("{:.1}", bar.value),
            (SegmentValue::CenterOf(i), bar.value),
            value_style.clone(),
        )
    }))
    .map_err(draw_error)?;

    // legend lists every class, present or not
    for class in OperationClass::ALL {
        let color = class_color(class);
        ctx.draw_series(std::iter::empty::<Rectangle<(SegmentValue<usize>, f64)>>())
            .map_err(draw_error)?
            .label(class.legend_label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 24, y + 6)], color.filled()));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 16).into_font().style(FontStyle::Bold))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;

    Ok(())
}
