use crate::chart::figure::{x_range, Figure, LegendCorner, PlottedSeries};
use crate::chart::style::{ChartStyle, MarkerShape};
use crate::prelude::{ReportError, ReportResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

fn render_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render(err.to_string())
}

impl From<LegendCorner> for SeriesLabelPosition {
    fn from(corner: LegendCorner) -> Self {
        match corner {
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
            LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
        }
    }
}

/// Draws report figures onto PNG bitmaps using a fixed style.
pub struct ChartRenderer<'a> {
    style: &'a ChartStyle,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(style: &'a ChartStyle) -> Self {
        Self { style }
    }

    /// Renders `figure` to `path`, replacing any existing file. The bitmap
    /// surface is released before returning.
    pub fn render(
        &self,
        figure: Figure,
        series: &[PlottedSeries],
        path: &Path,
    ) -> ReportResult<()> {
        let root = BitMapBackend::new(path, self.style.canvas_size()).into_drawing_area();
        self.draw(&root, figure, series)?;
        root.present().map_err(render_error)?;
        log::debug!(
            "{} rendered with {} series to {}",
            figure.file_name(),
            series.len(),
            path.display()
        );
        Ok(())
    }

    fn draw(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        figure: Figure,
        series: &[PlottedSeries],
    ) -> ReportResult<()> {
        let style = self.style;
        let font = style.font_family.as_str();
        let text = |points: f64| (font, style.px(points)).into_font();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), text(style.title_pt))
            .margin(style.px(style.margin_pt))
            .x_label_area_size(style.px(style.label_pt * 3.0))
            .y_label_area_size(style.px(style.label_pt * 4.5))
            .build_cartesian_2d(x_range(series), figure.y_range(series))
            .map_err(render_error)?;

        let grid = if figure.overlay_grid() {
            BLACK.mix(0.3)
        } else {
            style.grid_rgb().mix(1.0)
        };
        chart
            .configure_mesh()
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .label_style(text(style.tick_pt))
            .axis_desc_style(text(style.label_pt))
            .bold_line_style(grid.stroke_width(style.px(style.grid_width_pt).max(1)))
            .light_line_style(WHITE.mix(0.0))
            .draw()
            .map_err(render_error)?;

        let line_width = style.px(style.line_width_pt).max(1);
        let radius = (style.px(style.marker_pt) / 2).max(1);
        let r = radius as i32;
        let sample = 4 * r;

        for plotted in series {
            let look = style.series(plotted.algorithm);
            let color = look.rgb();
            let line = color.stroke_width(line_width);
            let fill = color.filled();

            let anno = chart
                .draw_series(LineSeries::new(plotted.points.iter().copied(), line))
                .map_err(render_error)?;
            anno.label(plotted.algorithm.legend_label());

            match look.marker {
                MarkerShape::Circle => {
                    anno.legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(0, 0), (sample, 0)], line)
                            + Circle::new((sample / 2, 0), radius, fill)
                    });
                    let markers = plotted
                        .markers()
                        .map(|point| Circle::new(point, radius, fill));
                    chart.draw_series(markers).map_err(render_error)?;
                }
                MarkerShape::Square => {
                    anno.legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(0, 0), (sample, 0)], line)
                            + Rectangle::new([(sample / 2 - r, -r), (sample / 2 + r, r)], fill)
                    });
                    chart
                        .draw_series(plotted.markers().map(|point| {
                            EmptyElement::at(point) + Rectangle::new([(-r, -r), (r, r)], fill)
                        }))
                        .map_err(render_error)?;
                }
            }
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .position(figure.legend_corner().into())
                .label_font(text(style.legend_pt))
                .legend_area_size(sample + r)
                .margin(style.px(style.margin_pt))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.4))
                .draw()
                .map_err(render_error)?;
        }

        Ok(())
    }
}
