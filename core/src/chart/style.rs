use crate::prelude::{Algorithm, ReportError, ReportResult};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Largest canvas edge accepted from a style file.
const MAX_CANVAS_PX: u32 = 10_000;
/// Largest pixel count accepted; the bitmap holds 3 bytes per pixel.
const MAX_CANVAS_PIXELS: u64 = 50_000_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Square,
}

/// Color and marker used for one algorithm's series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesStyle {
    pub color: [u8; 3],
    pub marker: MarkerShape,
}

impl SeriesStyle {
    pub fn rgb(&self) -> RGBColor {
        RGBColor(self.color[0], self.color[1], self.color[2])
    }
}

/// Publication style shared by every figure. Sizes are in points and
/// converted to pixels at `dpi`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub font_family: String,
    pub tick_pt: f64,
    pub label_pt: f64,
    pub title_pt: f64,
    pub legend_pt: f64,
    pub line_width_pt: f64,
    pub marker_pt: f64,
    pub margin_pt: f64,
    pub grid_width_pt: f64,
    pub grid_color: [u8; 3],
    pub odamd: SeriesStyle,
    pub od: SeriesStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 6.0,
            dpi: 300,
            font_family: "sans-serif".into(),
            tick_pt: 12.0,
            label_pt: 14.0,
            title_pt: 14.0,
            legend_pt: 11.0,
            line_width_pt: 2.0,
            marker_pt: 6.0,
            margin_pt: 6.0,
            grid_width_pt: 0.8,
            grid_color: [0xdd, 0xdd, 0xdd],
            odamd: SeriesStyle {
                color: [0, 0, 255],
                marker: MarkerShape::Circle,
            },
            od: SeriesStyle {
                color: [255, 0, 0],
                marker: MarkerShape::Square,
            },
        }
    }
}

impl ChartStyle {
    pub fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(0.0) as u32
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    pub fn series(&self, algorithm: Algorithm) -> &SeriesStyle {
        match algorithm {
            Algorithm::OdaMd => &self.odamd,
            Algorithm::Od => &self.od,
        }
    }

    pub fn grid_rgb(&self) -> RGBColor {
        RGBColor(self.grid_color[0], self.grid_color[1], self.grid_color[2])
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.dpi == 0 {
            return Err(ReportError::Style("dpi must be positive".into()));
        }
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(ReportError::Style("figure size must be positive".into()));
        }
        let (width, height) = self.canvas_size();
        if width > MAX_CANVAS_PX || height > MAX_CANVAS_PX {
            return Err(ReportError::Style(format!(
                "canvas {}x{} exceeds {} px",
                width, height, MAX_CANVAS_PX
            )));
        }
        if width as u64 * height as u64 > MAX_CANVAS_PIXELS {
            return Err(ReportError::Style(format!(
                "canvas {}x{} exceeds {} pixels",
                width, height, MAX_CANVAS_PIXELS
            )));
        }
        let sizes = [
            ("tick_pt", self.tick_pt),
            ("label_pt", self.label_pt),
            ("title_pt", self.title_pt),
            ("legend_pt", self.legend_pt),
            ("line_width_pt", self.line_width_pt),
            ("marker_pt", self.marker_pt),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                return Err(ReportError::Style(format!("{} must be positive", name)));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(ReportError::Style("font_family is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_ten_by_six_inches_at_300_dpi() {
        let style = ChartStyle::default();
        assert_eq!(style.canvas_size(), (3000, 1800));
        assert_eq!(style.px(12.0), 50);
        assert_eq!(style.px(2.0), 8);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn algorithms_keep_distinct_markers() {
        let style = ChartStyle::default();
        assert_eq!(style.series(Algorithm::OdaMd).marker, MarkerShape::Circle);
        assert_eq!(style.series(Algorithm::Od).marker, MarkerShape::Square);
        let RGBColor(r, g, b) = style.series(Algorithm::Od).rgb();
        assert_eq!((r, g, b), (255, 0, 0));
    }

    #[test]
    fn validate_rejects_zero_dpi_and_oversized_canvas() {
        let zero = ChartStyle {
            dpi: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ReportError::Style(_))));

        let huge = ChartStyle {
            dpi: 5000,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn validate_bounds_canvas_area() {
        let wide = ChartStyle {
            width_in: 30.0,
            ..Default::default()
        };
        assert_eq!(wide.canvas_size(), (9000, 1800));
        assert!(wide.validate().is_ok());

        let square = ChartStyle {
            width_in: 40.0,
            height_in: 40.0,
            dpi: 240,
            ..Default::default()
        };
        assert_eq!(square.canvas_size(), (9600, 9600));
        assert!(matches!(square.validate(), Err(ReportError::Style(_))));
    }
}
