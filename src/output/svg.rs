use std::fmt::Write;

use kurbo::{BezPath, Point, Rect, Shape};

/// Presentation settings for [`to_document`].
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Space added around the paths' bounding box.
    pub margin: f64,
    /// Stroke width of the fitted paths.
    pub stroke_width: f64,
    /// Input points to overlay as small circles, if any.
    pub points: Vec<Point>,
    /// Radius of the overlaid point markers.
    pub point_radius: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            stroke_width: 1.0,
            points: vec![],
            point_radius: 1.5,
        }
    }
}

/// Render fitted paths as a standalone SVG document.
///
/// The `viewBox` covers every path and overlay point plus the margin.
pub fn to_document(paths: &[BezPath], options: &SvgOptions) -> String {
    let bounds = bounds(paths, &options.points).inflate(options.margin, options.margin);

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height(),
    );
    for path in paths {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="black" stroke-width="{}"/>"#,
            path.to_svg(),
            options.stroke_width,
        );
    }
    for p in &options.points {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="red"/>"#,
            p.x, p.y, options.point_radius,
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Union bounding box of all paths and points. Zero-sized at the origin
/// when there is nothing to bound.
fn bounds(paths: &[BezPath], points: &[Point]) -> Rect {
    let mut rect: Option<Rect> = None;
    let boxes = paths
        .iter()
        .filter(|p| !p.elements().is_empty())
        .map(|p| p.bounding_box())
        .chain(points.iter().map(|&p| Rect::from_points(p, p)));
    for b in boxes {
        rect = Some(match rect {
            Some(r) => r.union(b),
            None => b,
        });
    }
    rect.unwrap_or(Rect::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.curve_to((10.0, 20.0), (30.0, 20.0), (40.0, 0.0));
        path
    }

    #[test]
    fn document_holds_one_path_element_per_path() {
        let svg = to_document(&[sample_path(), sample_path()], &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r#"<path d="M"#));
    }

    #[test]
    fn view_box_includes_margin() {
        let options = SvgOptions {
            margin: 5.0,
            ..SvgOptions::default()
        };
        let svg = to_document(&[sample_path()], &options);
        // The curve spans x in [0, 40].
        assert!(svg.contains(r#"viewBox="-5 -5 50 "#));
    }

    #[test]
    fn overlay_points_become_circles() {
        let options = SvgOptions {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            ..SvgOptions::default()
        };
        let svg = to_document(&[], &options);
        assert_eq!(svg.matches("<circle ").count(), 2);
        assert!(svg.contains(r#"cx="1" cy="2""#));
    }
}
