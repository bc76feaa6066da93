//! Built-in glass folder icons, rendered on demand with tiny-skia.

use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Point, SpreadMode,
    Stroke, Transform,
};

use crate::transform::rounded_rect_path;
use crate::types::BuiltInIcon;

struct Palette {
    top: Color,
    bottom: Color,
    outline: Option<Color>,
}

fn palette(icon: BuiltInIcon) -> Palette {
    match icon {
        BuiltInIcon::Folder | BuiltInIcon::Download => Palette {
            top: Color::from_rgba8(120, 196, 255, 255),
            bottom: Color::from_rgba8(38, 118, 228, 255),
            outline: None,
        },
        BuiltInIcon::Dark => Palette {
            top: Color::from_rgba8(92, 92, 104, 255),
            bottom: Color::from_rgba8(28, 28, 34, 255),
            outline: None,
        },
        BuiltInIcon::Transparent => Palette {
            top: Color::from_rgba8(255, 255, 255, 96),
            bottom: Color::from_rgba8(230, 236, 245, 48),
            outline: Some(Color::from_rgba8(255, 255, 255, 170)),
        },
    }
}

/// Render a built-in icon as a `size x size` RGBA image.
pub fn render(icon: BuiltInIcon, size: u32) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size)?;
    let s = size as f32;
    let colors = palette(icon);

    let gradient = LinearGradient::new(
        Point::from_xy(0.0, s * 0.16),
        Point::from_xy(0.0, s * 0.86),
        vec![
            GradientStop::new(0.0, colors.top),
            GradientStop::new(1.0, colors.bottom),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )?;
    let mut body_paint = Paint::default();
    body_paint.anti_alias = true;
    body_paint.shader = gradient;

    let tab = rounded_rect_path(s * 0.08, s * 0.16, s * 0.38, s * 0.16, s * 0.05)?;
    let body = rounded_rect_path(s * 0.06, s * 0.24, s * 0.88, s * 0.62, s * 0.08)?;
    pixmap.fill_path(&tab, &body_paint, FillRule::Winding, Transform::identity(), None);
    pixmap.fill_path(&body, &body_paint, FillRule::Winding, Transform::identity(), None);

    // glass sheen over the upper half of the body
    let sheen = rounded_rect_path(s * 0.09, s * 0.27, s * 0.82, s * 0.26, s * 0.06)?;
    let mut sheen_paint = Paint::default();
    sheen_paint.anti_alias = true;
    sheen_paint.set_color_rgba8(255, 255, 255, 56);
    pixmap.fill_path(&sheen, &sheen_paint, FillRule::Winding, Transform::identity(), None);

    if let Some(outline) = colors.outline {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(outline);
        let stroke = Stroke {
            width: (s * 0.015).max(1.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&body, &paint, &stroke, Transform::identity(), None);
    }

    if icon == BuiltInIcon::Download {
        let arrow = download_arrow(s)?;
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(255, 255, 255, 235);
        pixmap.fill_path(&arrow, &paint, FillRule::Winding, Transform::identity(), None);
    }

    Some(to_rgba_image(&pixmap))
}

fn download_arrow(s: f32) -> Option<tiny_skia::Path> {
    let cx = s * 0.5;
    let mut pb = PathBuilder::new();
    pb.move_to(cx - s * 0.06, s * 0.38);
    pb.line_to(cx + s * 0.06, s * 0.38);
    pb.line_to(cx + s * 0.06, s * 0.58);
    pb.line_to(cx + s * 0.15, s * 0.58);
    pb.line_to(cx, s * 0.76);
    pb.line_to(cx - s * 0.15, s * 0.58);
    pb.line_to(cx - s * 0.06, s * 0.58);
    pb.close();
    pb.finish()
}

fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_renders_at_requested_size() {
        for icon in BuiltInIcon::ALL {
            let img = render(icon, 64).unwrap();
            assert_eq!(img.dimensions(), (64, 64));
            assert!(img.get_pixel(32, 40).0[3] > 0, "{:?}", icon);
            assert_eq!(img.get_pixel(0, 0).0[3], 0, "{:?}", icon);
        }
    }

    #[test]
    fn transparent_variant_is_translucent() {
        let img = render(BuiltInIcon::Transparent, 64).unwrap();
        assert!(img.get_pixel(32, 48).0[3] < 200);
        let opaque = render(BuiltInIcon::Folder, 64).unwrap();
        assert_eq!(opaque.get_pixel(32, 48).0[3], 255);
    }

    #[test]
    fn download_variant_draws_an_arrow() {
        let plain = render(BuiltInIcon::Folder, 64).unwrap();
        let arrow = render(BuiltInIcon::Download, 64).unwrap();
        assert_ne!(plain.get_pixel(32, 40), arrow.get_pixel(32, 40));
    }

    #[test]
    fn zero_size_yields_nothing() {
        assert!(render(BuiltInIcon::Dark, 0).is_none());
    }
}
