//! Icon transform: square cropping and shape masking of imported images.

use image::{RgbaImage, imageops};
use std::f32::consts::{FRAC_PI_2, PI};
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Rect, Transform};

use crate::types::MaskShape;

/// Crop the centred `side x side` region, `side = min(width, height)`.
///
/// A zero-area image is returned as-is.
pub fn crop_to_square(image: &RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return image.clone();
    }
    let side = w.min(h);
    let x = (w - side) / 2;
    let y = (h - side) / 2;
    imageops::crop_imm(image, x, y, side, side).to_image()
}

/// Clip a square image to `shape`. Pixels outside the shape become fully transparent.
///
/// Returns `None` when the coverage surface cannot be allocated.
pub fn apply_mask(image: &RgbaImage, shape: MaskShape) -> Option<RgbaImage> {
    let (w, h) = image.dimensions();
    let side = w.min(h);
    let coverage = shape_coverage(shape, side)?;

    let mut out = image.clone();
    for (x, y, px) in out.enumerate_pixels_mut() {
        let cov = if x < side && y < side {
            coverage.data()[coverage_index(side, x, y)]
        } else {
            0
        };
        match cov {
            0 => px.0 = [0, 0, 0, 0],
            255 => {}
            c => px.0[3] = ((px.0[3] as u16 * c as u16 + 127) / 255) as u8,
        }
    }
    Some(out)
}

/// Row-major offset into a `side x side` coverage buffer.
fn coverage_index(side: u32, x: u32, y: u32) -> usize {
    y as usize * side as usize + x as usize
}

/// Crop to a square and optionally clip it, the Make Icon pipeline.
pub fn make_icon(image: &RgbaImage, mask: Option<MaskShape>) -> Option<RgbaImage> {
    let square = crop_to_square(image);
    match mask {
        Some(shape) => apply_mask(&square, shape),
        None => Some(square),
    }
}

/// Anti-aliased coverage of `shape` inside a `side x side` square.
pub fn shape_coverage(shape: MaskShape, side: u32) -> Option<Mask> {
    let path = mask_path(shape, side as f32)?;
    let mut mask = Mask::new(side, side)?;
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

/// Vector outline of `shape` for a square of the given side length.
pub fn mask_path(shape: MaskShape, side: f32) -> Option<Path> {
    if side <= 0.0 {
        return None;
    }
    match shape {
        MaskShape::RoundedSquare => rounded_rect_path(0.0, 0.0, side, side, side / 6.0),
        MaskShape::Circle => PathBuilder::from_oval(Rect::from_xywh(0.0, 0.0, side, side)?),
        MaskShape::Star => star_path(side),
        MaskShape::Heart => heart_path(side),
    }
}

pub(crate) fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<Path> {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    arc(&mut pb, x + w - r, y + r, r, -FRAC_PI_2, FRAC_PI_2);
    pb.line_to(x + w, y + h - r);
    arc(&mut pb, x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    pb.line_to(x + r, y + h);
    arc(&mut pb, x + r, y + h - r, r, FRAC_PI_2, FRAC_PI_2);
    pb.line_to(x, y + r);
    arc(&mut pb, x + r, y + r, r, PI, FRAC_PI_2);
    pb.close();
    pb.finish()
}

fn star_path(side: f32) -> Option<Path> {
    let c = side / 2.0;
    let outer = side / 2.0;
    let inner = outer / 2.5;
    let step = PI / 5.0; // 36°
    let mut pb = PathBuilder::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = -FRAC_PI_2 + step * i as f32;
        let (px, py) = (c + r * a.cos(), c + r * a.sin());
        if i == 0 {
            pb.move_to(px, py);
        } else {
            pb.line_to(px, py);
        }
    }
    pb.close();
    pb.finish()
}

fn heart_path(side: f32) -> Option<Path> {
    let (w, h) = (side, side);
    let r = side / 4.0;
    let mut pb = PathBuilder::new();
    pb.move_to(w / 2.0, h);
    pb.cubic_to(w * 0.35, h * 0.85, 0.0, h * 0.55, 0.0, h / 4.0);
    arc(&mut pb, w / 4.0, h / 4.0, r, PI, PI);
    arc(&mut pb, 3.0 * w / 4.0, h / 4.0, r, PI, PI);
    pb.cubic_to(w, h * 0.55, w * 0.65, h * 0.85, w / 2.0, h);
    pb.close();
    pb.finish()
}

/// Append a circular arc, starting at the current point on the circle.
///
/// Angles are in radians, y axis pointing down. Split into at most quarter
/// turns, each approximated by one cubic.
fn arc(pb: &mut PathBuilder, cx: f32, cy: f32, r: f32, start: f32, sweep: f32) {
    let segments = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let delta = sweep / segments as f32;
    let k = 4.0 / 3.0 * (delta / 4.0).tan();
    let mut a0 = start;
    for _ in 0..segments {
        let a1 = a0 + delta;
        let (c0, s0) = (a0.cos(), a0.sin());
        let (c1, s1) = (a1.cos(), a1.sin());
        pb.cubic_to(
            cx + r * (c0 - k * s0),
            cy + r * (s0 + k * c0),
            cx + r * (c1 + k * s1),
            cy + r * (s1 - k * c1),
            cx + r * c1,
            cy + r * s1,
        );
        a0 = a1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 100, 50, 255]))
    }

    fn coverage_at(shape: MaskShape, side: u32, x: u32, y: u32) -> u8 {
        let mask = shape_coverage(shape, side).unwrap();
        mask.data()[coverage_index(side, x, y)]
    }

    #[test]
    fn coverage_index_does_not_overflow_for_huge_sides() {
        let side = 70_000u32;
        assert_eq!(
            coverage_index(side, side - 1, side - 1),
            side as usize * side as usize - 1
        );
        assert_eq!(coverage_index(4, 1, 2), 9);
    }

    #[test]
    fn crop_wide_image_takes_centre() {
        let img = RgbaImage::from_fn(200, 100, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let sq = crop_to_square(&img);
        assert_eq!(sq.dimensions(), (100, 100));
        assert_eq!(sq.get_pixel(0, 0), img.get_pixel(50, 0));
        assert_eq!(sq.get_pixel(99, 99), img.get_pixel(149, 99));
    }

    #[test]
    fn crop_tall_image_takes_centre() {
        let img = RgbaImage::from_fn(40, 100, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let sq = crop_to_square(&img);
        assert_eq!(sq.dimensions(), (40, 40));
        assert_eq!(sq.get_pixel(0, 0), img.get_pixel(0, 30));
    }

    #[test]
    fn crop_degenerate_image_is_returned_unchanged() {
        let img = RgbaImage::new(0, 10);
        assert_eq!(crop_to_square(&img).dimensions(), (0, 10));
    }

    #[test]
    fn circle_mask_keeps_centre_and_clears_corner() {
        let out = apply_mask(&solid(64, 64), MaskShape::Circle).unwrap();
        assert_eq!(out.get_pixel(32, 32).0[3], 255);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn every_shape_contains_the_centre() {
        for shape in MaskShape::ALL {
            assert_eq!(coverage_at(shape, 60, 30, 30), 255, "{:?}", shape);
        }
    }

    #[test]
    fn only_rounded_square_reaches_near_the_corner() {
        // corner radius is 10 at side 60, so (5, 5) is still inside it
        assert_eq!(coverage_at(MaskShape::RoundedSquare, 60, 5, 5), 255);
        assert_eq!(coverage_at(MaskShape::Circle, 60, 5, 5), 0);
        assert_eq!(coverage_at(MaskShape::Star, 60, 5, 5), 0);
    }

    #[test]
    fn shapes_exclude_the_top_left_corner() {
        for shape in MaskShape::ALL {
            assert_eq!(coverage_at(shape, 60, 0, 0), 0, "{:?}", shape);
        }
    }

    #[test]
    fn heart_apex_is_at_bottom_centre() {
        // lobes are at the top, the bottom corners stay clear
        assert_eq!(coverage_at(MaskShape::Heart, 80, 40, 70), 255);
        assert_eq!(coverage_at(MaskShape::Heart, 80, 2, 78), 0);
        assert_eq!(coverage_at(MaskShape::Heart, 80, 77, 78), 0);
    }

    #[test]
    fn mask_on_empty_image_yields_nothing() {
        assert!(apply_mask(&RgbaImage::new(0, 0), MaskShape::Star).is_none());
    }

    #[test]
    fn make_icon_crops_then_masks() {
        let out = make_icon(&solid(120, 80), Some(MaskShape::Circle)).unwrap();
        assert_eq!(out.dimensions(), (80, 80));
        assert_eq!(out.get_pixel(0, 0).0[3], 0);

        let plain = make_icon(&solid(120, 80), None).unwrap();
        assert_eq!(plain.get_pixel(0, 0).0[3], 255);
    }
}
