use crate::detector::Detection;
use anyhow::Result;
use image::Rgb;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use usls::Image;

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const CENTER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BOX_THICKNESS: i32 = 2;
const CENTER_RADIUS: i32 = 5;

/// Draws the selected ball onto the frame: a green outlined rectangle at the
/// bounding box and a filled red disk at the center point. With no selection
/// the frame is returned with an identical raster.
pub fn annotate_ball(frame: &Image, selected: Option<&Detection>) -> Result<Image> {
    let Some(det) = selected else {
        return Ok(frame.clone());
    };

    let mut rgb = frame.to_rgb8();

    let width = (det.x2 - det.x1).max(1);
    let height = (det.y2 - det.y1).max(1);
    for inset in 0..BOX_THICKNESS {
        let w = width - 2 * inset;
        let h = height - 2 * inset;
        if w <= 0 || h <= 0 {
            break;
        }
        let rect = Rect::at(det.x1 + inset, det.y1 + inset).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(&mut rgb, rect, BOX_COLOR);
    }

    draw_filled_circle_mut(&mut rgb, det.center(), CENTER_RADIUS, CENTER_COLOR);

    Ok(Image::from(rgb))
}
