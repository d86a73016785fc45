use patchblend_color::Rgba;
use rayon::prelude::*;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
}

// sink-side quantization: clamp to [0, 1], then round to a byte
fn quantize(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Rasterize a per-pixel color producer into an RGBA8 buffer.
///
/// Calls `pixel_fn(x, y)` once for every pixel with `0 <= x < width` and
/// `0 <= y < height` and quantizes each channel to 8 bits, clamping values
/// outside `[0, 1]` first. The produced buffer is row-major RGBA with
/// `width * height * 4` bytes.
///
/// Rows are rendered in parallel; the producer only needs read access to
/// whatever it captures. A zero-width or zero-height image yields an empty
/// buffer without calling the producer.
pub fn render_rgba8<F>(size: ImageSize, pixel_fn: F) -> Vec<u8>
where
    F: Fn(usize, usize) -> Rgba + Sync,
{
    let mut buf = vec![0u8; size.width * size.height * 4];

    // zero-area images have no rows to split
    if size.width == 0 || size.height == 0 {
        return buf;
    }

    buf.par_chunks_exact_mut(size.width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let color = pixel_fn(x, y);
                pixel[0] = quantize(color.r);
                pixel[1] = quantize(color.g);
                pixel[2] = quantize(color.b);
                pixel[3] = quantize(color.a);
            }
        });

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_row_major_rgba() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let buf = render_rgba8(size, |x, y| {
            Rgba::new(x as f64, y as f64, 0.0, 1.0)
        });
        assert_eq!(buf.len(), 16);
        // pixel (1, 0): r = 1
        assert_eq!(&buf[4..8], &[255, 0, 0, 255]);
        // pixel (0, 1): g = 1
        assert_eq!(&buf[8..12], &[0, 255, 0, 255]);
    }

    #[test]
    fn zero_area_image_renders_an_empty_buffer() {
        for (width, height) in [(0, 4), (4, 0), (0, 0)] {
            let buf = render_rgba8(ImageSize { width, height }, |_, _| {
                Rgba::new(1.0, 1.0, 1.0, 1.0)
            });
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn quantization_rounds_and_clamps() {
        let size = ImageSize {
            width: 3,
            height: 1,
        };
        let colors = [
            Rgba::new(0.5, -0.25, 1.5, 1.0),
            Rgba::new(0.002, 0.0, 1.0, 0.0),
            Rgba::new(0.998, 1.0, 0.0, 0.5),
        ];
        let buf = render_rgba8(size, |x, _| colors[x]);
        // round(0.5 * 255) = 128, negatives clamp to 0, overshoot to 255
        assert_eq!(&buf[0..4], &[128, 0, 255, 255]);
        assert_eq!(&buf[4..8], &[1, 0, 255, 0]);
        assert_eq!(&buf[8..12], &[254, 255, 0, 128]);
    }
}
