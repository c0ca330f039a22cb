use std::io::Write;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageResult};

use crate::encoder::Encoder;

pub struct PpmEncoder;

impl Encoder for PpmEncoder {
    fn format_name(&self) -> &'static str {
        "ppm"
    }

    fn encode(&self, image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()> {
        let encoder =
            PnmEncoder::new(writer).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));

        // The pixmap encoder only takes 8-bit RGB.
        match image {
            DynamicImage::ImageRgb8(_) => image.write_with_encoder(encoder),
            other => DynamicImage::ImageRgb8(other.to_rgb8()).write_with_encoder(encoder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb, Rgba};
    use pretty_assertions::assert_eq;

    fn encode(image: &DynamicImage) -> Vec<u8> {
        let mut output = Vec::new();
        PpmEncoder.encode(image, &mut output).unwrap();
        output
    }

    #[test]
    fn test_rgb8_round_trips_exactly() {
        let source = ImageBuffer::from_fn(3, 2, |x, y| Rgb([x as u8 * 80, y as u8 * 120, 7]));
        let source = DynamicImage::ImageRgb8(source);

        let output = encode(&source);
        assert!(output.starts_with(b"P6"));

        let decoded = image::load_from_memory_with_format(&output, ImageFormat::Pnm).unwrap();
        assert_eq!(decoded.to_rgb8(), source.to_rgb8());
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let source = ImageBuffer::from_pixel(2, 2, Rgba([10u8, 20, 30, 0]));
        let output = encode(&DynamicImage::ImageRgba8(source));

        let decoded = image::load_from_memory_with_format(&output, ImageFormat::Pnm).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().get_pixel(1, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_rgb16_is_narrowed_to_8_bit() {
        let source = ImageBuffer::from_pixel(1, 1, Rgb([0u16, 2570, 65535]));
        let output = encode(&DynamicImage::ImageRgb16(source));

        let decoded = image::load_from_memory_with_format(&output, ImageFormat::Pnm).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().get_pixel(0, 0), &Rgb([0, 10, 255]));
    }
}
