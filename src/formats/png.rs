use std::io::Write;

use image::{DynamicImage, ImageResult};

use crate::encoder::Encoder;

pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn format_name(&self) -> &'static str {
        "png"
    }

    fn encode(&self, image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()> {
        let encoder = image::codecs::png::PngEncoder::new(writer);
        image.write_with_encoder(encoder)
    }
}
