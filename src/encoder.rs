use image::{DynamicImage, ImageResult};
use std::io::Write;

pub trait Encoder {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()>;
    fn format_name(&self) -> &'static str;
}
