#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "ppm")]
pub mod ppm;

use crate::detect::Format;
use crate::encoder::Encoder;

pub fn get_encoder(format: Format) -> crate::error::Result<Box<dyn Encoder>> {
    match format {
        #[cfg(feature = "ppm")]
        Format::Ppm => Ok(Box::new(ppm::PpmEncoder)),
        #[cfg(not(feature = "ppm"))]
        Format::Ppm => Err(crate::error::Error::FeatureDisabled("ppm".into())),

        #[cfg(feature = "png")]
        Format::Png => Ok(Box::new(png::PngEncoder)),
        #[cfg(not(feature = "png"))]
        Format::Png => Err(crate::error::Error::FeatureDisabled("png".into())),
    }
}
