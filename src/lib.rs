pub mod converter;
pub mod detect;
pub mod encoder;
pub mod error;
pub mod formats;
pub mod layout;
pub mod prompt;
