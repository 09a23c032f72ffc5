mod conversion;
mod conversion_tables;
mod strip_decode;
mod stream_transfer;
mod tile_rotate;
mod y2r_error;
mod y2r_support;

pub use y2r_support::BlockAlignment;
pub use y2r_support::InputFormat;
pub use y2r_support::OutputFormat;
pub use y2r_support::Rotation;
pub use y2r_support::StandardCoefficient;

pub use y2r_error::MismatchedSize;
pub use y2r_error::Y2rError;

pub use conversion_tables::prepare_coefficient_tables;

pub use stream_transfer::ByteStore;
pub use stream_transfer::ConversionBuffer;

pub use conversion::perform_conversion;
pub use conversion::ConversionConfiguration;
