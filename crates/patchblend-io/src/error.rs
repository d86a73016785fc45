/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error to open or write the output file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the image dimensions do not fit a PNG header.
    #[error("Image size does not fit a png header ({0}x{1})")]
    InvalidImageSize(usize, usize),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),
}
