use pfp_fs::FileError;
use pfp_hangul::{AddressError, ClassificationError};

pub type Path = String;

#[derive(Debug)]
pub enum Error {
    ImageLoad(ImageLoadError),
    OutputWrite(OutputWriteError),

    /// The rule table is broken. It's a bug, not a bad input.
    Classification(ClassificationError),
    Address(AddressError),

    InvalidConfig(String),
    ConfigFile {
        path: Path,
        error: serde_json::Error,
    },
    CliError(pfp_cli::Error),
    FileError(FileError),
}

impl Error {
    pub fn render(&self) -> String {
        match self {
            Error::ImageLoad(e) => format!("failed to load jamo image: {}", e.render()),
            Error::OutputWrite(e) => format!("failed to write pfp file: {}", e.render()),
            Error::Classification(e) => format!("classification defect: {e}"),
            Error::Address(e) => format!("invalid configuration: {e}"),
            Error::InvalidConfig(e) => format!("invalid configuration: {e}"),
            Error::ConfigFile { path, error } => format!("invalid configuration: `{path}`: {error}"),
            Error::CliError(e) => format!("cli error: {}", e.render("pfpgen ")),

            // config files and log files
            Error::FileError(e) => format!("invalid configuration: {}", e.render_error()),
        }
    }
}

/// Anything that goes wrong before the glyph sheet is sliced into cells.
#[derive(Debug)]
pub enum ImageLoadError {
    FileError(FileError),

    /// see <https://docs.rs/image/latest/image/error/enum.ImageError.html>
    ImageError(image::ImageError),

    /// the grid does not fit in the image
    TooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
}

impl ImageLoadError {
    pub fn render(&self) -> String {
        match self {
            ImageLoadError::FileError(e) => e.render_error(),
            ImageLoadError::ImageError(e) => format!("{e}"),
            ImageLoadError::TooSmall { width, height, required_width, required_height } => format!(
                "the image is {width}x{height}, but the grid needs at least {required_width}x{required_height}",
            ),
        }
    }
}

#[derive(Debug)]
pub enum OutputWriteError {
    /// see <https://docs.rs/serde_json/latest/serde_json/struct.Error.html>
    JsonSerdeError(serde_json::Error),
    FileError(FileError),
}

impl OutputWriteError {
    pub fn render(&self) -> String {
        match self {
            OutputWriteError::JsonSerdeError(e) => format!("{e}"),
            OutputWriteError::FileError(e) => e.render_error(),
        }
    }
}

impl From<ImageLoadError> for Error {
    fn from(e: ImageLoadError) -> Error {
        Error::ImageLoad(e)
    }
}

impl From<OutputWriteError> for Error {
    fn from(e: OutputWriteError) -> Error {
        Error::OutputWrite(e)
    }
}

impl From<ClassificationError> for Error {
    fn from(e: ClassificationError) -> Error {
        Error::Classification(e)
    }
}

impl From<AddressError> for Error {
    fn from(e: AddressError) -> Error {
        Error::Address(e)
    }
}

impl From<pfp_cli::Error> for Error {
    fn from(e: pfp_cli::Error) -> Error {
        Error::CliError(e)
    }
}

impl From<FileError> for Error {
    fn from(e: FileError) -> Error {
        Error::FileError(e)
    }
}

impl From<FileError> for ImageLoadError {
    fn from(e: FileError) -> ImageLoadError {
        ImageLoadError::FileError(e)
    }
}

impl From<image::ImageError> for ImageLoadError {
    fn from(e: image::ImageError) -> ImageLoadError {
        ImageLoadError::ImageError(e)
    }
}

impl From<FileError> for OutputWriteError {
    fn from(e: FileError) -> OutputWriteError {
        OutputWriteError::FileError(e)
    }
}

impl From<serde_json::Error> for OutputWriteError {
    fn from(e: serde_json::Error) -> OutputWriteError {
        OutputWriteError::JsonSerdeError(e)
    }
}
