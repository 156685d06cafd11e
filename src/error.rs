use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed call: \"{command}\": {detail}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        detail: String,
    },

    #[error("File \"{0}\" does not exist")]
    FileMissing(String),

    #[error("Path \"{0}\" is not a file")]
    NotAFile(String),

    #[error("Failed to create directory \"{path}\": {source}")]
    DirCreate {
        path: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::CommandFailed { .. } => "COMMAND_FAILED",
            Error::FileMissing(_) => "FILE_MISSING",
            Error::NotAFile(_) => "NOT_A_FILE",
            Error::DirCreate { .. } => "DIR_CREATE_FAILED",
        }
    }
}
