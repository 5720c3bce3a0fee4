//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;
use std::path::PathBuf;
use rust_xlsxwriter::XlsxError;
use zip::result::ZipError;

/// Type alias for adjectivalness errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring while loading, scoring or saving
#[derive(Debug)]
pub enum Error {
    MissingFile(&'static str, PathBuf, Option<io::Error>),
    MissingColumn(String, Vec<String>),
    CorpusUnavailable(String),
    Spreadsheet(calamine::Error),
    Xlsx(XlsxError),
    Download(reqwest::Error),
    Zip(ZipError),
    IOError(io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingFile(info, ref path, ref opt_err) => {
                write!(f,
                    "The {} must already exist at {} but there was a problem opening it. \
                    Wrong directory? The OS error was: ",
                    info, path.display())?;
                if let Some(ref err) = *opt_err { write!(f, "{}", err) }
                else { write!(f, "Unknown") }
            },
            Error::MissingColumn(ref name, ref headers) => write!(f,
                "The input spreadsheet has no column named {:?}. The header row has: {:?}",
                name, headers),
            Error::CorpusUnavailable(ref info) => write!(f, "Tagged corpus unavailable: {}", info),
            Error::Spreadsheet(ref err) => write!(f, "Spreadsheet read error: {}", err),
            Error::Xlsx(ref err) => write!(f, "Spreadsheet write error: {}", err),
            Error::Download(ref err) => write!(f, "Corpus download error: {}", err),
            Error::Zip(ref err) => write!(f, "Corpus archive error: {}", err),
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::MissingFile(_, _, Some(ref err)) => Some(err),
            Error::MissingFile(_, _, None) => None,
            Error::MissingColumn(_, _) => None,
            Error::CorpusUnavailable(_) => None,
            Error::Spreadsheet(ref err) => Some(err),
            Error::Xlsx(ref err) => Some(err),
            Error::Download(ref err) => Some(err),
            Error::Zip(ref err) => Some(err),
            Error::IOError(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Spreadsheet(err)
    }
}
impl From<XlsxError> for Error {
    fn from(err: XlsxError) -> Self {
        Error::Xlsx(err)
    }
}
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Download(err)
    }
}
impl From<ZipError> for Error {
    fn from(err: ZipError) -> Self {
        Error::Zip(err)
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::IOError(err.error)
    }
}
