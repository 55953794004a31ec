use thiserror::Error;

/// RFC parsing and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
