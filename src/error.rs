use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed message body: {0}")]
    MalformedInput(String),

    #[error("Unknown enumeration value `{0}`")]
    UnknownEnumValue(String),

    #[error("Producer failed: {0}")]
    Producer(String),

    #[error("Invalid router configuration: {0}")]
    Config(String),
}
