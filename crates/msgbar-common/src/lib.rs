pub mod errors;

pub use errors::{ConfigError, MsgBarError, ThemeError};

pub type Result<T> = std::result::Result<T, MsgBarError>;
