pub mod convert;
pub mod prompt;
