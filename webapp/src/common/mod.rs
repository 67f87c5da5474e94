pub mod modal;
pub mod storage;
pub mod stream;
pub mod style;
pub mod suggestions;
