pub mod acquire;
pub mod clipboard;
pub mod export;

pub use acquire::AcquireError;
