pub mod export;
pub mod files;
