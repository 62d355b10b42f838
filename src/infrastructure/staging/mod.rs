//! Staging adapters

mod temp_dir;

pub use temp_dir::TempDirStaging;
