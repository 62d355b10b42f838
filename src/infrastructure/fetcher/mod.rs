//! Audio retrieval adapters

mod http;

pub use http::HttpAudioFetcher;
