//! Translation adapters

mod groq;

pub use groq::GroqTranslator;
