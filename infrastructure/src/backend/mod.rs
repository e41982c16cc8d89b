//! Generative backend adapters

mod ollama;

pub use ollama::OllamaBackend;
