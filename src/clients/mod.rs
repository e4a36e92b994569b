//! HTTP clients for the assistant's external collaborators.

pub mod backend;
pub mod gemini;
pub mod youtube;
