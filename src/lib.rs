//! Speech-response evaluation core for mock interview practice.
//!
//! Turns a recorded spoken answer into a transcript, delivery metrics, a
//! composite confidence score, and LLM-generated feedback. The surrounding
//! application owns persistence and presentation; this crate only produces
//! values.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
