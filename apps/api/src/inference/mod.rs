// Experience-tag inference: query building, evidence formatting, prompt
// assembly, response validation and ordering.
// All generator calls go through llm_client::TextGenerator.

pub mod assembler;
pub mod context;
pub mod handlers;
pub mod narrative;
pub mod ordering;
pub mod parser;
pub mod prompts;
pub mod query;
pub mod service;
pub mod tags;
