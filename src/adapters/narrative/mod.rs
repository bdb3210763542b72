//! Narrative generator adapters.

mod template_narrator;

pub use template_narrator::TemplateNarrator;
