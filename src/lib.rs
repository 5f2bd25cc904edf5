//! htmlkeys - translation key extraction for HTML
//!
//! htmlkeys is a CLI tool and library that splits HTML fragments into an
//! annotated template and a flat key/value file of translatable content, and
//! renders translated values back into the template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (classification, naming, extraction, render, migration)

pub mod cli;
pub mod config;
pub mod core;
