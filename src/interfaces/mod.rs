//! Stream codecs for the CLI: a JSON-lines command reader on the way in
//! and a CSV snapshot writer on the way out.

pub mod csv;
pub mod json;
