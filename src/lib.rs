//! # syntax-convert
//!
//! A build-time converter for language-definition files.
//!
//! Each input file is a declarative YAML document carrying its definition
//! under a top-level `language_data` key. The converter enumerates a source
//! directory and writes one pretty-printed `<base>_syntax.json` file per
//! entry, ready for consumption by a syntax-highlighting engine.

pub mod syntax;
