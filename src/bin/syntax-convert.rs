//! Command-line interface for syntax-convert
//! This binary converts a directory of language-definition files into the
//! `*_syntax.json` files consumed by the highlighting engine.
//!
//! Usage:
//!   syntax-convert [dir] [--out-dir `<dir>`]

use clap::{Arg, Command};
use syntax_convert::syntax::Converter;

fn main() {
    let matches = Command::new("syntax-convert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts language-definition files into syntax JSON")
        .arg(
            Arg::new("dir")
                .help("Directory containing the language-definition files")
                .default_value("definitions")
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .help("Directory the *_syntax.json files are written to")
                .default_value("."),
        )
        .get_matches();

    let dir = matches.get_one::<String>("dir").unwrap();
    let out_dir = matches.get_one::<String>("out-dir").unwrap();

    let converter = Converter::new(dir, out_dir);
    let mut stdout = std::io::stdout();
    let written = converter.convert_all(&mut stdout).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Wrote {} syntax file(s)", written.len());
}
