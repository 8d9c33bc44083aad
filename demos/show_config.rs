//! Reading a config file and printing what it changed.
//!
//! Run with: cargo run --example show_config -- path/to/tidyrc

use std::error::Error;
use tidy_config::{Config, OptionId};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "~/.tidyrc".to_string());

    let mut config = Config::new();
    if tidy_config::file_exists(&path) {
        let warned = config.parse_file(&path)?;
        if warned {
            for err in config.option_errors() {
                eprintln!("warning: {}", err);
            }
        }
    } else {
        println!("{} not found, using inline settings\n", path);
        config.parse_str("indent: auto\nwrap: 0\nnew-inline-tags: foo, bar\nchar-encoding: mac\n");
    }

    // Only options that differ from their defaults
    println!("Changed options:");
    print!("{}", config.to_config_string()?);

    println!("\nSelected values:");
    println!("  indent-spaces = {}", config.get_int(OptionId::IndentSpaces));
    println!("  input-encoding = {:?}", config.get_encoding(OptionId::InCharEncoding));
    println!("  output-encoding = {:?}", config.get_encoding(OptionId::OutCharEncoding));

    Ok(())
}
