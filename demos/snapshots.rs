//! Taking and restoring snapshots around temporary changes.
//!
//! Run with: cargo run --example snapshots

use std::error::Error;
use tidy_config::{tidy_config, OptionId, TagKind};

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = tidy_config! {
        "new-blocklevel-tags" => "article, aside",
        "tab-size" => 4,
    };
    config.take_snapshot();

    // Per-document overrides
    config.set_option("new-blocklevel-tags", "section2");
    config.set_option("tab-size", "2");
    println!("changed since snapshot: {}", config.diff_against_snapshot());
    println!("block tags: {:?}", config.tags().declared(TagKind::Block));

    config.restore_from_snapshot();
    println!("changed since snapshot: {}", config.diff_against_snapshot());
    println!("block tags: {:?}", config.tags().declared(TagKind::Block));
    println!("tab-size: {}", config.get_int(OptionId::TabSize));

    // Every settable option with its current value
    let exported = serde_json::to_string_pretty(&config.resolved_values())?;
    println!("{}", exported);

    Ok(())
}
