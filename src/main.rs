#![warn(non_snake_case)]
//! # dungeon_layout
//!
//! Generates a room chain and prints it: first the summary map, then the
//! plan and per-room placements as JSON for a renderer to consume.
//!
//! ```text
//! dungeon_layout [ROOMS] [SEED] [CONFIG.json]
//! ```
//!
//! `RUST_LOG=debug` shows every placement decision.

use dungeon_layout::layout::{generate_layout_random, generate_layout_seeded};
use dungeon_layout::placement::place_plan;
use dungeon_layout::ui::render_minimap;
use dungeon_layout::{LayoutConfig, LayoutError};
use log::info;
use serde_json::json;
use std::error::Error;

const DEFAULT_ROOMS: usize = 5;

fn parse_arg<T: std::str::FromStr>(value: Option<&String>, name: &str) -> Result<Option<T>, LayoutError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| LayoutError::InvalidArgument(format!("{name} must be a number, got {raw:?}"))),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let rooms = parse_arg::<usize>(args.first(), "ROOMS")?.unwrap_or(DEFAULT_ROOMS);
    let seed = parse_arg::<u64>(args.get(1), "SEED")?;
    let config = match args.get(2) {
        Some(path) => {
            info!("loading config from {path}");
            LayoutConfig::from_json_file(path)?
        }
        None => LayoutConfig::default(),
    };

    let plan = match seed {
        Some(seed) => generate_layout_seeded(rooms, &config, seed)?,
        None => generate_layout_random(rooms, &config)?,
    };

    print!("{}", render_minimap(&plan, Some(0)));
    let placements = place_plan(&plan, &config);
    let report = json!({
        "plan": plan,
        "placements": placements,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
