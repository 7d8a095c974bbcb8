#![warn(non_snake_case)]
//! # rust_dungeon Main Entry Point
//!
//! Builds a generator from the command line options and either opens the
//! egui viewer (default `gui` feature) or prints dungeons to the terminal.
//!
//! Debug categories are log targets, e.g.
//! `RUST_LOG=build_dungeon=debug,random_door=debug`.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;

use clap::Parser;
use log::{error, info};

use rust_dungeon::generator::{start_room, Generator};
use rust_dungeon::render::{self, AsciiCanvas};

mod cli;

/// Rebuilds `count` dungeons from one generator and prints each path.
fn run_headless(generator: &mut Generator, opt: &cli::Opt) -> Result<(), Box<dyn Error>> {
    let (grid_w, grid_h) = generator.grid_size();
    for _ in 0..opt.count.max(1) {
        let dungeon = match generator.new_dungeon() {
            Ok(dungeon) => dungeon,
            Err(e) => {
                error!("Dungeon generation failed: {}", e);
                return Err(e.into());
            }
        };
        print!("{}", render::path_summary(&dungeon.path));
        println!("Goal: ({}, {})", dungeon.goal.x, dungeon.goal.y);
        println!("Dungeon Build Time: {:?}", dungeon.elapsed);
        if opt.ascii {
            let mut canvas = AsciiCanvas::new(grid_w, grid_h, 10);
            render::render_dungeon(&dungeon, &mut canvas);
            print!("{}", canvas);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("rust_dungeon starting...");

    let opt = cli::Opt::parse();
    let config = opt.generator_config()?;
    let catalog = opt.catalog()?;

    let start = start_room(opt.grid_width);
    let mut generator = Generator::new(start, opt.grid_width, opt.grid_height, catalog, config)?;
    generator.add_rotated_prefabs();

    let headless = opt.headless || cfg!(feature = "headless") || !cfg!(feature = "gui");
    if headless {
        run_headless(&mut generator, &opt)?;
    } else {
        #[cfg(feature = "gui")]
        {
            let reveal = std::time::Duration::from_secs_f32(opt.reveal.max(0.0));
            rust_dungeon::ui::run_main_window(generator, reveal)?;
        }
    }

    info!("rust_dungeon exiting.");
    Ok(())
}
