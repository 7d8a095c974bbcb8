// src/cli.rs

use std::path::PathBuf;

use clap::Parser;

use rust_dungeon::generator::{GeneratorConfig, PrefabCatalog, Result, DEFAULT_GRID_SIZE};

#[derive(Parser, Debug)]
#[clap(name = "rust_dungeon", about = "Grows prefab dungeons toward a random goal.")]
pub struct Opt {
    /// JSON file with generator tunables.
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// JSON file with prefab templates replacing the stock catalog.
    #[clap(long)]
    pub catalog: Option<PathBuf>,
    #[clap(short, long)]
    pub seed: Option<u64>,
    #[clap(short, long)]
    pub path_length: Option<usize>,
    #[clap(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_width: i32,
    #[clap(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_height: i32,
    /// Print dungeons to the terminal instead of opening a window.
    #[clap(long)]
    pub headless: bool,
    /// Number of dungeons to build in headless mode.
    #[clap(short = 'n', long, default_value_t = 1)]
    pub count: usize,
    /// Also print a text rendering of each headless dungeon.
    #[clap(long)]
    pub ascii: bool,
    /// Seconds between revealed rooms in the viewer.
    #[clap(long, default_value_t = 0.25)]
    pub reveal: f32,
}

impl Opt {
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path_length) = self.path_length {
            config.path_length = path_length;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn catalog(&self) -> Result<PrefabCatalog> {
        match &self.catalog {
            Some(path) => PrefabCatalog::from_json_file(path),
            None => Ok(PrefabCatalog::default()),
        }
    }
}
