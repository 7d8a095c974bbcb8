// src/ui/viewer.rs

use std::time::{Duration, Instant};

use log::{error, info};

use crate::generator::{Dungeon, Generator};
use crate::render::path_summary;

/// State shared by the viewer panels: the generator, the dungeon on screen
/// and how much of it has been revealed so far.
pub struct Viewer {
    generator: Generator,
    dungeon: Option<Dungeon>,
    revealed: usize,
    last_reveal: Instant,
    pub reveal_interval: Duration,
    pub show_prefabs: bool,
    pub status_message: String,
}

impl Viewer {
    pub fn new(generator: Generator, reveal_interval: Duration) -> Self {
        let mut viewer = Viewer {
            generator,
            dungeon: None,
            revealed: 0,
            last_reveal: Instant::now(),
            reveal_interval,
            show_prefabs: false,
            status_message: String::new(),
        };
        viewer.regenerate();
        viewer
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn dungeon(&self) -> Option<&Dungeon> {
        self.dungeon.as_ref()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn fully_revealed(&self) -> bool {
        self.dungeon.as_ref().map_or(true, |d| self.revealed >= d.len())
    }

    /// Throws the current dungeon away and grows a new one with a new goal.
    pub fn regenerate(&mut self) {
        match self.generator.new_dungeon() {
            Ok(dungeon) => {
                info!("{}", path_summary(&dungeon.path).trim_end());
                self.status_message = format!(
                    "{} rooms built in {:.2?}",
                    dungeon.len(),
                    dungeon.elapsed
                );
                self.dungeon = Some(dungeon);
            }
            Err(e) => {
                error!("Dungeon generation failed: {}", e);
                self.status_message = format!("Generation failed: {}", e);
                self.dungeon = None;
            }
        }
        self.revealed = if self.reveal_interval.is_zero() { usize::MAX } else { 1 };
        self.last_reveal = Instant::now();
    }

    /// Reveals the next room once the interval has passed. Returns true while
    /// rooms remain hidden.
    pub fn tick(&mut self) -> bool {
        if self.fully_revealed() {
            return false;
        }
        if self.last_reveal.elapsed() >= self.reveal_interval {
            self.revealed += 1;
            self.last_reveal = Instant::now();
        }
        !self.fully_revealed()
    }
}
