// src/generator/engine.rs

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::generator::catalog::finish_room;
use crate::generator::goal::generate_goal;
use crate::generator::overlap::overlaps;
use crate::generator::{
    GeneratorConfig, GeneratorError, PrefabCatalog, Result, FINISH_NAME, FINISH_SIZE,
};
use crate::map::{Door, Room};
use crate::utils::Point2D;

/// One step of the dungeon: a placed room and the door the next room hangs
/// off. For the finish room the door is simply its best exit.
#[derive(Debug, Clone)]
pub struct PathEntry {
    pub room: Room,
    pub door: Door,
}

/// A finished dungeon: the path from the start room to the finish room.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub path: Vec<PathEntry>,
    pub goal: Point2D,
    pub elapsed: Duration,
    pub iterations: usize,
    pub seed: u64,
}

impl Dungeon {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.path.iter().map(|entry| &entry.room)
    }

    pub fn finish(&self) -> Option<&Room> {
        self.path.last().map(|entry| &entry.room).filter(|room| room.name == FINISH_NAME)
    }
}

/// Grows dungeons from a fixed start room toward random goals.
///
/// A generator is not meant to be shared between threads while building; use
/// one instance per concurrent dungeon.
pub struct Generator {
    start: Room,
    grid_width: i32,
    grid_height: i32,
    prefabs: PrefabCatalog,
    finish: Room,
    config: GeneratorConfig,
    goal: Option<Point2D>,
    path: Vec<PathEntry>,
    rng: StdRng,
    seed: u64,
}

impl Generator {
    pub fn new(
        start: Room,
        grid_width: i32,
        grid_height: i32,
        prefabs: PrefabCatalog,
        config: GeneratorConfig,
    ) -> Result<Self> {
        config.validate()?;

        if grid_width < FINISH_SIZE || grid_height < FINISH_SIZE {
            return Err(GeneratorError::GridTooSmall {
                width: grid_width,
                height: grid_height,
                needed_width: FINISH_SIZE,
                needed_height: FINISH_SIZE,
            });
        }
        if !start.fits_within(grid_width, grid_height) {
            return Err(GeneratorError::StartOutOfBounds(start.name.clone()));
        }
        let start_door = start
            .get_door(0)
            .ok_or_else(|| GeneratorError::StartWithoutDoor(start.name.clone()))?;
        if prefabs.get(FINISH_NAME).is_some() {
            return Err(GeneratorError::InvalidConfig(format!(
                "prefab name '{}' is reserved for the finish room",
                FINISH_NAME
            )));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "Generator ready: {}x{} grid, {} prefabs, seed {}",
            grid_width,
            grid_height,
            prefabs.len(),
            seed
        );

        Ok(Generator {
            path: vec![PathEntry {
                room: start.clone(),
                door: start_door,
            }],
            start,
            grid_width,
            grid_height,
            prefabs,
            finish: finish_room(),
            config,
            goal: None,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Expands the catalog with every distinct rotation of its templates.
    pub fn add_rotated_prefabs(&mut self) {
        self.prefabs.add_rotated_prefabs();
        info!("Catalog expanded to {} prefabs", self.prefabs.len());
    }

    pub fn start(&self) -> &Room {
        &self.start
    }

    pub fn prefabs(&self) -> &PrefabCatalog {
        &self.prefabs
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn grid_size(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }

    pub fn goal(&self) -> Option<Point2D> {
        self.goal
    }

    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn reset_path(&mut self) -> Result<()> {
        let door = self
            .start
            .get_door(0)
            .ok_or_else(|| GeneratorError::StartWithoutDoor(self.start.name.clone()))?;
        self.path.clear();
        self.path.push(PathEntry {
            room: self.start.clone(),
            door,
        });
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.path
            .last()
            .map_or(false, |entry| entry.room.name == FINISH_NAME)
    }

    /// Builds a fresh dungeon: resets the path to the start room, picks a new
    /// goal and grows until the finish room is placed.
    pub fn build_dungeon(&mut self) -> Result<Dungeon> {
        let started = Instant::now();
        self.reset_path()?;
        let goal = generate_goal(
            &mut self.rng,
            self.start.origin(),
            self.grid_width,
            self.grid_height,
            self.config.finish_threshold,
        )?;
        self.goal = Some(goal);

        let mut failed: Vec<String> = Vec::new();
        let mut iterations = 0;
        while !self.is_finished() {
            if let Some(limit) = self.config.max_iterations {
                if iterations >= limit {
                    return Err(GeneratorError::IterationLimit(limit));
                }
            }
            iterations += 1;
            self.grow(goal, &mut failed)?;
        }

        let elapsed = started.elapsed();
        info!(
            "Dungeon built: {} rooms in {} iterations, {:?}",
            self.path.len(),
            iterations,
            elapsed
        );
        Ok(Dungeon {
            path: self.path.clone(),
            goal,
            elapsed,
            iterations,
            seed: self.seed,
        })
    }

    /// Alias of [`Generator::build_dungeon`] for successive dungeons.
    pub fn new_dungeon(&mut self) -> Result<Dungeon> {
        self.build_dungeon()
    }

    /// One growth iteration from the last room of the path.
    fn grow(&mut self, goal: Point2D, failed: &mut Vec<String>) -> Result<()> {
        let (active_name, active_door) = match self.path.last() {
            Some(entry) => (entry.room.name.clone(), entry.door),
            None => return Err(GeneratorError::StartWithoutDoor(self.start.name.clone())),
        };
        debug!(target: "build_dungeon", "active room: {} via {}", active_name, active_door);
        let needed = active_door.opposite();
        let no_candidate = || GeneratorError::NoCandidateRoom {
            room: active_name.clone(),
            direction: needed,
        };

        let candidates: Vec<&Room> = if self.path.len() >= self.config.path_length {
            vec![&self.finish]
        } else {
            self.prefabs
                .candidates(&active_name, &active_door, failed)
                .collect()
        };

        let score = |room: &Room| {
            room.get_door_by_d(needed)
                .and_then(|entrance| room.test_distance(&active_door, &entrance, &goal))
                .unwrap_or(f64::INFINITY)
        };
        let mut chosen = candidates
            .iter()
            .copied()
            .min_by(|a, b| score(*a).total_cmp(&score(*b)))
            .ok_or_else(no_candidate)?;
        if !self.rng.random_bool(self.config.room_random) {
            debug!(target: "build_dungeon", "random room triggered over {}", chosen.name);
            chosen = candidates.choose(&mut self.rng).copied().ok_or_else(no_candidate)?;
        }

        let room = chosen.placed_against(&active_door).ok_or_else(no_candidate)?;
        debug!(target: "build_dungeon", "trying {} at {}, {}", room.name, room.x, room.y);

        let mut door = room.get_best_door(&goal).ok_or_else(no_candidate)?;
        if room.doors.len() > 2 && !self.rng.random_bool(self.config.door_random) {
            let exits: Vec<usize> = room.exit_indices().collect();
            if let Some(random) = exits.choose(&mut self.rng).and_then(|&i| room.get_door(i)) {
                debug!(target: "random_door", "{}: {} instead of {}", room.name, random, door);
                door = random;
            }
        }

        let collides = overlaps(
            &room,
            self.path.iter().map(|entry| &entry.room),
            self.grid_width,
            self.grid_height,
        );
        if !collides {
            debug!(target: "build_dungeon", "added {} exiting {}", room.name, door);
            self.path.push(PathEntry { room, door });
            failed.clear();
            return Ok(());
        }

        debug!(target: "build_dungeon", "{} overlapped, trying again", room.name);
        failed.push(room.name);
        if failed.len() < self.config.allowed_fails && self.path.len() > 1 {
            if let Some(popped) = self.path.pop() {
                debug!(target: "build_dungeon", "backtracking, popping {}", popped.room.name);
                failed.clear();
                failed.push(popped.room.name);
            }
        }
        Ok(())
    }
}

/// Builds one dungeon from scratch. The catalog is expanded with its rotations
/// before growing.
pub fn build(
    start: Room,
    grid_width: i32,
    grid_height: i32,
    prefabs: PrefabCatalog,
    config: GeneratorConfig,
) -> Result<Dungeon> {
    let mut generator = Generator::new(start, grid_width, grid_height, prefabs, config)?;
    generator.add_rotated_prefabs();
    generator.build_dungeon()
}

/// Builds another dungeon with an existing generator, with a new goal.
pub fn rebuild(generator: &mut Generator) -> Result<Dungeon> {
    generator.new_dungeon()
}
