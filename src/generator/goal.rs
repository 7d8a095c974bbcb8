// src/generator/goal.rs

use log::debug;
use rand::Rng;

use crate::generator::{GeneratorError, Result, GOAL_MARGIN};
use crate::utils::Point2D;

/// Whether `goal` is at least `threshold` of the grid away from `start` along
/// either axis.
pub fn is_valid_goal(start: Point2D, goal: Point2D, width: i32, height: i32, threshold: f64) -> bool {
    let dx = (start.x as f64 / width as f64 - goal.x as f64 / width as f64).abs();
    let dy = (start.y as f64 / height as f64 - goal.y as f64 / height as f64).abs();
    dx >= threshold || dy >= threshold
}

/// Samples goals uniformly from `[0, width - 10] x [0, height - 10]` until one
/// passes [`is_valid_goal`]. Fails fast when no point of the window can pass.
pub fn generate_goal<R: Rng + ?Sized>(
    rng: &mut R,
    start: Point2D,
    width: i32,
    height: i32,
    threshold: f64,
) -> Result<Point2D> {
    let max_x = width - GOAL_MARGIN;
    let max_y = height - GOAL_MARGIN;
    if max_x < 0 || max_y < 0 {
        return Err(GeneratorError::GridTooSmall {
            width,
            height,
            needed_width: GOAL_MARGIN,
            needed_height: GOAL_MARGIN,
        });
    }

    // The farthest corner of the window is valid whenever any point is.
    let far = Point2D::new(
        if start.x * 2 > max_x { 0 } else { max_x },
        if start.y * 2 > max_y { 0 } else { max_y },
    );
    if !is_valid_goal(start, far, width, height, threshold) {
        return Err(GeneratorError::UnreachableGoal { threshold });
    }

    loop {
        let goal = Point2D::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        if is_valid_goal(start, goal, width, height, threshold) {
            debug!(target: "generate_goal", "goal: {}, {}", goal.x, goal.y);
            return Ok(goal);
        }
        debug!(target: "generate_goal", "rejected goal {}, {}", goal.x, goal.y);
    }
}
