//! Greedy crate loading planner.

use crate::feasibility::{check_capacity, validate_request};
use crate::grid::OccupancyGrid;
use crate::search::find_fit;
use crate::sequence::sequence_crates;
use truck_loader_core::solver::{Config, ProgressCallback, ProgressInfo, Solver};
use truck_loader_core::{Crate, Error, LoadingPlan, PlacedCrate, Result, Truck};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Plans crate loading with a largest-first, first-fit heuristic.
///
/// Crates are placed one at a time in descending volume order. Each crate
/// goes to the first free slot in scan order, trying its orientations in
/// turn. A committed crate is never moved again, and a crate that cannot be
/// placed fails the whole run.
pub struct LoadingPlanner {
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl LoadingPlanner {
    /// Creates a new planner with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a planner with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fails if the run was cancelled or ran past its time limit.
    fn check_interrupted(&self, start: Instant) -> Result<()> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }
        let limit = self.config.time_limit_ms;
        if limit > 0 && start.elapsed() >= Duration::from_millis(limit) {
            return Err(Error::Timeout(limit));
        }
        Ok(())
    }

    fn plan(
        &self,
        truck: &Truck,
        crates: &[Crate],
        progress: Option<&ProgressCallback>,
    ) -> Result<LoadingPlan> {
        let start = Instant::now();

        validate_request(truck, crates)?;
        let volumes = check_capacity(truck, crates)?;

        let sequence = sequence_crates(crates);
        let mut grid = OccupancyGrid::new(truck.extents())?;
        let mut plan = LoadingPlan::new(volumes.truck_volume);
        let mut step: u32 = 0;

        for item in sequence {
            self.check_interrupted(start)?;

            let fit = find_fit(&grid, item, self.config.parallel_scan)
                .ok_or(Error::UnplaceableCrate(item.id()))?;

            grid.occupy(&fit.cuboid);
            step += 1;

            log::debug!(
                "Step {}: crate {} at ({}, {}, {}) as {:?}",
                step,
                item.id(),
                fit.cuboid.x,
                fit.cuboid.y,
                fit.cuboid.z,
                fit.orientation
            );

            plan.push(PlacedCrate::new(item.id(), step, fit.orientation, fit.cuboid));

            if let Some(callback) = progress {
                callback(ProgressInfo {
                    step: step as usize,
                    total: crates.len(),
                    crate_id: item.id(),
                    elapsed_ms: start.elapsed().as_millis() as u64,
                    utilization: plan.utilization,
                });
            }
        }

        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Planned {} crates, utilization {}, {}ms",
            plan.len(),
            plan.utilization_percent(),
            plan.computation_time_ms
        );

        Ok(plan)
    }

    fn run(
        &self,
        truck: &Truck,
        crates: &[Crate],
        progress: Option<&ProgressCallback>,
    ) -> Result<LoadingPlan> {
        // Reset cancellation flag
        self.cancelled.store(false, Ordering::Relaxed);

        self.plan(truck, crates, progress).map_err(|e| {
            log::warn!("Loading plan failed: {}", e);
            e
        })
    }
}

impl Default for LoadingPlanner {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for LoadingPlanner {
    fn solve(&self, truck: &Truck, crates: &[Crate]) -> Result<LoadingPlan> {
        self.run(truck, crates, None)
    }

    fn solve_with_progress(
        &self,
        truck: &Truck,
        crates: &[Crate],
        callback: ProgressCallback,
    ) -> Result<LoadingPlan> {
        self.run(truck, crates, Some(&callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::Mutex;
    use truck_loader_core::Orientation;

    #[test]
    fn test_single_crate() {
        let planner = LoadingPlanner::default_config();
        let plan = planner
            .solve(&Truck::new(10, 10, 10), &[Crate::new(1, 5, 5, 5)])
            .unwrap();

        let ins = plan.get(1).unwrap();
        assert_eq!(ins.loading_step_number, 1);
        assert_eq!((ins.top_left_x, ins.top_left_y), (0, 0));
        assert!(!ins.turn_horizontal);
        assert!(!ins.turn_vertical);
        assert_relative_eq!(plan.utilization, 0.125, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_request() {
        let plan = LoadingPlanner::default_config()
            .solve(&Truck::new(3, 3, 3), &[])
            .unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.utilization, 0.0);
    }

    #[test]
    fn test_capacity_checked_before_placement() {
        let result = LoadingPlanner::default_config().solve(
            &Truck::new(2, 2, 2),
            &[Crate::new(1, 2, 2, 2), Crate::new(2, 2, 2, 2)],
        );
        assert_eq!(
            result,
            Err(Error::CapacityExceeded {
                crate_volume: 16,
                truck_volume: 8,
            })
        );
    }

    #[test]
    fn test_unplaceable_fails_whole_run() {
        // Alone, crate 2 fits as (3, 1, 1). Once crate 1 fills x 0..2 only the
        // x = 2 slab is left, and no supported orientation of crate 2 fits it.
        let truck = Truck::new(3, 2, 2);
        let crates = vec![Crate::new(1, 2, 2, 2), Crate::new(2, 1, 1, 3)];
        let result = LoadingPlanner::default_config().solve(&truck, &crates);
        assert_eq!(result, Err(Error::UnplaceableCrate(2)));
    }

    #[test]
    fn test_progress_reports_every_step() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let crates = vec![
            Crate::new(1, 1, 1, 1),
            Crate::new(2, 2, 2, 2),
            Crate::new(3, 1, 2, 1),
        ];
        LoadingPlanner::default_config()
            .solve_with_progress(
                &Truck::new(4, 4, 4),
                &crates,
                Box::new(move |info| sink.lock().unwrap().push((info.step, info.crate_id))),
            )
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_progress_step_reaches_total() {
        let last = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last);

        let crates: Vec<Crate> = (1..=5).map(|id| Crate::new(id, 1, 1, 1)).collect();
        LoadingPlanner::default_config()
            .solve_with_progress(
                &Truck::new(2, 2, 2),
                &crates,
                Box::new(move |info| {
                    assert!(info.step <= info.total);
                    *sink.lock().unwrap() = Some((info.step, info.total));
                }),
            )
            .unwrap();

        assert_eq!(*last.lock().unwrap(), Some((5, 5)));
    }

    #[test]
    fn test_cancel_between_placements() {
        let planner = Arc::new(LoadingPlanner::default_config());
        let handle = Arc::clone(&planner);

        let crates: Vec<Crate> = (1..=4).map(|id| Crate::new(id, 1, 1, 1)).collect();
        let result = planner.solve_with_progress(
            &Truck::new(4, 4, 4),
            &crates,
            Box::new(move |info| {
                if info.step == 1 {
                    handle.cancel();
                }
            }),
        );

        assert_eq!(result, Err(Error::Cancelled));
    }

    #[test]
    fn test_cancel_is_reset_on_next_solve() {
        let planner = LoadingPlanner::default_config();
        planner.cancel();
        assert!(planner
            .solve(&Truck::new(2, 2, 2), &[Crate::new(1, 1, 1, 1)])
            .is_ok());
    }

    #[test]
    fn test_time_limit() {
        let planner = LoadingPlanner::new(Config::default().with_time_limit(1));
        let crates: Vec<Crate> = (1..=3).map(|id| Crate::new(id, 1, 1, 1)).collect();
        let result = planner.solve_with_progress(
            &Truck::new(3, 3, 3),
            &crates,
            Box::new(|_| std::thread::sleep(Duration::from_millis(5))),
        );
        assert_eq!(result, Err(Error::Timeout(1)));
    }

    #[test]
    fn test_placements_record_orientation() {
        let plan = LoadingPlanner::default_config()
            .solve(&Truck::new(2, 1, 1), &[Crate::new(5, 1, 1, 2)])
            .unwrap();
        assert_eq!(plan.placements[0].orientation, Orientation::TurnHorizontal);
        assert!(plan.get(5).unwrap().turn_horizontal);
    }
}
