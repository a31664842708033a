use wumpus_belief::Knowledge;
use wumpus_core::{Point, Pose, START};

/// What the current mission phase is trying to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// Cells the heuristic steers toward.
    pub points: Vec<Point>,
    /// Set while a located wumpus is still alive after the gold is grabbed: the goal is then
    /// reached by facing it, not by standing on any of `points`.
    pub aim_at: Option<Point>,
}

impl Goal {
    pub fn for_phase(knowledge: &Knowledge, gold_grabbed: bool) -> Self {
        let aim_at = match knowledge.wumpus() {
            Some(w) if gold_grabbed && !knowledge.wumpus_killed() => Some(w),
            _ => None,
        };
        Self {
            points: goal_points(knowledge, gold_grabbed),
            aim_at,
        }
    }

    pub fn is_reached(&self, pose: Pose) -> bool {
        match self.aim_at {
            Some(w) => pose.is_ahead(w),
            None => self.points.contains(&pose.at),
        }
    }

    /// Manhattan distance plus turning cost to the closest goal point.
    /// `None` when there is nothing left to aim for.
    pub fn heuristic(&self, pose: Pose) -> Option<u32> {
        self.points
            .iter()
            .map(|p| pose.at.manhattan(*p) + pose.turning_cost(*p))
            .min()
    }
}

fn goal_points(knowledge: &Knowledge, gold_grabbed: bool) -> Vec<Point> {
    let frontier: Vec<Point> = knowledge.undiscovered().iter().copied().collect();

    if !gold_grabbed {
        if frontier.is_empty() {
            return knowledge.least_witnessed();
        }
        return frontier;
    }

    if knowledge.wumpus_killed() || frontier.is_empty() {
        return vec![START];
    }

    let approach = knowledge.wumpus_approach_cells();
    if !approach.is_empty() {
        return approach;
    }
    frontier
}
