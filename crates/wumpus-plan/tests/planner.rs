use wumpus_belief::Knowledge;
use wumpus_core::{Action, Direction, Percept, Point, Pose, START};
use wumpus_plan::{Goal, Planner};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn learn(size: usize, steps: &[(Point, Percept)]) -> Knowledge {
    steps
        .iter()
        .fold(Knowledge::new(size), |k, (at, percept)| k.observe(*at, *percept))
}

fn walk(start: Pose, steps: &[Action]) -> Vec<Pose> {
    let mut poses = vec![start];
    let mut pose = start;
    for a in steps {
        pose = pose.apply(*a);
        poses.push(pose);
    }
    poses
}

fn located_wumpus() -> Knowledge {
    learn(
        6,
        &[
            (p(1, 1), Percept::none()),
            (p(2, 1), Percept::none().with_stench()),
            (p(1, 2), Percept::none().with_stench()),
            (p(3, 1), Percept::none()),
        ],
    )
}

#[test]
fn heuristic_is_exact_for_a_goal_straight_ahead() {
    let goal = Goal {
        points: vec![p(4, 1)],
        aim_at: None,
    };
    let pose = Pose::new(p(1, 1), Direction::East);
    assert_eq!(goal.heuristic(pose), Some(3));
}

#[test]
fn heuristic_adds_turning_cost() {
    let goal = Goal {
        points: vec![p(1, 3)],
        aim_at: None,
    };
    assert_eq!(goal.heuristic(Pose::new(p(1, 1), Direction::East)), Some(3));
    assert_eq!(goal.heuristic(Pose::new(p(1, 1), Direction::North)), Some(4));
    assert_eq!(goal.heuristic(Pose::new(p(1, 1), Direction::South)), Some(2));
}

#[test]
fn exploration_goals_are_the_frontier() {
    let k = learn(6, &[(p(1, 1), Percept::none())]);
    let goal = Goal::for_phase(&k, false);

    assert_eq!(goal.points, vec![p(1, 2), p(2, 1)]);
    assert_eq!(goal.aim_at, None);
}

#[test]
fn exhausted_frontier_targets_least_witnessed_pit_candidates() {
    let k = learn(6, &[(p(1, 1), Percept::none().with_breeze())]);
    let goal = Goal::for_phase(&k, false);

    assert_eq!(goal.points, vec![p(1, 2), p(2, 1)]);
}

#[test]
fn gold_in_hand_with_dead_wumpus_heads_home() {
    let k = learn(
        6,
        &[
            (p(1, 1), Percept::none()),
            (p(2, 1), Percept::none().with_stench()),
            (p(2, 1), Percept::none().with_stench().with_scream()),
        ],
    );
    let goal = Goal::for_phase(&k, true);

    assert_eq!(goal.points, vec![START]);
    assert_eq!(goal.aim_at, None);
}

#[test]
fn gold_in_hand_with_located_wumpus_aims_from_bordering_safe_cells() {
    let k = located_wumpus();
    let goal = Goal::for_phase(&k, true);

    assert_eq!(goal.points, vec![p(3, 2)]);
    assert_eq!(goal.aim_at, Some(p(2, 2)));

    // Standing on the approach cell is not enough, facing the wumpus is.
    assert!(!goal.is_reached(Pose::new(p(3, 2), Direction::South)));
    assert!(goal.is_reached(Pose::new(p(3, 2), Direction::West)));
    assert!(goal.is_reached(Pose::new(p(2, 1), Direction::South)));
}

#[test]
fn turns_are_always_successors_but_walls_are_not() {
    let k = learn(6, &[(p(1, 1), Percept::none())]);
    let planner = Planner::new(&k, false);

    let facing_wall = Pose::new(p(1, 1), Direction::North);
    let actions: Vec<Action> = planner
        .successors(facing_wall)
        .into_iter()
        .map(|(a, _)| a)
        .collect();
    assert_eq!(actions, vec![Action::Left, Action::Right]);

    let facing_open = Pose::new(p(1, 1), Direction::East);
    assert_eq!(planner.successors(facing_open).len(), 3);
}

#[test]
fn pit_candidates_are_avoided_while_safe_cells_remain() {
    let k = learn(
        6,
        &[
            (p(1, 1), Percept::none()),
            (p(2, 1), Percept::none().with_breeze()),
        ],
    );
    let start = Pose::new(p(2, 1), Direction::East);
    let planner = Planner::new(&k, false);

    assert!(planner
        .successors(start)
        .iter()
        .all(|(a, _)| *a != Action::Forward));

    let plan = planner.search(start).expect("frontier cell is reachable");
    assert_eq!(plan.end.at, p(1, 2));
    for pose in walk(start, &plan.steps) {
        assert!(k.cell(pose.at).is_safe(), "stepped on {:?}", pose.at);
    }
}

#[test]
fn first_step_from_a_quiet_start_is_forward() {
    let k = learn(6, &[(p(1, 1), Percept::none())]);
    let plan = Planner::new(&k, false)
        .search(Pose::new(START, Direction::East))
        .expect("plan");

    assert_eq!(plan.steps, vec![Action::Forward]);
    assert_eq!(plan.end, Pose::new(p(2, 1), Direction::East));
}

#[test]
fn forced_risk_enters_a_least_witnessed_pit_candidate() {
    let k = learn(6, &[(p(1, 1), Percept::none().with_breeze())]);
    let plan = Planner::new(&k, false)
        .search(Pose::new(START, Direction::East))
        .expect("forced plan");

    assert_eq!(plan.steps, vec![Action::Forward]);
}

#[test]
fn wumpus_suspects_are_a_last_resort() {
    let k = learn(6, &[(p(1, 1), Percept::none().with_stench())]);
    assert!(k.pit_witnesses().is_empty());

    let plan = Planner::new(&k, false)
        .search(Pose::new(START, Direction::East))
        .expect("last-resort plan");
    assert_eq!(plan.steps, vec![Action::Forward]);
}

#[test]
fn plan_lines_up_a_shot_at_the_located_wumpus() {
    let k = located_wumpus();
    let start = Pose::new(p(3, 1), Direction::East);

    let plan = Planner::new(&k, true).search(start).expect("shot plan");

    assert_eq!(plan.steps, vec![Action::Right, Action::Forward, Action::Right]);
    assert!(k.can_shoot_from(plan.end));
}

#[test]
fn plan_returns_home_once_the_job_is_done() {
    let k = learn(
        5,
        &[
            (p(1, 1), Percept::none()),
            (p(2, 1), Percept::none()),
            (p(3, 1), Percept::none()),
            (p(1, 2), Percept::none()),
            (p(2, 2), Percept::none()),
            (p(3, 2), Percept::none()),
            (p(1, 3), Percept::none()),
            (p(2, 3), Percept::none()),
            (p(3, 3), Percept::none()),
        ],
    );
    assert!(k.undiscovered().is_empty());

    let start = Pose::new(p(3, 3), Direction::South);
    let plan = Planner::new(&k, true).search(start).expect("way home");

    assert_eq!(plan.end.at, START);
    // Two turns plus four moves is the cheapest way back.
    assert_eq!(plan.steps.len(), 6);
}

#[test]
fn nothing_left_to_do_yields_no_plan() {
    let k = learn(3, &[(p(1, 1), Percept::none())]);
    assert!(k.undiscovered().is_empty());

    assert_eq!(Planner::new(&k, false).search(Pose::new(START, Direction::East)), None);
}

#[test]
fn exhausted_frontier_risks_only_least_witnessed_cells() {
    let k = learn(
        6,
        &[
            (p(1, 1), Percept::none()),
            (p(2, 1), Percept::none().with_breeze()),
            (p(1, 2), Percept::none().with_breeze()),
        ],
    );
    assert!(k.undiscovered().is_empty());
    let planner = Planner::new(&k, false);

    // (2,2) is blamed by two breezes and stays off limits.
    let facing_doubly_blamed = Pose::new(p(1, 2), Direction::East);
    assert!(planner
        .successors(facing_doubly_blamed)
        .iter()
        .all(|(a, _)| *a != Action::Forward));

    let plan = planner
        .search(Pose::new(p(1, 2), Direction::South))
        .expect("forced plan exists");
    assert_eq!(plan.steps, vec![Action::Forward]);
    assert_eq!(plan.end.at, p(1, 3));
}

#[test]
fn unreachable_frontier_terminates_without_a_plan() {
    // The start is fenced in by pit candidates while the only safe frontier lies beyond them.
    let k = learn(
        6,
        &[
            (p(1, 1), Percept::none().with_breeze()),
            (p(4, 4), Percept::none()),
        ],
    );
    assert!(!k.undiscovered().is_empty());

    assert_eq!(
        Planner::new(&k, false).search(Pose::new(START, Direction::East)),
        None
    );
}
