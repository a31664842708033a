#![allow(dead_code)]

use std::collections::BTreeSet;

use wumpus_agent::{Agent, ThinkError};
use wumpus_core::{Action, Direction, Percept, Point, Pose, START};

pub fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    /// Climbed out without the gold.
    Escaped,
    Died(Point),
    Exhausted,
    OutOfTurns,
}

/// A small deterministic cave that answers actions with percepts.
#[derive(Debug, Clone)]
pub struct World {
    pub size: usize,
    pub pits: BTreeSet<Point>,
    pub wumpus: Option<Point>,
    pub wumpus_alive: bool,
    pub gold: Option<Point>,
    pub pose: Pose,
    pub arrows: u8,
    pub has_gold: bool,
    bump: bool,
    scream: bool,
}

impl World {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pits: BTreeSet::new(),
            wumpus: None,
            wumpus_alive: true,
            gold: None,
            pose: Pose::new(START, Direction::East),
            arrows: 1,
            has_gold: false,
            bump: false,
            scream: false,
        }
    }

    pub fn with_pit(mut self, at: Point) -> Self {
        self.pits.insert(at);
        self
    }

    pub fn with_wumpus(mut self, at: Point) -> Self {
        self.wumpus = Some(at);
        self
    }

    pub fn with_gold(mut self, at: Point) -> Self {
        self.gold = Some(at);
        self
    }

    fn is_wall(&self, at: Point) -> bool {
        let last = self.size as i32 - 1;
        at.x <= 0 || at.y <= 0 || at.x >= last || at.y >= last
    }

    fn near(&self, at: Point, target: Point) -> bool {
        at.neighbors().contains(&target)
    }

    /// What the agent senses where it stands. Bump and scream last a single turn.
    pub fn percept(&mut self) -> Percept {
        let at = self.pose.at;
        let percept = Percept {
            stench: self
                .wumpus
                .is_some_and(|w| w == at || self.near(at, w)),
            breeze: self.pits.iter().any(|pit| self.near(at, *pit)),
            glitter: self.gold == Some(at),
            bump: self.bump,
            scream: self.scream,
        };
        self.bump = false;
        self.scream = false;
        percept
    }

    /// Applies `action`; returns the terminal outcome it caused, if any.
    pub fn act(&mut self, action: Action) -> Option<Outcome> {
        match action {
            Action::Left | Action::Right => self.pose = self.pose.apply(action),
            Action::Forward => {
                let next = self.pose.forward();
                if self.is_wall(next) {
                    self.bump = true;
                    return None;
                }
                self.pose.at = next;
                let eaten = self.wumpus_alive && self.wumpus == Some(next);
                if self.pits.contains(&next) || eaten {
                    return Some(Outcome::Died(next));
                }
            }
            Action::Shoot => {
                if self.arrows == 0 {
                    return None;
                }
                self.arrows -= 1;
                let mut cell = self.pose.forward();
                while !self.is_wall(cell) {
                    if self.wumpus_alive && self.wumpus == Some(cell) {
                        self.wumpus_alive = false;
                        self.scream = true;
                        break;
                    }
                    cell = cell.step(self.pose.facing);
                }
            }
            Action::Grab => {
                if self.gold == Some(self.pose.at) {
                    self.gold = None;
                    self.has_gold = true;
                }
            }
            Action::Climb => {
                if self.pose.at == START {
                    return Some(if self.has_gold {
                        Outcome::Won
                    } else {
                        Outcome::Escaped
                    });
                }
            }
        }
        None
    }
}

#[derive(Debug)]
pub struct Mission {
    pub outcome: Outcome,
    pub actions: Vec<Action>,
}

/// Plays `agent` in `world` until a terminal outcome or `max_turns`.
pub fn play(agent: &mut dyn Agent, world: &mut World, max_turns: usize) -> Mission {
    let mut actions = Vec::new();
    for _ in 0..max_turns {
        let percept = world.percept();
        let action = match agent.think(percept) {
            Ok(action) => action,
            Err(ThinkError::Exhausted) => {
                return Mission {
                    outcome: Outcome::Exhausted,
                    actions,
                }
            }
            Err(ThinkError::MissionOver) => panic!("agent asked to think after climbing"),
        };
        actions.push(action);
        if let Some(outcome) = world.act(action) {
            return Mission { outcome, actions };
        }
    }
    Mission {
        outcome: Outcome::OutOfTurns,
        actions,
    }
}
