use std::collections::VecDeque;

use tracing::{debug, info};
use wumpus_belief::Knowledge;
use wumpus_core::{Action, Body, Percept};
use wumpus_plan::Planner;
use wumpus_tools::{render_grid, TraceEvent, TraceLog, Tracer};

use crate::{Agent, ThinkError};

/// The deliberate hunter: updates its knowledge, takes any immediate opportunity,
/// otherwise follows a cached plan and replans only once it runs dry.
#[derive(Debug)]
pub struct InferenceAgent {
    knowledge: Knowledge,
    body: Body,
    plan: VecDeque<Action>,
    turn: u64,
    tracer: Tracer,
}

impl InferenceAgent {
    pub fn new(grid_size: usize) -> Self {
        Self {
            knowledge: Knowledge::new(grid_size),
            body: Body::default(),
            plan: VecDeque::new(),
            turn: 0,
            tracer: Tracer::off(),
        }
    }

    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Actions still queued from the last plan.
    pub fn pending(&self) -> impl Iterator<Item = Action> + '_ {
        self.plan.iter().copied()
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    fn emit(&mut self, tag: &'static str, a: u64, b: u64) {
        self.tracer
            .emit(TraceEvent::new(self.turn, tag).with_a(a).with_b(b));
    }

    fn can_climb(&self) -> bool {
        let k = &self.knowledge;
        self.body.gold_grabbed
            && self.body.at_start()
            && (k.wumpus_killed() || (!k.wumpus_found() && k.undiscovered().is_empty()))
    }

    fn decide(&mut self) -> Result<Action, ThinkError> {
        let pose = self.body.pose;
        let here = pose.at.packed();

        if self.body.arrows > 0 && self.knowledge.can_shoot_from(pose) {
            let target = self.knowledge.wumpus().map_or(0, |w| w.packed());
            info!(turn = self.turn, "wumpus in line of fire, shooting");
            self.emit("shoot", here, target);
            return Ok(Action::Shoot);
        }

        if !self.body.gold_grabbed && self.knowledge.gold_at(pose.at) {
            info!(turn = self.turn, "grabbing the gold");
            self.emit("grab", here, 0);
            return Ok(Action::Grab);
        }

        if self.can_climb() {
            info!(turn = self.turn, "climbing out");
            self.emit("climb", here, u64::from(self.knowledge.wumpus_killed()));
            return Ok(Action::Climb);
        }

        if self.plan.is_empty() {
            self.replan()?;
        }

        let action = self.plan.pop_front().ok_or(ThinkError::Exhausted)?;
        self.emit("step", here, self.plan.len() as u64);
        Ok(action)
    }

    fn replan(&mut self) -> Result<(), ThinkError> {
        let planner = Planner::new(&self.knowledge, self.body.gold_grabbed);
        match planner.search(self.body.pose) {
            Some(plan) if !plan.steps.is_empty() => {
                info!(
                    turn = self.turn,
                    steps = plan.steps.len(),
                    expansions = plan.expansions,
                    "plan computed"
                );
                self.emit("plan", plan.end.at.packed(), plan.steps.len() as u64);
                self.plan.extend(plan.steps);
                Ok(())
            }
            _ => {
                info!(
                    turn = self.turn,
                    frontier = self.knowledge.undiscovered().len(),
                    "knowledge exhausted, nothing left to plan for"
                );
                self.emit("exhausted", self.body.pose.at.packed(), 0);
                Err(ThinkError::Exhausted)
            }
        }
    }

    /// Keeps the body and knowledge in step with the chosen action before the next percept.
    fn commit(&mut self, action: Action) {
        let at = self.body.pose.at;
        let gold_here = action == Action::Grab && self.knowledge.take_gold(at);
        self.body.apply(action, gold_here);
    }
}

impl Agent for InferenceAgent {
    fn init(&mut self, grid_size: usize) {
        self.knowledge = Knowledge::new(grid_size);
        self.body = Body::default();
        self.plan.clear();
        self.turn = 0;
    }

    fn think(&mut self, percept: Percept) -> Result<Action, ThinkError> {
        if self.body.has_won {
            return Err(ThinkError::MissionOver);
        }
        self.turn += 1;
        self.knowledge = self.knowledge.observe(self.body.pose.at, percept);

        let action = self.decide()?;
        debug!(turn = self.turn, %action, "decided");
        self.commit(action);
        Ok(action)
    }

    fn debug_view(&self) -> Option<String> {
        Some(render_grid(self.knowledge.grid(), self.body.pose))
    }

    fn take_trace(&mut self) -> Option<TraceLog> {
        self.tracer.take_log()
    }
}
