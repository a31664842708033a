//! Drives one agent through a mission, one percept per turn.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use wumpus_agent::{Agent, ThinkError};
use wumpus_core::{Action, Percept};
use wumpus_tools::{TraceLog, Tracer};

use crate::script::parse_flags;
use crate::HunterConfig;

/// How a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Climbed,
    Exhausted,
    /// The percept source ran dry before the mission ended.
    InputEnded,
}

pub struct Session {
    agent: Box<dyn Agent>,
    render: bool,
    turn: u64,
}

impl Session {
    pub fn new(config: &HunterConfig) -> Self {
        let tracer = if config.trace {
            Tracer::recording()
        } else {
            Tracer::off()
        };
        info!(
            agent = %config.agent,
            grid_size = config.grid_size,
            "mission started"
        );
        Self {
            agent: config
                .agent
                .build_traced(config.grid_size, config.seed, tracer),
            render: config.render,
            turn: 0,
        }
    }

    pub fn step(&mut self, percept: Percept) -> Result<Action, ThinkError> {
        self.turn += 1;
        let decided = self.agent.think(percept);
        if self.render {
            if let Some(view) = self.agent.debug_view() {
                debug!(turn = self.turn, "belief grid\n{view}");
            }
        }
        decided
    }

    /// Feeds `percepts` in order, writing one action per line.
    pub fn replay<W: Write>(&mut self, percepts: &[Percept], out: &mut W) -> Result<Ending> {
        for percept in percepts {
            if let Some(ending) = self.turn_and_print(*percept, out)? {
                return Ok(ending);
            }
        }
        Ok(Ending::InputEnded)
    }

    /// Reads one line of flag words per turn until the mission ends or input runs out.
    pub fn interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<Ending> {
        for line in input.lines() {
            let line = line.context("Failed to read percept line")?;
            let percept = match parse_flags(&line) {
                Ok(p) => p,
                Err(err) => {
                    warn!("{err:#}");
                    continue;
                }
            };
            if let Some(ending) = self.turn_and_print(percept, out)? {
                return Ok(ending);
            }
        }
        Ok(Ending::InputEnded)
    }

    fn turn_and_print<W: Write>(&mut self, percept: Percept, out: &mut W) -> Result<Option<Ending>> {
        match self.step(percept) {
            Ok(action) => {
                writeln!(out, "{action}").context("Failed to write action")?;
                out.flush().context("Failed to write action")?;
                Ok((action == Action::Climb).then_some(Ending::Climbed))
            }
            Err(ThinkError::Exhausted) => Ok(Some(Ending::Exhausted)),
            Err(ThinkError::MissionOver) => Ok(Some(Ending::Climbed)),
        }
    }

    pub fn turns(&self) -> u64 {
        self.turn
    }

    pub fn take_trace(&mut self) -> Option<TraceLog> {
        self.agent.take_trace()
    }
}
