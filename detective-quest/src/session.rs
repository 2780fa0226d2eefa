use std::io;

use crate::clue_index::ClueIndex;
use crate::console::Console;
use crate::explorer::{ExplorationSummary, Explorer};
use crate::level::Level;
use crate::room::RoomGraph;
use crate::suspect_map::{MapError, SuspectMap};
use crate::text::{self, MAX_ACCUSATION};
use crate::verdict::{self, Verdict, VerdictError, VerdictReport};

/// How the closing phase ended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Judgement {
    /// The level has no verdict phase.
    NotHeld,
    /// The player named nobody; no tally was made.
    Withdrawn,
    Decided(VerdictReport),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionReport {
    pub level: Level,
    pub exploration: ExplorationSummary,
    pub clues: Vec<String>,
    pub judgement: Judgement,
}

/// One playthrough. Owns the mansion and both evidence structures; they are
/// all released together when the session is dropped.
pub struct Session {
    level: Level,
    graph: RoomGraph,
    clues: ClueIndex,
    suspects: SuspectMap,
}

impl Session {
    pub fn new(level: Level, graph: RoomGraph, table_capacity: usize) -> Result<Self, MapError> {
        Ok(Self {
            level,
            graph,
            clues: ClueIndex::new(),
            suspects: SuspectMap::with_capacity(table_capacity)?,
        })
    }

    pub fn suspects(&self) -> &SuspectMap {
        &self.suspects
    }

    pub fn run<C: Console>(&mut self, console: &mut C) -> io::Result<SessionReport> {
        tracing::info!(level = %self.level, rooms = self.graph.room_count(), "session started");

        console.say(&format!("===== {} =====", self.level.title()))?;
        console.say("Explore the mansion starting from the entry.")?;
        console.say("Type 'e' to go left, 'd' to go right and 's' to stop.")?;

        let mut explorer = Explorer::new(&self.graph, self.level.rules());
        let exploration = explorer.run(&mut self.clues, &mut self.suspects, console)?;

        let judgement = if self.level.has_verdict() {
            self.judge(console)?
        } else {
            if self.level.rules().collect_clues {
                self.list_clues(console)?;
            }
            Judgement::NotHeld
        };

        tracing::info!(
            visited = exploration.path.len(),
            clues = self.clues.len(),
            "session finished"
        );
        Ok(SessionReport {
            level: self.level,
            exploration,
            clues: self.clues.traverse_in_order(),
            judgement,
        })
    }

    fn list_clues<C: Console>(&self, console: &mut C) -> io::Result<()> {
        console.say("")?;
        console.say("===== Collected clues (alphabetical order) =====")?;
        if self.clues.is_empty() {
            return console.say("No clues were collected.");
        }
        for clue in &self.clues {
            console.say(&format!("- {}", clue))?;
        }
        Ok(())
    }

    fn judge<C: Console>(&self, console: &mut C) -> io::Result<Judgement> {
        console.say("")?;
        console.say("===== Final phase: Judgement =====")?;

        if self.clues.is_empty() {
            console.say("No clues were collected. There is no basis to accuse anyone.")?;
            return Ok(Judgement::Decided(VerdictReport::without_evidence()));
        }

        console.say("Clues collected (alphabetical order):")?;
        for clue in &self.clues {
            console.say(&format!("- {}", clue))?;
        }

        console.say("")?;
        let accused = console
            .ask("Enter the name of the suspect you want to accuse: ")?
            .map(|line| text::bounded(&line, MAX_ACCUSATION))
            .unwrap_or_default();

        let report = match verdict::evaluate(&accused, &self.clues, &self.suspects) {
            Ok(report) => report,
            Err(VerdictError::EmptyAccusation) => {
                tracing::warn!("empty accusation, verdict skipped");
                console.say("Empty suspect name. Ending the judgement.")?;
                return Ok(Judgement::Withdrawn);
            }
        };

        console.say("")?;
        console.say(&format!("Total clues pointing at '{}': {}", accused, report.count))?;
        let line = match report.verdict {
            Verdict::Sustained => format!(
                "Verdict: {}! There is enough evidence against {}.",
                report.verdict, accused
            ),
            Verdict::Inconclusive => format!(
                "Verdict: {}. Only 1 clue points at {}. The investigation is inconclusive.",
                report.verdict, accused
            ),
            Verdict::InsufficientEvidence => format!(
                "Verdict: {}. No clue clearly points at {}.",
                report.verdict, accused
            ),
        };
        console.say(&line)?;

        Ok(Judgement::Decided(report))
    }
}
