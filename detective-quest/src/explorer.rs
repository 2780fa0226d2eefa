use std::io;

use crate::clue_index::ClueIndex;
use crate::command::{Command, UnknownCommand};
use crate::console::Console;
use crate::level::{ExplorationRules, Termination};
use crate::room::{GraphError, Room, RoomGraph, Side};
use crate::suspect_map::{MapError, SuspectMap};

const COMMAND_PROMPT: &str = "Choose (e/d/s): ";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error(transparent)]
    Unknown(#[from] UnknownCommand),
    #[error(transparent)]
    Blocked(#[from] GraphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationEnd {
    Stopped,
    DeadEnd,
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExplorationSummary {
    /// Room names in the order they were entered, starting with the entry.
    pub path: Vec<String>,
    pub invalid_commands: usize,
    /// Suspect attributions lost because the suspect table was full.
    pub dropped_attributions: usize,
    pub end: ExplorationEnd,
}

/// Walks the mansion under player control, feeding every clue it sees into
/// the evidence structures.
///
/// Evidence is collected only from rooms actually entered: clues in
/// branches the player never visits stay unknown.
pub struct Explorer<'g> {
    current: &'g Room,
    rules: ExplorationRules,
}

impl<'g> Explorer<'g> {
    pub fn new(graph: &'g RoomGraph, rules: ExplorationRules) -> Self {
        Self {
            current: graph.entry(),
            rules,
        }
    }

    pub fn current(&self) -> &'g Room {
        self.current
    }

    /// Stores the current room's clue (and suspect, when attribution is on).
    ///
    /// A full suspect table loses only the attribution; the clue itself is
    /// still indexed.
    pub fn collect(
        &self,
        clues: &mut ClueIndex,
        suspects: &mut SuspectMap,
    ) -> Result<(), MapError> {
        if !self.rules.collect_clues {
            return Ok(());
        }
        let Some(clue) = self.current.clue() else {
            return Ok(());
        };

        clues.insert(clue);
        if self.rules.attribute_suspects {
            if let Some(suspect) = self.current.suspect() {
                suspects.insert(clue, suspect)?;
            }
        }
        Ok(())
    }

    /// Applies one command. On error the current room is unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Step, GraphError> {
        match command {
            Command::Stop => Ok(Step::Stopped),
            Command::Go(side) => {
                self.current = self.current.child(side)?;
                Ok(Step::Moved)
            }
        }
    }

    /// Parses and applies one line of player input.
    pub fn handle(&mut self, line: &str) -> Result<Step, NavigationError> {
        let command = Command::parse(line)?;
        Ok(self.apply(command)?)
    }

    /// Runs the interactive loop until the player stops, the input ends, or
    /// (under dead-end termination) a room without exits is reached.
    pub fn run<C: Console>(
        &mut self,
        clues: &mut ClueIndex,
        suspects: &mut SuspectMap,
        console: &mut C,
    ) -> io::Result<ExplorationSummary> {
        let mut path = Vec::new();
        let mut invalid_commands = 0;
        let mut dropped_attributions = 0;
        let mut arrived = true;

        let end = loop {
            let room = self.current;
            if arrived {
                path.push(room.name().to_string());
                tracing::info!(room = room.name(), "entered room");
            }

            console.say("")?;
            console.say(&format!("You are in: {}", room.name()))?;
            self.describe(console)?;
            // evidence is gathered once per arrival, not on every re-prompt
            if arrived {
                if let Err(err) = self.collect(clues, suspects) {
                    tracing::warn!(%err, "suspect attribution lost");
                    console.say(&format!(
                        "Suspect table full! Could not record the suspect for \"{}\".",
                        room.clue().unwrap_or_default()
                    ))?;
                    dropped_attributions += 1;
                }
            }

            if self.rules.termination == Termination::DeadEnd && room.is_dead_end() {
                console.say("You reached a room with no more paths.")?;
                console.say("Exploration over.")?;
                break ExplorationEnd::DeadEnd;
            }

            self.list_exits(console)?;

            let Some(line) = next_command(console)? else {
                tracing::warn!("input closed during exploration");
                break ExplorationEnd::InputClosed;
            };

            match self.handle(&line) {
                Ok(Step::Stopped) => {
                    console.say("")?;
                    console.say("You decided to stop exploring.")?;
                    break ExplorationEnd::Stopped;
                }
                Ok(Step::Moved) => arrived = true,
                Err(err) => {
                    tracing::warn!(%err, "invalid navigation command");
                    console.say("Invalid option or missing path. Try again.")?;
                    invalid_commands += 1;
                    arrived = false;
                }
            }
        };

        Ok(ExplorationSummary {
            path,
            invalid_commands,
            dropped_attributions,
            end,
        })
    }

    fn describe<C: Console>(&self, console: &mut C) -> io::Result<()> {
        if !self.rules.collect_clues {
            return Ok(());
        }
        let Some(clue) = self.current.clue() else {
            return console.say("No visible clues in this room.");
        };

        console.say(&format!("Clue in this room: \"{}\"", clue))?;
        if self.rules.attribute_suspects {
            match self.current.suspect() {
                Some(suspect) => console.say(&format!("This clue seems to point at: {}", suspect))?,
                None => console.say("This clue does not clearly point at any suspect.")?,
            }
        }
        Ok(())
    }

    fn list_exits<C: Console>(&self, console: &mut C) -> io::Result<()> {
        console.say("Available paths:")?;
        for (side, label) in [(Side::Left, "Left "), (Side::Right, "Right")] {
            if let Ok(next) = self.current.child(side) {
                console.say(&format!("  [{}] {} -> {}", Command::key(side), label, next.name()))?;
            }
        }
        console.say("  [s] Stop exploring")
    }
}

/// Next non-blank line of input, or `None` when the input is exhausted.
fn next_command<C: Console>(console: &mut C) -> io::Result<Option<String>> {
    loop {
        match console.ask(COMMAND_PROMPT)? {
            None => return Ok(None),
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => return Ok(Some(line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::mock_console::ScriptedConsole;

    fn room(name: &str, clue: Option<&str>, suspect: Option<&str>) -> Room {
        Room::new(name, clue, suspect).unwrap()
    }

    /// Hall -> (Sala -> (Biblioteca, -), Cozinha)
    fn small_mansion() -> RoomGraph {
        let mut sala = room("Sala", Some("Pegadas"), Some("Mordomo"));
        sala.attach_left(room("Biblioteca", Some("Livro"), Some("Cozinheira"))).unwrap();
        let mut hall = room("Hall", Some("Luvas"), Some("Mordomo"));
        hall.attach_left(sala).unwrap();
        hall.attach_right(room("Cozinha", None, None)).unwrap();
        RoomGraph::new(hall)
    }

    #[test]
    fn starts_at_the_entry() {
        let graph = small_mansion();
        let explorer = Explorer::new(&graph, Level::Mestre.rules());
        assert!(std::ptr::eq(explorer.current(), graph.entry()));
    }

    #[test]
    fn moving_toward_missing_child_keeps_position() {
        let graph = small_mansion();
        let mut explorer = Explorer::new(&graph, Level::Mestre.rules());
        explorer.handle("e").unwrap();
        explorer.handle("e").unwrap();
        let before = explorer.current();

        let err = explorer.handle("d").unwrap_err();
        assert!(matches!(err, NavigationError::Blocked(GraphError::NoSuchChild { .. })));
        assert!(std::ptr::eq(explorer.current(), before));
        assert_eq!(explorer.current().name(), "Biblioteca");
    }

    #[test]
    fn unknown_command_keeps_position() {
        let graph = small_mansion();
        let mut explorer = Explorer::new(&graph, Level::Mestre.rules());
        let err = explorer.handle("x").unwrap_err();
        assert!(matches!(err, NavigationError::Unknown(_)));
        assert_eq!(explorer.current().name(), "Hall");
    }

    #[test]
    fn only_visited_rooms_contribute_evidence() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["e", "s"]);

        let summary = Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.path, vec!["Hall", "Sala"]);
        assert_eq!(summary.end, ExplorationEnd::Stopped);
        assert_eq!(clues.traverse_in_order(), vec!["Luvas", "Pegadas"]);
        assert!(!clues.contains("Livro"));
        assert_eq!(suspects.lookup("Livro"), None);
        assert_eq!(suspects.lookup("Pegadas"), Some("Mordomo"));
    }

    #[test]
    fn invalid_command_reports_and_continues() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["d", "d", "x", "s"]);

        let summary = Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        // second "d" is at Cozinha, which has no right child
        assert_eq!(summary.path, vec!["Hall", "Cozinha"]);
        assert_eq!(summary.invalid_commands, 2);
        assert_eq!(console.count_printed("Invalid option or missing path"), 2);
        assert_eq!(console.count_printed("You are in: Cozinha"), 3);
        assert!(console.printed("No visible clues in this room."));
    }

    #[test]
    fn explicit_stop_rule_does_not_end_at_dead_ends() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["d", "s"]);

        let summary = Explorer::new(&graph, Level::Aventureiro.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.end, ExplorationEnd::Stopped);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn dead_end_rule_ends_at_a_leaf() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["d", "s"]);

        let summary = Explorer::new(&graph, Level::Novato.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.end, ExplorationEnd::DeadEnd);
        assert_eq!(summary.path, vec!["Hall", "Cozinha"]);
        assert_eq!(console.remaining_inputs(), 1);
        assert!(clues.is_empty());
        assert!(console.printed("Exploration over."));
    }

    #[test]
    fn aventureiro_indexes_clues_without_suspects() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["e", "s"]);

        Explorer::new(&graph, Level::Aventureiro.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(clues.len(), 2);
        assert!(suspects.is_empty());
        assert!(!console.printed("seems to point at"));
    }

    #[test]
    fn closed_input_ends_exploration() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        let mut console = ScriptedConsole::new(["", "  ", "e"]);

        let summary = Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.end, ExplorationEnd::InputClosed);
        assert_eq!(summary.path, vec!["Hall", "Sala"]);
        assert_eq!(summary.invalid_commands, 0);
    }

    #[test]
    fn full_table_keeps_clue_but_drops_attribution() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::with_capacity(1).unwrap();
        let mut console = ScriptedConsole::new(["e", "s"]);

        let summary = Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.dropped_attributions, 1);
        assert!(clues.contains("Pegadas"));
        assert_eq!(suspects.lookup("Luvas"), Some("Mordomo"));
        assert_eq!(suspects.lookup("Pegadas"), None);
        assert!(console.printed("Suspect table full!"));
    }

    #[test]
    fn retrying_in_a_full_table_room_loses_the_attribution_once() {
        let graph = small_mansion();
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::with_capacity(1).unwrap();
        let mut console = ScriptedConsole::new(["e", "x", "x", "s"]);

        let summary = Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut clues, &mut suspects, &mut console)
            .unwrap();

        assert_eq!(summary.invalid_commands, 2);
        assert_eq!(summary.dropped_attributions, 1);
        assert_eq!(console.count_printed("Suspect table full!"), 1);
        // the room and its clue are still shown on every retry
        assert_eq!(console.count_printed("Clue in this room: \"Pegadas\""), 3);
    }

    #[test]
    fn exits_are_listed_with_target_names() {
        let graph = small_mansion();
        let mut console = ScriptedConsole::new(["s"]);
        Explorer::new(&graph, Level::Mestre.rules())
            .run(&mut ClueIndex::new(), &mut SuspectMap::new(), &mut console)
            .unwrap();

        assert!(console.printed("[e] Left  -> Sala"));
        assert!(console.printed("[d] Right -> Cozinha"));
        assert!(console.printed("[s] Stop exploring"));
    }
}
