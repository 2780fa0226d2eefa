use std::fmt;

/// Difficulty level. Each level enables more of the evidence machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Walk the mansion only; exploration ends at the first dead end.
    Novato,
    /// Collect clues into the sorted index.
    Aventureiro,
    /// Collect clues and suspects, then accuse someone.
    #[default]
    Mestre,
}

/// When exploration ends on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Only an explicit stop command ends exploration.
    ExplicitStop,
    /// Arriving in a room without exits also ends it.
    DeadEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorationRules {
    pub termination: Termination,
    pub collect_clues: bool,
    pub attribute_suspects: bool,
}

impl Level {
    pub fn rules(self) -> ExplorationRules {
        match self {
            Level::Novato => ExplorationRules {
                termination: Termination::DeadEnd,
                collect_clues: false,
                attribute_suspects: false,
            },
            Level::Aventureiro => ExplorationRules {
                termination: Termination::ExplicitStop,
                collect_clues: true,
                attribute_suspects: false,
            },
            Level::Mestre => ExplorationRules {
                termination: Termination::ExplicitStop,
                collect_clues: true,
                attribute_suspects: true,
            },
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Novato => "Detective Quest - Mansion Exploration",
            Level::Aventureiro => "Detective Quest - Clue Collection",
            Level::Mestre => "Detective Quest - Master Level",
        }
    }

    pub fn has_verdict(self) -> bool {
        self == Level::Mestre
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Novato => "novato",
            Level::Aventureiro => "aventureiro",
            Level::Mestre => "mestre",
        };
        write!(f, "{}", name)
    }
}
