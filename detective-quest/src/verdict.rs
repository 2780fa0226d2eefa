use std::fmt;

use crate::clue_index::ClueIndex;
use crate::suspect_map::SuspectMap;

/// Matching clues needed for an accusation to stand.
pub const SUSTAIN_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Sustained,
    Inconclusive,
    InsufficientEvidence,
}

impl Verdict {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Verdict::InsufficientEvidence,
            n if n < SUSTAIN_THRESHOLD => Verdict::Inconclusive,
            _ => Verdict::Sustained,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Sustained => "ACCUSATION SUSTAINED",
            Verdict::Inconclusive => "INCONCLUSIVE",
            Verdict::InsufficientEvidence => "INSUFFICIENT EVIDENCE",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerdictError {
    #[error("no suspect was named")]
    EmptyAccusation,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VerdictReport {
    /// `None` when no clue was collected and nobody had to be accused.
    pub accused: Option<String>,
    /// Every collected clue, sorted.
    pub clues: Vec<String>,
    /// The clues attributed to the accused, sorted.
    pub matching: Vec<String>,
    pub count: usize,
    pub verdict: Verdict,
}

impl VerdictReport {
    /// Outcome when nothing was collected.
    pub fn without_evidence() -> Self {
        Self {
            accused: None,
            clues: Vec::new(),
            matching: Vec::new(),
            count: 0,
            verdict: Verdict::InsufficientEvidence,
        }
    }
}

/// Tallies the collected clues that point at `accused`.
///
/// Clues are walked in sorted order and resolved through the suspect
/// table; a clue counts when its suspect equals `accused` exactly
/// (case-sensitive). With an empty index the zero-evidence outcome is
/// returned without looking at `accused`.
pub fn evaluate(
    accused: &str,
    clues: &ClueIndex,
    suspects: &SuspectMap,
) -> Result<VerdictReport, VerdictError> {
    if clues.is_empty() {
        return Ok(VerdictReport::without_evidence());
    }
    if accused.is_empty() {
        return Err(VerdictError::EmptyAccusation);
    }

    let mut all = Vec::with_capacity(clues.len());
    let mut matching = Vec::new();
    for clue in clues {
        if suspects.lookup(clue) == Some(accused) {
            matching.push(clue.to_string());
        }
        all.push(clue.to_string());
    }

    let count = matching.len();
    let verdict = Verdict::from_count(count);
    tracing::info!(accused, count, %verdict, "verdict reached");

    Ok(VerdictReport {
        accused: Some(accused.to_string()),
        clues: all,
        matching,
        count,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(pairs: &[(&str, Option<&str>)]) -> (ClueIndex, SuspectMap) {
        let mut clues = ClueIndex::new();
        let mut suspects = SuspectMap::new();
        for (clue, suspect) in pairs {
            clues.insert(clue);
            if let Some(suspect) = suspect {
                suspects.insert(clue, suspect).unwrap();
            }
        }
        (clues, suspects)
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(Verdict::from_count(0), Verdict::InsufficientEvidence);
        assert_eq!(Verdict::from_count(1), Verdict::Inconclusive);
        assert_eq!(Verdict::from_count(2), Verdict::Sustained);
        assert_eq!(Verdict::from_count(7), Verdict::Sustained);
    }

    #[test]
    fn tally_counts_only_exact_matches() {
        let (clues, suspects) = evidence(&[
            ("Luvas", Some("Mordomo")),
            ("Pegadas", Some("Mordomo")),
            ("Livro", Some("Cozinheira")),
            ("Poeira", None),
        ]);

        let report = evaluate("Mordomo", &clues, &suspects).unwrap();
        assert_eq!(report.count, 2);
        assert_eq!(report.verdict, Verdict::Sustained);
        assert_eq!(report.matching, vec!["Luvas", "Pegadas"]);
        assert_eq!(report.clues, vec!["Livro", "Luvas", "Pegadas", "Poeira"]);

        let report = evaluate("mordomo", &clues, &suspects).unwrap();
        assert_eq!(report.count, 0);
        assert_eq!(report.verdict, Verdict::InsufficientEvidence);
    }

    #[test]
    fn single_match_is_inconclusive() {
        let (clues, suspects) =
            evidence(&[("Livro", Some("Cozinheira")), ("Luvas", Some("Mordomo"))]);
        let report = evaluate("Cozinheira", &clues, &suspects).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.verdict, Verdict::Inconclusive);
    }

    #[test]
    fn empty_accusation_is_refused() {
        let (clues, suspects) = evidence(&[("Luvas", Some("Mordomo"))]);
        assert_eq!(evaluate("", &clues, &suspects).unwrap_err(), VerdictError::EmptyAccusation);
    }

    #[test]
    fn no_clues_needs_no_accusation() {
        let clues = ClueIndex::new();
        let suspects = SuspectMap::new();
        let report = evaluate("", &clues, &suspects).unwrap();
        assert_eq!(report, VerdictReport::without_evidence());
        assert_eq!(report.accused, None);
    }
}
