/// Capacity used by the game. Prime, to spread the linear probe sequences.
pub const DEFAULT_CAPACITY: usize = 23;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("suspect table capacity must be at least 1")]
    ZeroCapacity,
    #[error("suspect table is full ({capacity} slots); dropped clue '{clue}'")]
    TableFull { capacity: usize, clue: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The clue took a free slot.
    Inserted,
    /// The clue was already present; its suspect was replaced.
    Updated,
    /// Empty clue, nothing stored.
    Skipped,
}

#[derive(Debug, Clone)]
struct Entry {
    clue: String,
    suspect: String,
}

/// Fixed-capacity open-addressing table from clue text to suspect name.
///
/// Collisions are resolved by linear probing. Entries are never removed, so
/// a lookup may stop at the first empty slot of its probe sequence; adding
/// removal would require tombstones. The table never grows: once every
/// slot is taken, inserting a new clue fails with [`MapError::TableFull`].
#[derive(Debug, Clone)]
pub struct SuspectMap {
    slots: Vec<Option<Entry>>,
    len: usize,
}

impl SuspectMap {
    pub fn new() -> Self {
        // DEFAULT_CAPACITY is non-zero
        Self {
            slots: vec![None; DEFAULT_CAPACITY],
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        if capacity == 0 {
            return Err(MapError::ZeroCapacity);
        }
        if !is_prime(capacity) {
            tracing::warn!(
                capacity,
                "suspect table capacity is not prime; probe clustering may increase"
            );
        }
        Ok(Self {
            slots: vec![None; capacity],
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Polynomial string hash (`h = h * 31 + byte`) over the UTF-8 bytes of
    /// `key`, in 32-bit wrapping arithmetic, reduced modulo the capacity.
    pub fn hash(&self, key: &str) -> usize {
        let h = key
            .bytes()
            .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
        h as usize % self.capacity()
    }

    /// Slot indices visited when probing for `key`: the home slot, then each
    /// following slot once, wrapping around the end of the table.
    fn probe(&self, key: &str) -> impl Iterator<Item = usize> + use<> {
        let capacity = self.capacity();
        let start = self.hash(key);
        (0..capacity).map(move |step| (start + step) % capacity)
    }

    /// Records `suspect` for `clue`, replacing any suspect already stored
    /// under the same clue.
    pub fn insert(&mut self, clue: &str, suspect: &str) -> Result<InsertOutcome, MapError> {
        if clue.is_empty() {
            return Ok(InsertOutcome::Skipped);
        }

        for idx in self.probe(clue) {
            let slot = &mut self.slots[idx];
            match slot {
                Some(entry) if entry.clue == clue => {
                    if entry.suspect != suspect {
                        tracing::debug!(
                            clue,
                            from = %entry.suspect,
                            to = suspect,
                            "reattributing clue"
                        );
                    }
                    entry.suspect = suspect.to_string();
                    return Ok(InsertOutcome::Updated);
                }
                Some(_) => continue,
                None => {
                    *slot = Some(Entry {
                        clue: clue.to_string(),
                        suspect: suspect.to_string(),
                    });
                    self.len += 1;
                    tracing::debug!(clue, suspect, slot = idx, "suspect recorded");
                    return Ok(InsertOutcome::Inserted);
                }
            }
        }

        Err(MapError::TableFull {
            capacity: self.capacity(),
            clue: clue.to_string(),
        })
    }

    /// Suspect stored under `clue`, if any.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        if clue.is_empty() {
            return None;
        }

        for idx in self.probe(clue) {
            match &self.slots[idx] {
                Some(entry) if entry.clue == clue => return Some(entry.suspect.as_str()),
                Some(_) => continue,
                None => return None,
            }
        }
        None
    }
}

impl Default for SuspectMap {
    fn default() -> Self {
        Self::new()
    }
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
