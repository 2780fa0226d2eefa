use std::fmt;

use crate::text::{self, MAX_CLUE, MAX_ROOM_NAME, MAX_SUSPECT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("room name must not be empty")]
    EmptyName,
    #[error("room '{room}' already has a {side} child")]
    SideOccupied { room: String, side: Side },
    #[error("room '{room}' has no {side} child")]
    NoSuchChild { room: String, side: Side },
}

/// A location in the mansion.
///
/// Rooms own their children, so the whole mansion is a strict binary tree
/// hanging off the entry room.
#[derive(Debug)]
pub struct Room {
    name: String,
    clue: Option<String>,
    suspect: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Builds a childless room. Text longer than the per-field limits is
    /// truncated; a suspect without a clue is discarded.
    pub fn new(
        name: &str,
        clue: Option<&str>,
        suspect: Option<&str>,
    ) -> Result<Self, GraphError> {
        let name = text::bounded(name, MAX_ROOM_NAME);
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }

        let clue = text::bounded_optional(clue, MAX_CLUE);
        let suspect = match clue {
            Some(_) => text::bounded_optional(suspect, MAX_SUSPECT),
            None => {
                if suspect.is_some_and(|s| !s.is_empty()) {
                    tracing::debug!(
                        room = %name,
                        "dropping suspect attached to a room without a clue"
                    );
                }
                None
            }
        };

        Ok(Self {
            name,
            clue,
            suspect,
            left: None,
            right: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn suspect(&self) -> Option<&str> {
        self.suspect.as_deref()
    }

    pub fn attach_left(&mut self, child: Room) -> Result<(), GraphError> {
        self.attach(Side::Left, child)
    }

    pub fn attach_right(&mut self, child: Room) -> Result<(), GraphError> {
        self.attach(Side::Right, child)
    }

    /// Wires `child` under this room. Each side can be wired exactly once.
    pub fn attach(&mut self, side: Side, child: Room) -> Result<(), GraphError> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if slot.is_some() {
            return Err(GraphError::SideOccupied {
                room: self.name.clone(),
                side,
            });
        }
        *slot = Some(Box::new(child));
        Ok(())
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn is_dead_end(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    pub fn left(&self) -> Result<&Room, GraphError> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Result<&Room, GraphError> {
        self.child(Side::Right)
    }

    pub fn child(&self, side: Side) -> Result<&Room, GraphError> {
        let child = match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        };
        child.ok_or_else(|| GraphError::NoSuchChild {
            room: self.name.clone(),
            side,
        })
    }
}

impl Drop for Room {
    // Post-order teardown with an explicit stack, so a degenerate (list-like)
    // mansion never overflows the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Room>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut room) = pending.pop() {
            pending.extend(room.left.take());
            pending.extend(room.right.take());
        }
    }
}

/// The mansion: an immutable tree of rooms rooted at the entry room.
#[derive(Debug)]
pub struct RoomGraph {
    entry: Room,
}

impl RoomGraph {
    pub fn new(entry: Room) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &Room {
        &self.entry
    }

    /// Rooms in pre-order (entry first, then left subtree, then right).
    pub fn rooms(&self) -> Vec<&Room> {
        let mut out = Vec::new();
        let mut stack = vec![&self.entry];
        while let Some(room) = stack.pop() {
            out.push(room);
            // right pushed first so the left subtree comes out first
            if let Some(right) = room.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = room.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    pub fn room_count(&self) -> usize {
        self.rooms().len()
    }
}
