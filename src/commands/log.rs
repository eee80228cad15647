//! Bounded command history.

use tracing::trace;

use crate::cards::CardPool;
use crate::view::CardAnimator;

use super::command::Command;

/// Default number of commands remembered.
pub const DEFAULT_HISTORY: usize = 100;

/// Circular log of executed commands.
///
/// Once full, each new command overwrites the oldest one, so undo depth is
/// bounded by the capacity.
#[derive(Clone, Debug)]
pub struct CommandLog {
    entries: Vec<Option<Command>>,
    /// Slot the next command is written to.
    cursor: usize,
    /// Undoable entries behind the cursor.
    len: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY)
    }
}

impl CommandLog {
    /// Create a log holding at most `capacity` commands (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
            cursor: 0,
            len: 0,
        }
    }

    /// Execute a command and record it.
    pub fn execute(
        &mut self,
        command: Command,
        cards: &mut CardPool,
        animator: &mut dyn CardAnimator,
    ) {
        command.execute(cards, animator);
        trace!(?command, slot = self.cursor, "command executed");

        self.entries[self.cursor] = Some(command);
        self.cursor = (self.cursor + 1) % self.entries.len();
        self.len = (self.len + 1).min(self.entries.len());
    }

    /// Undo the most recent command still in history.
    ///
    /// Returns the undone command, or `None` if history is empty.
    pub fn undo_last(
        &mut self,
        cards: &mut CardPool,
        animator: &mut dyn CardAnimator,
    ) -> Option<Command> {
        if self.len == 0 {
            return None;
        }
        self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        self.len -= 1;

        let command = self.entries[self.cursor].take()?;
        command.undo(cards, animator);
        trace!(?command, slot = self.cursor, "command undone");
        Some(command)
    }

    /// The command `undo_last` would reverse.
    #[must_use]
    pub fn last(&self) -> Option<&Command> {
        if self.len == 0 {
            return None;
        }
        let slot = (self.cursor + self.entries.len() - 1) % self.entries.len();
        self.entries[slot].as_ref()
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
        self.cursor = 0;
        self.len = 0;
    }

    /// Number of undoable commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}
