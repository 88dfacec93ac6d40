//! A bounded undo/redo manager for [`EditCommand`]s.
//!
//! Editors do not depend on this type; it is one possible undo manager, used
//! by hosts that have none of their own and by the tests.

use std::collections::VecDeque;

use annokit_core::constants::DEFAULT_HISTORY_LIMIT;
use annokit_settings::EditorConfig;

use crate::commands::{CommandTarget, EditCommand};
use crate::events::EditorEvent;

#[derive(Debug, Clone)]
pub struct CommandHistory {
    undo_stack: VecDeque<EditCommand>,
    redo_stack: Vec<EditCommand>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.history_limit)
    }

    /// Records `command`, running it first when it asks to be applied
    /// immediately. A command sharing the merge key of the previous one
    /// replaces that step instead of adding a new one.
    pub fn add<T: CommandTarget + ?Sized>(
        &mut self,
        command: EditCommand,
        target: &mut T,
    ) -> Vec<EditorEvent> {
        let events = if command.must_apply_immediately {
            command.execute(target)
        } else {
            Vec::new()
        };
        self.redo_stack.clear();

        if let Some(last) = self.undo_stack.back_mut() {
            if last.can_merge_with(&command) {
                tracing::trace!(key = ?command.merge_key, "Merged command into previous step");
                last.merge(command);
                return events;
            }
        }

        self.undo_stack.push_back(command);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        events
    }

    pub fn undo<T: CommandTarget + ?Sized>(&mut self, target: &mut T) -> Vec<EditorEvent> {
        let Some(command) = self.undo_stack.pop_back() else {
            return Vec::new();
        };
        let events = command.revert(target);
        self.redo_stack.push(command);
        events
    }

    pub fn redo<T: CommandTarget + ?Sized>(&mut self, target: &mut T) -> Vec<EditorEvent> {
        let Some(command) = self.redo_stack.pop() else {
            return Vec::new();
        };
        let events = command.execute(target);
        self.undo_stack.push_back(command);
        events
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Total number of recorded steps.
    pub fn len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
