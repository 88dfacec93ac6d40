//! Reversible edits.
//!
//! A command is plain data: the mutation to perform, the mutation that
//! undoes it, and two hints for the undo manager. Nothing in a command
//! refers back to the editor it came from except the editor id, so commands
//! can be stored, logged and replayed independently.

use annokit_core::{ParamKind, StyleParam};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::EditorEvent;
use crate::model::ShapeRecord;

/// A single state change an editor knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Mutation {
    /// Push a shape on top of the shape list.
    AppendShape(ShapeRecord),
    /// Pop the topmost shape. Emptying the list discards the editor.
    RemoveLastShape,
    /// Overwrite one style parameter.
    SetStyle(StyleParam),
}

/// Anything a [`Mutation`] can be applied to.
pub trait CommandTarget {
    fn apply(&mut self, mutation: &Mutation) -> Vec<EditorEvent>;
}

/// A mutation paired with its inverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditCommand {
    /// Editor the command belongs to.
    pub editor: Uuid,
    pub forward: Mutation,
    pub backward: Mutation,
    /// The manager must run `forward` as soon as it receives the command.
    pub must_apply_immediately: bool,
    /// Consecutive commands with the same key collapse into one undo step.
    pub merge_key: Option<ParamKind>,
}

impl EditCommand {
    /// Commits a drawn shape.
    pub fn append_shape(editor: Uuid, shape: ShapeRecord) -> Self {
        Self {
            editor,
            forward: Mutation::AppendShape(shape),
            backward: Mutation::RemoveLastShape,
            must_apply_immediately: true,
            merge_key: None,
        }
    }

    /// Changes one style parameter from `previous` to `next`.
    pub fn set_style(editor: Uuid, next: StyleParam, previous: StyleParam) -> Self {
        debug_assert_eq!(next.kind(), previous.kind());
        Self {
            editor,
            forward: Mutation::SetStyle(next),
            backward: Mutation::SetStyle(previous),
            must_apply_immediately: true,
            merge_key: Some(next.kind()),
        }
    }

    pub fn execute<T: CommandTarget + ?Sized>(&self, target: &mut T) -> Vec<EditorEvent> {
        target.apply(&self.forward)
    }

    pub fn revert<T: CommandTarget + ?Sized>(&self, target: &mut T) -> Vec<EditorEvent> {
        target.apply(&self.backward)
    }

    /// Whether `next` may be folded into `self`.
    pub fn can_merge_with(&self, next: &EditCommand) -> bool {
        self.editor == next.editor && self.merge_key.is_some() && self.merge_key == next.merge_key
    }

    /// Folds `next` into `self`: undo still restores the state from before
    /// `self`, redo lands on the state after `next`.
    pub fn merge(&mut self, next: EditCommand) {
        self.forward = next.forward;
        self.must_apply_immediately |= next.must_apply_immediately;
    }
}
