use crate::domain::drag::{DragSession, DropPosition};
use crate::domain::todo::{Quadrant, Todo, TodoId};
use serde::{Deserialize, Serialize};

/// The board state engine.
///
/// All todos live in one flat ordered list; the display order of a quadrant
/// is the list order restricted to items with that quadrant. Cross-quadrant
/// interleaving in the flat list carries no meaning, so operations are free
/// to regroup it as long as same-quadrant relative order survives.
///
/// Every operation either mutates and reports it, or silently no-ops:
/// missing ids, self-drops and whitespace-only text never surface errors.
/// The return values tell a persisting caller whether a write is due.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    todos: Vec<Todo>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from already-ordered todos, e.g. a persisted list
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// The fixed sample list used when nothing was persisted yet
    pub fn seed() -> Self {
        Self {
            todos: vec![
                Todo::in_quadrant("Design the page layout", Quadrant::UrgentImportant),
                Todo::in_quadrant("Draft the quarterly report", Quadrant::NotUrgentImportant),
                Todo::in_quadrant("Reply to emails", Quadrant::UrgentNotImportant),
                Todo::in_quadrant("Browse social media", Quadrant::NotUrgentNotImportant),
                Todo::in_quadrant("Buy groceries", Quadrant::Unassigned),
                Todo::in_quadrant("Learn keyboard shortcuts", Quadrant::Unassigned),
            ],
        }
    }

    /// All todos in flat list order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos of one bucket, in that bucket's display order
    pub fn in_quadrant(&self, quadrant: Quadrant) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |t| t.quadrant == quadrant)
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Adds a new unassigned todo at the front of the list.
    ///
    /// Whitespace-only input is ignored and returns `None`; otherwise the
    /// trimmed text is stored and the new id returned.
    pub fn create(&mut self, text: &str) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let todo = Todo::new(text.to_string());
        let id = todo.id;
        self.todos.insert(0, todo);
        Some(id)
    }

    /// Replaces a todo's text in place; order and quadrant are untouched.
    ///
    /// No-op when the id is unknown or the trimmed text equals the current
    /// text. Rejecting empty edits is the caller's responsibility.
    pub fn edit(&mut self, id: TodoId, new_text: &str) -> bool {
        let new_text = new_text.trim();
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) if todo.text != new_text => {
                todo.set_text(new_text.to_string());
                true
            }
            _ => false,
        }
    }

    /// Removes a todo; absent ids are silently ignored.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Moves a todo to `target`, placed relative to `target_card` when one
    /// is hovered, and preserves the relative order of everything else.
    ///
    /// Placement:
    /// - no `target_card`, or a card that is not in the target quadrant
    ///   (stale hover from fast pointer movement) -> append to the quadrant;
    /// - otherwise insert before or after that card per `position`.
    ///
    /// Dropping a card onto itself and unknown dragged ids are no-ops.
    pub fn relocate(
        &mut self,
        dragged: TodoId,
        target: Quadrant,
        target_card: Option<TodoId>,
        position: Option<DropPosition>,
    ) -> bool {
        if target_card == Some(dragged) {
            return false;
        }

        let Some(index) = self.todos.iter().position(|t| t.id == dragged) else {
            return false;
        };

        let mut moved = self.todos.remove(index);
        moved.quadrant = target;
        moved.updated_at = Some(chrono::Utc::now());

        // Split the remainder into the target quadrant's run and everything
        // else, each keeping its existing relative order.
        let (mut in_target, others): (Vec<Todo>, Vec<Todo>) =
            self.todos.drain(..).partition(|t| t.quadrant == target);

        let insert_at = target_card
            .and_then(|card| in_target.iter().position(|t| t.id == card))
            .map(|card_index| match position {
                Some(DropPosition::After) => card_index + 1,
                _ => card_index,
            })
            .unwrap_or(in_target.len());

        in_target.insert(insert_at, moved);

        // Flat order across quadrants is not meaningful, so regrouping the
        // list as others-then-target is safe.
        self.todos = others;
        self.todos.extend(in_target);
        true
    }

    /// Completes a drag gesture: relocates the dragged todo to whatever the
    /// session last hovered, then clears the session. The session is cleared
    /// on every path, no-ops included.
    pub fn drop_card(&mut self, session: &mut DragSession) -> bool {
        let moved = match session.dragging() {
            Some(dragged) => self.relocate(
                dragged,
                session.target_quadrant(),
                session.over_card(),
                session.over_position(),
            ),
            None => false,
        };
        session.clear();
        moved
    }
}
