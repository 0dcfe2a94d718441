pub mod board;
pub mod drag;
pub mod todo;

pub use board::Board;
pub use drag::{DragSession, DropPosition};
pub use todo::{Quadrant, Todo, TodoId};
