//! # Quadrant Core
//!
//! Core business logic and domain models for an Eisenhower Matrix todo
//! board.
//!
//! This crate provides the fundamental types and operations for triaging
//! short text todos across four priority quadrants plus an unassigned
//! staging list, without any dependency on specific UI implementations.
//! The view layer renders the board's per-quadrant lists and forwards
//! gestures (add, edit, delete, drag-and-drop) into the operations exposed
//! here.

pub mod domain;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::Board,
    drag::{DragSession, DropPosition},
    todo::{Quadrant, Todo, TodoId},
};
pub use error::{QuadrantError, Result};
pub use storage::Storage;
