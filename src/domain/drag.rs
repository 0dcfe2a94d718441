use crate::domain::todo::{Quadrant, TodoId};

/// Drop point relative to a hovered card's vertical midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// Derives the position from pointer geometry supplied by the view:
    /// `offset_y` is the pointer's distance from the card's top edge.
    pub fn from_pointer(offset_y: f64, card_height: f64) -> Self {
        if offset_y < card_height / 2.0 {
            Self::Before
        } else {
            Self::After
        }
    }
}

/// Transient drag/hover state for one gesture. Never persisted.
///
/// The view feeds pointer events in; [`crate::Board::drop_card`] reads the
/// resolved target out and clears the session when the gesture ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    dragging: Option<TodoId>,
    over_zone: Option<Quadrant>,
    over_card: Option<TodoId>,
    over_position: Option<DropPosition>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a card as picked up
    pub fn begin(&mut self, id: TodoId) {
        self.dragging = Some(id);
    }

    /// Pointer entered a zone's general area (not over a card). Any card
    /// hover belongs to the previous zone and is dropped.
    pub fn hover_zone(&mut self, zone: Quadrant) {
        if self.over_zone != Some(zone) {
            self.over_zone = Some(zone);
            self.over_card = None;
            self.over_position = None;
        }
    }

    /// Pointer is over a card. The active zone follows the card's own
    /// quadrant so highlighting tracks the nearest card rather than a stale
    /// parent zone.
    pub fn hover_card(&mut self, card: TodoId, card_quadrant: Quadrant, position: DropPosition) {
        self.over_card = Some(card);
        self.over_position = Some(position);
        self.over_zone = Some(card_quadrant);
    }

    /// Pointer left a card; the zone hover is kept to avoid flicker while
    /// moving between cards in the same quadrant.
    pub fn leave_card(&mut self) {
        self.over_card = None;
        self.over_position = None;
    }

    /// Gesture ended (drop or abort): forget everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn dragging(&self) -> Option<TodoId> {
        self.dragging
    }

    pub fn over_zone(&self) -> Option<Quadrant> {
        self.over_zone
    }

    pub fn over_card(&self) -> Option<TodoId> {
        self.over_card
    }

    pub fn over_position(&self) -> Option<DropPosition> {
        self.over_position
    }

    /// Destination quadrant for a drop: last hovered zone, or the staging
    /// list when nothing resolved.
    pub fn target_quadrant(&self) -> Quadrant {
        self.over_zone.unwrap_or(Quadrant::Unassigned)
    }
}
