use crate::grid::{self, Cell, Direction};

/// Number of body cells behind the head that are exempt from self-collision
/// checks. On a one-cell-wide body those cells are geometrically adjacent to
/// the head and would register a false hit right after every turn. Tunable:
/// some builds of this game use 1 instead, which changes how soon a tight
/// turn can bite.
pub const SELF_COLLISION_EXEMPT: usize = 3;

/// The snake: an ordered sequence of cells, head first, plus the direction
/// bookkeeping for one tick of simulation.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body cells, head first. Length is always at least 1.
    pub body: Vec<Cell>,
    pub direction: Direction,
    /// Latest queued turn, applied and cleared once per tick. Reversals are
    /// rejected before they ever land here.
    pub pending: Option<Direction>,
    /// Cell vacated by the tail this tick, kept so the renderer can erase it.
    pub last_removed: Option<Cell>,
}

impl Snake {
    pub fn new(center: Cell) -> Self {
        Self {
            body: vec![center],
            direction: Direction::Right,
            pending: None,
            last_removed: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Queue a turn for the next tick. Turning straight back into the neck
    /// is a silent no-op; several presses within one tick collapse to the
    /// last accepted one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    /// Consume the queued turn, if any. Called exactly once per tick, before
    /// movement.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell in the current direction, wrapping at board edges.
    /// This always moves: the new head goes on the front of the body and the
    /// vacated tail cell is recorded in `last_removed`.
    pub fn step(&mut self, width: i32, height: i32) {
        let moved = self.head().moved(self.direction);
        let new_head = Cell::new(grid::wrap(moved.x, width), grid::wrap(moved.y, height));
        self.body.insert(0, new_head);
        self.last_removed = self.body.pop();
    }

    /// Undo this tick's tail removal, growing the body by one cell. Only
    /// meaningful immediately after [`step`](Self::step) on the tick the
    /// food was eaten; taking `last_removed` also means there is nothing
    /// left for the renderer to erase.
    pub fn grow(&mut self) {
        if let Some(cell) = self.last_removed.take() {
            self.body.push(cell);
        }
    }

    /// True when the head has run into the body. The first
    /// [`SELF_COLLISION_EXEMPT`] cells behind the head cannot be genuine
    /// hits and are skipped.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(SELF_COLLISION_EXEMPT)
            .any(|&cell| cell == head)
    }

    /// Restore the starting shape: a single cell at `center`, moving right,
    /// with all per-tick bookkeeping cleared.
    pub fn reset(&mut self, center: Cell) {
        self.body = vec![center];
        self.direction = Direction::Right;
        self.pending = None;
        self.last_removed = None;
    }
}
