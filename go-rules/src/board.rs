use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::error::GoError;
use crate::group::{Group, GroupId};
use crate::player::Player;
use crate::point::Point;

/// The board: a grid of group ids over an arena of groups.
///
/// Every stone's cell holds the id of the group it belongs to, so all
/// stones of a chain resolve to one `Group` value and liberties are
/// maintained incrementally instead of recounted by flood fill. Arena
/// slots are tombstoned when a group is merged away or captured, never
/// reused.
#[derive(Debug, Clone)]
pub struct Board {
    num_rows: i32,
    num_cols: i32,
    grid: Vec<Option<GroupId>>,
    groups: Vec<Option<Group>>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(num_rows: i32, num_cols: i32) -> Self {
        assert!(
            num_rows > 0 && num_cols > 0,
            "board dimensions must be positive"
        );

        Board {
            num_rows,
            num_cols,
            grid: vec![None; (num_rows * num_cols) as usize],
            groups: Vec::new(),
        }
    }

    /// Create an empty square board.
    pub fn with_size(size: i32) -> Self {
        Board::new(size, size)
    }

    // -- Accessors --

    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    pub fn num_cols(&self) -> i32 {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(|cell| cell.is_none())
    }

    /// Whether the point lies within the grid. Rows and columns are
    /// 1-indexed.
    pub fn is_on_grid(&self, point: Point) -> bool {
        1 <= point.row
            && point.row <= self.num_rows
            && 1 <= point.col
            && point.col <= self.num_cols
    }

    /// The color of the stone at `point`, or `None` for an empty point.
    /// Off-grid points also answer `None`; use `is_on_grid` to tell the
    /// cases apart.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.get_group(point).map(|group| group.color())
    }

    /// The whole group the stone at `point` belongs to, or `None` when
    /// the point is empty or off the grid.
    pub fn get_group(&self, point: Point) -> Option<&Group> {
        if !self.is_on_grid(point) {
            return None;
        }
        let id = self.grid[self.idx(point)]?;
        Some(self.group(id))
    }

    /// The 4-connected neighbors that are on the grid.
    pub fn on_grid_neighbors(&self, point: Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        for neighbor in point.neighbors() {
            if self.is_on_grid(neighbor) {
                result.push(neighbor);
            }
        }
        result
    }

    // -- Game actions --

    /// Place a stone, merge it with adjacent friendly groups, and remove
    /// any opposing groups left without liberties.
    ///
    /// Only the placement preconditions are checked here: the point must
    /// be on the grid and unoccupied. Whole-game legality (self-capture,
    /// ko) belongs to `GameState`. A self-capturing placement leaves the
    /// new group on the board with zero liberties.
    pub fn place_stone(&mut self, player: Player, point: Point) -> Result<(), GoError> {
        if !self.is_on_grid(point) {
            return Err(GoError::NotOnGrid);
        }
        if self.grid[self.idx(point)].is_some() {
            return Err(GoError::Occupied);
        }

        // Partition the neighbors: empty points become liberties of the
        // new stone; occupied ones sort into distinct friendly and
        // opposing groups.
        let mut liberties: ArrayVec<Point, 4> = ArrayVec::new();
        let mut same_color: ArrayVec<GroupId, 4> = ArrayVec::new();
        let mut other_color: ArrayVec<GroupId, 4> = ArrayVec::new();

        for neighbor in self.on_grid_neighbors(point) {
            match self.grid[self.idx(neighbor)] {
                None => liberties.push(neighbor),
                Some(id) => {
                    let bucket = if self.group(id).color() == player {
                        &mut same_color
                    } else {
                        &mut other_color
                    };
                    if !bucket.contains(&id) {
                        bucket.push(id);
                    }
                }
            }
        }

        // Merge the new stone with every adjacent friendly group,
        // tombstoning the absorbed slots.
        let mut merged = Group::new(player, [point], liberties);
        for &id in &same_color {
            let absorbed = self.groups[id].take().expect("grid points at a live group");
            merged = merged.merged_with(&absorbed);
        }

        let merged_id = self.groups.len();
        for &stone in merged.stones() {
            let i = self.idx(stone);
            self.grid[i] = Some(merged_id);
        }
        self.groups.push(Some(merged));

        // The new stone takes a liberty from each adjacent opposing
        // group; any group left with none is captured.
        for &id in &other_color {
            self.group_mut(id).remove_liberty(point);
        }
        for &id in &other_color {
            if self.group(id).num_liberties() == 0 {
                self.remove_group(id);
            }
        }

        Ok(())
    }

    /// Remove a captured group: tombstone its slot, clear its cells, and
    /// hand each vacated point back as a liberty to every other adjacent
    /// group.
    fn remove_group(&mut self, id: GroupId) {
        let removed = self.groups[id].take().expect("captured group is live");
        tracing::debug!(
            "captured {} {} stone(s)",
            removed.stones().len(),
            removed.color()
        );

        for &stone in removed.stones() {
            for neighbor in self.on_grid_neighbors(stone) {
                if let Some(nid) = self.grid[self.idx(neighbor)] {
                    if nid != id {
                        self.group_mut(nid).add_liberty(stone);
                    }
                }
            }
            let i = self.idx(stone);
            self.grid[i] = None;
        }
    }

    // -- Position identity --

    /// Hash of the position: dimensions plus the color at every cell.
    /// Not collision-free, so pair a hash match with full equality.
    pub fn position_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.num_rows.hash(&mut hasher);
        self.num_cols.hash(&mut hasher);
        for i in 0..self.grid.len() {
            self.color_at(i).hash(&mut hasher);
        }
        hasher.finish()
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, point: Point) -> usize {
        ((point.row - 1) * self.num_cols + (point.col - 1)) as usize
    }

    fn color_at(&self, i: usize) -> Option<Player> {
        self.grid[i].map(|id| self.group(id).color())
    }

    fn group(&self, id: GroupId) -> &Group {
        self.groups[id].as_ref().expect("grid points at a live group")
    }

    fn group_mut(&mut self, id: GroupId) -> &mut Group {
        self.groups[id].as_mut().expect("grid points at a live group")
    }
}

impl PartialEq for Board {
    /// Boards compare by position: same dimensions, same color (or
    /// absence) at every cell. Group ids are bookkeeping and differ
    /// between boards that reached the same position along different
    /// move orders.
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && (0..self.grid.len()).all(|i| self.color_at(i) == other.color_at(i))
    }
}

impl Eq for Board {}
