use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::model::{GridCell, GridMap, Waypoint};

/// Open/closed waypoint bookkeeping for one A* run over a grid
///
/// The tracker owns two disjoint cell-keyed sets: `open` holds cells
/// discovered but not yet evaluated, with at most one waypoint per
/// cell (always the cheapest seen so far), and `closed` holds cells
/// that have been fully evaluated and are final for the run. One
/// instance serves exactly one search; build a fresh one per run and
/// discard it afterwards.
#[derive(Debug)]
pub struct Frontier {
    open: HashMap<GridCell, Waypoint>,
    closed: HashMap<GridCell, Waypoint>,
    map: Arc<GridMap>,
}

impl Frontier {
    pub fn new(map: Arc<GridMap>) -> Self {
        Frontier {
            open: HashMap::new(),
            closed: HashMap::new(),
            map,
        }
    }

    /// The map this search runs over. Held for the driver's benefit;
    /// the tracker itself never queries it.
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Number of cells currently open
    pub fn num_open_waypoints(&self) -> usize {
        self.open.len()
    }

    /// Offer a candidate waypoint to the open set
    ///
    /// A cell not yet open is inserted as-is. A cell already open is
    /// replaced only when the candidate reaches it strictly cheaper
    /// (by `previous_cost`); on a tie the incumbent stays and the
    /// candidate is dropped. The closed set is not consulted here -
    /// keeping already-closed cells out of the open set is the
    /// driver's job.
    pub fn add_open_waypoint(&mut self, candidate: Waypoint) {
        match self.open.entry(candidate.cell()) {
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
            Entry::Occupied(mut entry) => {
                if candidate.previous_cost() < entry.get().previous_cost() {
                    log::trace!(
                        "cheaper path to {:?}: {} -> {}",
                        candidate.cell(),
                        entry.get().previous_cost(),
                        candidate.previous_cost()
                    );
                    entry.insert(candidate);
                }
            }
        }
    }

    /// The open waypoint with the lowest `total_cost`, or `None` when
    /// nothing is open
    ///
    /// Read-only peek: consuming the result is a separate
    /// `close_waypoint` call. Linear scan with strict `<`, so the
    /// first minimum encountered wins ties; callers must not rely on
    /// which of several equal-cost waypoints that is.
    pub fn min_open_waypoint(&self) -> Option<&Waypoint> {
        self.open.values().reduce(|best, candidate| {
            if candidate.total_cost() < best.total_cost() {
                candidate
            } else {
                best
            }
        })
    }

    /// Retire the open entry at `cell` into the closed set
    ///
    /// The sole open-to-closed transition; there is no reverse. A
    /// cell with no open entry is left alone, so closing twice or
    /// closing a never-seen cell is a no-op.
    pub fn close_waypoint(&mut self, cell: GridCell) {
        if let Some(waypoint) = self.open.remove(&cell) {
            log::trace!("closing {:?} at total cost {}", cell, waypoint.total_cost());
            self.closed.insert(cell, waypoint);
        }
    }

    /// Whether `cell` has been fully evaluated. Consults the closed
    /// set only.
    pub fn is_location_closed(&self, cell: GridCell) -> bool {
        self.closed.contains_key(&cell)
    }
}
