use serde::Serialize;

use super::grid::GridCell;
use crate::{Cost, Error};

/// One candidate step of a path: a grid cell together with the exact
/// cost accumulated to reach it and the estimated cost of the whole
/// route through it.
///
/// Waypoints are immutable once built. The frontier only reads the
/// cost fields for comparison and keys on the cell; it never creates
/// or alters them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    cell: GridCell,
    previous_cost: Cost,
    total_cost: Cost,
}

impl Waypoint {
    /// Build a waypoint. Costs must be finite; a NaN or infinite cost
    /// is rejected as an invalid argument since every later ordering
    /// decision compares these fields with `<`.
    pub fn new(cell: GridCell, previous_cost: Cost, total_cost: Cost) -> Result<Self, Error> {
        if !previous_cost.is_finite() || !total_cost.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "waypoint costs must be finite, got previous={previous_cost} total={total_cost}"
            )));
        }
        Ok(Waypoint {
            cell,
            previous_cost,
            total_cost,
        })
    }

    pub fn cell(&self) -> GridCell {
        self.cell
    }

    /// Exact cost accumulated from the start to this cell
    pub fn previous_cost(&self) -> Cost {
        self.previous_cost
    }

    /// `previous_cost` plus the heuristic estimate to the goal; the
    /// priority key of the search
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}
