//! Placement state for the village builder.
//! Tracks the building the player has picked and whether placement mode is on.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::catalog::BuildingDefinition;

/// Building currently selected for placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingToPlace {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&BuildingDefinition> for BuildingToPlace {
    fn from(def: &BuildingDefinition) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            icon: def.icon.to_string(),
            kind: "building".to_string(),
        }
    }
}

/// `placement_mode` is true exactly when `building_to_place` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementState {
    building_to_place: Option<BuildingToPlace>,
    placement_mode: bool,
}

impl PlacementState {
    pub fn building_to_place(&self) -> Option<&BuildingToPlace> {
        self.building_to_place.as_ref()
    }

    pub fn placement_mode(&self) -> bool {
        self.placement_mode
    }

    /// Enter placement mode. The building is not checked against the catalog.
    pub fn start_building_placement(&mut self, building: BuildingToPlace) {
        log::info!("placement started: {} ({})", building.name, building.id);
        self.building_to_place = Some(building);
        self.placement_mode = true;
    }

    pub fn cancel_building_placement(&mut self) {
        if let Some(b) = &self.building_to_place {
            log::info!("placement cancelled: {}", b.id);
        }
        self.clear();
    }

    /// Same resulting state as cancel; only the logged intent differs.
    pub fn complete_building_placement(&mut self) {
        if let Some(b) = &self.building_to_place {
            log::info!("placement completed: {}", b.id);
        }
        self.clear();
    }

    fn clear(&mut self) {
        self.building_to_place = None;
        self.placement_mode = false;
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PlacementAction {
    Start(BuildingToPlace),
    Cancel,
    Complete,
}

impl Reducible for PlacementState {
    type Action = PlacementAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlacementAction::*;
        // Clearing an idle state changes nothing; keep the same Rc so views don't rerender.
        if matches!(action, Cancel | Complete) && !self.placement_mode {
            log::debug!("placement already inactive");
            return self;
        }
        let mut new = (*self).clone();
        match action {
            Start(building) => new.start_building_placement(building),
            Cancel => new.cancel_building_placement(),
            Complete => new.complete_building_placement(),
        }
        Rc::new(new)
    }
}
