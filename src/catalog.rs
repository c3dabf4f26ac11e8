// Fixed building catalog: display metadata and costs for every placeable building.
// Kept free of crate-internal imports so host tests can include it directly.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingSize {
    Xs,
    Sm,
    Md,
    Lg,
}

impl BuildingSize {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingSize::Xs => "xs",
            BuildingSize::Sm => "sm",
            BuildingSize::Md => "md",
            BuildingSize::Lg => "lg",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "xs" => Some(BuildingSize::Xs),
            "sm" => Some(BuildingSize::Sm),
            "md" => Some(BuildingSize::Md),
            "lg" => Some(BuildingSize::Lg),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BuildingCost {
    pub wood: u32,
    pub stone: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Emoji glyph, or an asset path when `is_image` is set.
    pub icon: &'static str,
    pub is_image: bool,
    pub description: &'static str,
    pub cost: BuildingCost,
    pub size: BuildingSize,
}

static BUILDINGS: [BuildingDefinition; 5] = [
    BuildingDefinition {
        id: "beehive",
        name: "Beehive",
        icon: "assets/buildings/beehive.png",
        is_image: true,
        description: "Bees gather honey from nearby flowers.",
        cost: BuildingCost { wood: 15, stone: 0 },
        size: BuildingSize::Xs,
    },
    BuildingDefinition {
        id: "berry_farm",
        name: "Berry Farm",
        icon: "🫐",
        is_image: false,
        description: "Rows of bushes that keep the village fed.",
        cost: BuildingCost { wood: 10, stone: 0 },
        size: BuildingSize::Md,
    },
    BuildingDefinition {
        id: "den",
        name: "Bear Den",
        icon: "🏠",
        is_image: false,
        description: "A cosy home for a family of bears.",
        cost: BuildingCost { wood: 25, stone: 10 },
        size: BuildingSize::Md,
    },
    BuildingDefinition {
        id: "lumber_mill",
        name: "Lumber Mill",
        icon: "🪓",
        is_image: false,
        description: "Turns logs from the forest into wood.",
        cost: BuildingCost { wood: 30, stone: 10 },
        size: BuildingSize::Lg,
    },
    BuildingDefinition {
        id: "quarry",
        name: "Quarry",
        icon: "🪨",
        is_image: false,
        description: "Cuts stone from the hillside.",
        cost: BuildingCost { wood: 20, stone: 5 },
        size: BuildingSize::Sm,
    },
];

/// Exact, case-sensitive lookup. Unknown ids are a miss, not an error.
pub fn get_building_definition(id: &str) -> Option<&'static BuildingDefinition> {
    BUILDINGS.iter().find(|b| b.id == id)
}

pub fn all_buildings() -> &'static [BuildingDefinition] {
    &BUILDINGS
}
