use super::building_icon::BuildingIcon;
use crate::catalog::get_building_definition;
use crate::context::use_placement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlacementBannerProps {
    /// Fired after the player confirms placement, with the building name.
    #[prop_or_default]
    pub on_placed: Callback<String>,
}

#[function_component]
pub fn PlacementBanner(props: &PlacementBannerProps) -> Html {
    let Some(placement) = use_placement() else {
        log::warn!("PlacementBanner rendered outside PlacementProvider");
        return html! {};
    };
    let Some(building) = placement.building_to_place().cloned() else {
        return html! {};
    };
    // Not every pending building has to be in the catalog
    let def = get_building_definition(&building.id);
    let place_cb = {
        let placement = placement.clone();
        let on_placed = props.on_placed.clone();
        let name = building.name.clone();
        Callback::from(move |_| {
            placement.complete_building_placement();
            on_placed.emit(name.clone());
        })
    };
    let cancel_cb = {
        let placement = placement.clone();
        Callback::from(move |_| placement.cancel_building_placement())
    };
    html! {<div style="position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; align-items:center; gap:10px; min-width:240px;">
        <BuildingIcon
            id={building.id.clone()}
            icon={building.icon.clone()}
            is_image={def.map(|d| d.is_image).unwrap_or(false)}
            size={def.map(|d| AttrValue::from(d.size.as_str()))}
            scale={0.3}
        />
        <div style="flex:1; font-size:13px;">{ format!("Placing {}", building.name) }</div>
        <button onclick={place_cb}>{"Place"}</button>
        <button onclick={cancel_cb}>{"Cancel"}</button>
    </div> }
}
