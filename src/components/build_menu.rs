use super::building_icon::BuildingIcon;
use crate::catalog::all_buildings;
use crate::constants::VIEW_VILLAGE;
use crate::context::use_placement;
use crate::model::BuildingToPlace;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BuildMenuProps {
    /// Click feedback; the owner keeps the sound context alive.
    #[prop_or_default]
    pub on_pick_sound: Callback<()>,
}

#[function_component]
pub fn BuildMenu(props: &BuildMenuProps) -> Html {
    let Some(placement) = use_placement() else {
        log::warn!("BuildMenu rendered outside PlacementProvider");
        return html! {};
    };
    let row_style = "display:flex; align-items:center; gap:10px; width:100%; text-align:left; padding:6px 10px;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:6px;">
            <div style="font-size:14px; font-weight:600;">{"Build"}</div>
            { for all_buildings().iter().map(|def| {
                let onclick = {
                    let placement = placement.clone();
                    let on_pick_sound = props.on_pick_sound.clone();
                    Callback::from(move |_| {
                        on_pick_sound.emit(());
                        placement.start_building_placement(BuildingToPlace::from(def));
                        if let Some(cb) = placement.set_active_content() {
                            cb.emit(def.description.to_string());
                        }
                        if let Some(cb) = placement.set_active_view() {
                            cb.emit(VIEW_VILLAGE.to_string());
                        }
                    })
                };
                html! {
                    <button {onclick} style={row_style} title={def.description}>
                        <BuildingIcon id={def.id} icon={def.icon} is_image={def.is_image} size={Some(AttrValue::from(def.size.as_str()))} scale={0.25} />
                        <span style="flex:1; font-weight:500;">{ def.name }</span>
                        <span style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("🪵 {}  🪨 {}", def.cost.wood, def.cost.stone) }</span>
                    </button>
                }
            }) }
        </div>
    }
}
