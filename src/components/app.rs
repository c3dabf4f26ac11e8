use super::{build_menu::BuildMenu, placement_banner::PlacementBanner};
use crate::audio::{LastSound, play_boop};
use crate::constants::{VIEW_BUILD, VIEW_VILLAGE};
use crate::context::PlacementProvider;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let active_view = use_state(|| VIEW_VILLAGE.to_string());
    let active_content = use_state(String::new);
    // Lives for the whole session so a boop outlasts the menu that triggered it
    let last_boop = use_mut_ref(LastSound::<web_sys::AudioContext>::default);

    let set_active_view = {
        let active_view = active_view.clone();
        Callback::from(move |view: String| active_view.set(view))
    };
    let set_active_content = {
        let active_content = active_content.clone();
        Callback::from(move |content: String| active_content.set(content))
    };
    let to_build = {
        let cb = set_active_view.clone();
        Callback::from(move |_| cb.emit(VIEW_BUILD.to_string()))
    };
    let to_village = {
        let cb = set_active_view.clone();
        Callback::from(move |_| cb.emit(VIEW_VILLAGE.to_string()))
    };
    let on_pick_sound = {
        let last_boop = last_boop.clone();
        Callback::from(move |_| play_boop(&mut last_boop.borrow_mut()))
    };
    let on_placed = {
        let cb = set_active_content.clone();
        Callback::from(move |name: String| cb.emit(format!("{} placed", name)))
    };

    let content = match active_view.as_str() {
        VIEW_BUILD => html! { <>
            <BuildMenu {on_pick_sound} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
                <button onclick={to_village}>{"Back to Village"}</button>
            </div>
        </> },
        _ => html! { <>
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={to_build}>{"Build"}</button>
                { if !active_content.is_empty() {
                    html!{ <div style="font-size:11px; line-height:1.2; background:#1c2128; border:1px solid #30363d; padding:4px 6px; border-radius:6px;">{ (*active_content).clone() }</div> }
                } else { html!{} } }
            </div>
            <PlacementBanner {on_placed} />
        </> },
    };

    html! {
        <PlacementProvider set_active_view={Some(set_active_view)} set_active_content={Some(set_active_content)}>
            <div id="root" style="position:relative; width:100vw; height:100vh;">{ content }</div>
        </PlacementProvider>
    }
}
