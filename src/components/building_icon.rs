use crate::sizing::object_size_in_pixels;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BuildingIconProps {
    pub id: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub is_image: bool,
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Extra factor on top of the map size (menus draw icons smaller).
    #[prop_or(1.0)]
    pub scale: f64,
}

#[function_component]
pub fn BuildingIcon(props: &BuildingIconProps) -> Html {
    let px =
        object_size_in_pixels("building", props.size.as_deref(), Some(&*props.id)) * props.scale;
    if props.is_image {
        html! { <img src={props.icon.clone()} alt={props.id.clone()} style={format!("width:{px:.0}px; height:{px:.0}px; object-fit:contain;")} /> }
    } else {
        // Emoji glyphs render a bit larger than their font size
        html! { <span style={format!("display:inline-block; font-size:{:.0}px; line-height:1;", px * 0.8)}>{ props.icon.clone() }</span> }
    }
}
