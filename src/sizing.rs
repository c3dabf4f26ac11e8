// Pixel sizes for drawing objects on the village map.

pub const SIZE_XS_PX: f64 = 28.0;
pub const SIZE_SM_PX: f64 = 36.0;
pub const SIZE_MD_PX: f64 = 52.0;
pub const SIZE_LG_PX: f64 = 68.0;

pub const BUILDING_SCALE: f64 = 2.5;
pub const BEEHIVE_SCALE: f64 = 5.0;
pub const LUMBER_SCALE: f64 = 4.0;

/// Base size for a size name; unknown or missing names fall back to `sm`.
pub fn base_pixels(size: Option<&str>) -> f64 {
    match size {
        Some("xs") => SIZE_XS_PX,
        Some("sm") => SIZE_SM_PX,
        Some("md") => SIZE_MD_PX,
        Some("lg") => SIZE_LG_PX,
        _ => SIZE_SM_PX,
    }
}

/// Beehive overrides are checked before lumber/sawmill; at most one applies.
pub fn scale_multiplier(object_type: &str, object_id: Option<&str>) -> f64 {
    if object_type != "building" {
        return 1.0;
    }
    let id = object_id.unwrap_or("");
    if id.contains("beehive") {
        BEEHIVE_SCALE
    } else if id.contains("lumber") || id.contains("sawmill") {
        LUMBER_SCALE
    } else {
        BUILDING_SCALE
    }
}

pub fn object_size_in_pixels(
    object_type: &str,
    size: Option<&str>,
    object_id: Option<&str>,
) -> f64 {
    base_pixels(size) * scale_multiplier(object_type, object_id)
}
