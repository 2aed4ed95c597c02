//! DOM event type → framework handler prop name.

/// Translate a low-level pointer/touch event type to the handler prop name
/// the composition layer uses. Unrecognized types map to `None`.
pub fn event_handler_name(event_type: &str) -> Option<&'static str> {
    match event_type {
        "click" => Some("onClick"),
        "mousedown" => Some("onMouseDown"),
        "mouseup" => Some("onMouseUp"),
        "mouseover" => Some("onMouseOver"),
        "mousemove" => Some("onMouseMove"),
        "mouseout" => Some("onMouseOut"),
        "mouseenter" => Some("onMouseEnter"),
        "mouseleave" => Some("onMouseLeave"),
        "touchcancel" => Some("onTouchCancel"),
        "touchend" => Some("onTouchEnd"),
        "touchmove" => Some("onTouchMove"),
        "touchstart" => Some("onTouchStart"),
        _ => None,
    }
}
