//! Stateless egui helpers shared by the menu painters.

use eframe::egui;

/// Band color for ring arcs: the translucent gray of the reference
/// design, lifted when hovered and nearly opaque when selected.
pub fn arc_fill(selected: bool, hovered: bool) -> egui::Color32 {
    if selected {
        egui::Color32::from_rgba_unmultiplied(102, 100, 112, 235)
    } else if hovered {
        egui::Color32::from_rgba_unmultiplied(124, 122, 136, 200)
    } else {
        egui::Color32::from_rgba_unmultiplied(102, 100, 112, 153)
    }
}

/// The hub disc sits light on the dark panel.
pub fn hub_fill() -> egui::Color32 {
    egui::Color32::from_gray(235)
}

/// Map a Material icon name from the wire format to a glyph egui's
/// built-in fonts can draw. Unknown names collapse to a dot rather than
/// a tofu box.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "group" => "👥",
        "visibility" => "👁",
        "content_copy" => "⧉",
        "edit" => "✏",
        "control_point_duplicate" => "⊕",
        "search" => "🔍",
        "cloud_download" => "☁",
        "device_hub" => "⛓",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_fall_back_to_a_dot() {
        assert_eq!(icon_glyph("group"), "👥");
        assert_eq!(icon_glyph("no_such_icon"), "•");
    }
}
