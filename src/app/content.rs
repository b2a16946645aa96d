//! Ring painting and interaction for `MenuApp`.
//!
//! Geometry comes from `rondel::layout` and is rebuilt from the current
//! selection every frame; this module only turns segments into shapes,
//! maps pointer positions back onto them, and feeds clicks into the
//! state machine.

use eframe::egui;

use rondel::layout::{self, ArcSegment};
use rondel::menu::MenuItem;

use super::MenuApp;
use crate::ui::{arc_fill, hub_fill, icon_glyph};

/// What the pointer is over, in menu terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Hub,
    Arc { ring: usize, index: usize },
}

impl MenuApp {
    /// Paint the hub and every visible ring, then dispatch the frame's
    /// click (if any) back into the selection machine.
    pub fn draw_rings(&mut self, ui: &mut egui::Ui) {
        let side = ui.available_size().min_elem().max(160.0);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        // The widget's single size parameter; every radius derives from it.
        let size = side;

        let depth = self.selection.depth();
        let top_items: Vec<MenuItem> = match self.tree {
            Some(ref tree) if depth >= 1 => tree.items.clone(),
            _ => Vec::new(),
        };
        let sub_items: Vec<MenuItem> = if depth == 2 {
            self.selection
                .selected_level1()
                .map(|item| item.children.clone())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        // Fresh geometry every frame; nothing survives a state change.
        let hub = layout::hub_segment(size);
        let ring1 = layout::layout_ring(&top_items, 1, size);
        let ring2 = layout::layout_ring(&sub_items, 2, size);

        let hovered = response
            .hover_pos()
            .and_then(|pos| hit_test(pos, center, &hub, &ring1, &ring2));

        self.paint_hub(&painter, center, &hub, size);
        for arc in &ring1 {
            self.paint_arc(&painter, center, arc, &top_items, hovered, size);
        }
        for arc in &ring2 {
            self.paint_arc(&painter, center, arc, &sub_items, hovered, size);
        }

        if matches!(hovered, Some(Hit::Arc { .. }))
            || (hovered == Some(Hit::Hub) && self.selection.gate_passed())
        {
            ui.ctx().output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }

        // Status overlay along the bottom edge.
        if self.selection.gate_passed() {
            painter.text(
                rect.left_bottom() + egui::vec2(8.0, -8.0),
                egui::Align2::LEFT_BOTTOM,
                "Click: select | Center: reset",
                egui::FontId::proportional(12.0),
                egui::Color32::from_rgba_unmultiplied(160, 160, 170, 180),
            );
        }
        if let Some(ref last) = self.sink.last {
            painter.text(
                rect.right_bottom() + egui::vec2(-8.0, -8.0),
                egui::Align2::RIGHT_BOTTOM,
                format!("{} ({})", last, self.sink.dispatched),
                egui::FontId::proportional(12.0),
                egui::Color32::from_rgba_unmultiplied(160, 200, 160, 200),
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(hit) = hit_test(pos, center, &hub, &ring1, &ring2) {
                    self.dispatch(hit, &top_items, &sub_items);
                }
            }
        }
    }

    /// Route a hit to the matching transition.
    fn dispatch(&mut self, hit: Hit, top_items: &[MenuItem], sub_items: &[MenuItem]) {
        match hit {
            // Once gated the hub is only a reset affordance; while the
            // form is up it is not interactive at all.
            Hit::Hub => {
                if self.selection.gate_passed() {
                    self.selection.reset();
                    self.code_input.clear();
                    self.code_error = None;
                }
            }
            Hit::Arc { ring: 1, index } => {
                if let Some(item) = top_items.get(index) {
                    self.selection.select_level1(item, &mut self.sink);
                }
            }
            Hit::Arc { ring: 2, index } => {
                if let Some(item) = sub_items.get(index) {
                    self.selection.select_level2(item, &mut self.sink);
                }
            }
            Hit::Arc { .. } => {}
        }
    }

    /// The center disc: gate caption while locked, the accepted code and
    /// the reset affordance once open.
    fn paint_hub(&self, painter: &egui::Painter, center: egui::Pos2, hub: &ArcSegment, size: f32) {
        painter.circle_filled(center, hub.outer_radius, hub_fill());
        if self.selection.gate_passed() {
            painter.text(
                center - egui::vec2(0.0, size * 0.022),
                egui::Align2::CENTER_CENTER,
                self.selection.identity_code(),
                egui::FontId::monospace(size * 0.030),
                egui::Color32::BLACK,
            );
            painter.text(
                center + egui::vec2(0.0, size * 0.026),
                egui::Align2::CENTER_CENTER,
                "بازنشانی",
                egui::FontId::proportional(size * 0.024),
                egui::Color32::from_gray(90),
            );
        } else {
            painter.text(
                center - egui::vec2(0.0, size * 0.022),
                egui::Align2::CENTER_CENTER,
                "🔒",
                egui::FontId::proportional(size * 0.060),
                egui::Color32::from_gray(70),
            );
            painter.text(
                center + egui::vec2(0.0, size * 0.030),
                egui::Align2::CENTER_CENTER,
                "کد ملی",
                egui::FontId::proportional(size * 0.028),
                egui::Color32::BLACK,
            );
        }
    }

    /// One annular band segment plus its centroid-anchored icon and label.
    fn paint_arc(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        arc: &ArcSegment,
        items: &[MenuItem],
        hovered: Option<Hit>,
        size: f32,
    ) {
        let Some(item) = items.get(arc.item_index) else {
            return;
        };
        let selected = self.selection.is_selected(arc.ring, &item.value);
        let is_hovered = hovered
            == Some(Hit::Arc {
                ring: arc.ring,
                index: arc.item_index,
            });

        // The band is a polyline along the mid radius, stroked as wide as
        // the ring is thick.
        let radius = arc.mid_radius();
        let steps = ((arc.span() * radius / 6.0).ceil() as usize).max(8);
        let points: Vec<egui::Pos2> = (0..=steps)
            .map(|i| {
                let a = arc.start_angle + arc.span() * (i as f32 / steps as f32);
                egui::pos2(center.x + radius * a.sin(), center.y - radius * a.cos())
            })
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(
                arc.outer_radius - arc.inner_radius,
                arc_fill(selected, is_hovered),
            ),
        ));

        let (cx, cy) = arc.centroid();
        let (dx, dy) = self.offsets.offset_for(&item.value);
        let anchor = egui::pos2(center.x + cx + dx, center.y + cy + dy);
        let text_color = if selected || is_hovered {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_gray(225)
        };

        if let Some(ref icon) = item.icon {
            painter.text(
                anchor - egui::vec2(0.0, size * 0.022),
                egui::Align2::CENTER_CENTER,
                icon_glyph(icon),
                egui::FontId::proportional(size * 0.036),
                text_color,
            );
        }
        let label_shift = if item.icon.is_some() { size * 0.018 } else { 0.0 };
        painter.text(
            anchor + egui::vec2(0.0, label_shift),
            egui::Align2::CENTER_CENTER,
            &item.label,
            egui::FontId::proportional(size * 0.024),
            text_color,
        );
    }
}

/// Map a pointer position onto the hub or an arc.
fn hit_test(
    pos: egui::Pos2,
    center: egui::Pos2,
    hub: &ArcSegment,
    ring1: &[ArcSegment],
    ring2: &[ArcSegment],
) -> Option<Hit> {
    let d = pos - center;
    let radius = d.length();
    let angle = layout::polar_angle(d.x, d.y);

    if radius <= hub.outer_radius {
        return Some(Hit::Hub);
    }
    for arc in ring1.iter().chain(ring2) {
        if arc.contains(angle, radius) {
            return Some(Hit::Arc {
                ring: arc.ring,
                index: arc.item_index,
            });
        }
    }
    None
}
