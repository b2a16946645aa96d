//! `MenuApp` — the top-level egui application state.
//!
//! This module declares the `MenuApp` struct, its `Default` impl and the
//! `eframe::App` frame loop. All other methods are split across the
//! sibling sub-modules:
//!
//! - `loading`    — background menu fetch lifecycle
//! - `gate_panel` — identity-code search form
//! - `content`    — ring painting, hit-testing, click dispatch

pub mod content;
pub mod gate_panel;
pub mod loading;

use std::sync::mpsc;

use eframe::egui;

use rondel::gate::{CodeError, CodeInput};
use rondel::layout::LabelOffsets;
use rondel::menu::MenuTree;
use rondel::net::MenuSource;
use rondel::state::{ActionSink, SelectionState};

// ─── Action dispatch ─────────────────────────────────────────────────────────

/// Default sink for leaf activations: hands the token to the log and keeps
/// the latest one for the status line. A console embedding this menu
/// supplies its own sink instead.
#[derive(Default)]
pub struct ConsoleSink {
    pub last: Option<String>,
    pub dispatched: usize,
}

impl ActionSink for ConsoleSink {
    fn perform_action(&mut self, value: &str) {
        log::info!("action dispatched: {}", value);
        self.last = Some(value.to_string());
        self.dispatched += 1;
    }
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct MenuApp {
    pub tree: Option<MenuTree>,
    pub loading: bool,
    pub fetch_rx: Option<mpsc::Receiver<MenuTree>>,
    pub source: MenuSource,
    pub selection: SelectionState,
    pub code_input: CodeInput,
    pub code_error: Option<CodeError>,
    pub offsets: LabelOffsets,
    pub sink: ConsoleSink,
}

impl Default for MenuApp {
    fn default() -> Self {
        Self {
            tree: None,
            loading: false,
            fetch_rx: None,
            source: MenuSource::default(),
            selection: SelectionState::new(),
            code_input: CodeInput::new(),
            code_error: None,
            offsets: LabelOffsets::default(),
            sink: ConsoleSink::default(),
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();
        if self.tree.is_none() && !self.loading {
            self.start_fetch(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            if !self.selection.gate_passed() {
                self.draw_gate_panel(ui);
                ui.separator();
            }
            self.draw_rings(ui);
        });
    }
}
