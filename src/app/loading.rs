//! Menu fetch lifecycle for `MenuApp`.
//!
//! The remote call runs on a worker thread so the frame loop never
//! blocks; `check_fetch` polls the channel each frame. The source itself
//! guarantees a tree arrives — fetch failures and timeouts resolve to the
//! bundled dataset inside `MenuSource`, so there is no error arm here.

use std::sync::mpsc;

use eframe::egui;

use super::MenuApp;

impl MenuApp {
    /// Start loading the menu tree in the background.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        let source = self.source.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let tree = source.fetch();
            let _ = tx.send(tree);
            ctx.request_repaint();
        });
    }

    /// Poll the fetch channel and install the tree when it arrives.
    pub fn check_fetch(&mut self) {
        if let Some(rx) = &self.fetch_rx {
            if let Ok(tree) = rx.try_recv() {
                log::debug!("menu tree installed: {} entries", tree.entry_count());
                self.tree = Some(tree);
                self.loading = false;
                self.fetch_rx = None;
            }
        }
    }
}
