//! Main window for QuickDig.
//!
//! Owns all interactive state, wires the controls to the lookup worker, and
//! renders results into an append-only log. At most one lookup is in flight
//! per window: the Lookup button stays disabled while the outcome receiver is
//! held.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use hickory_resolver::proto::rr::RecordType;
use tracing::info;

use crate::lookup;
use crate::settings::Settings;
use crate::theme;
use crate::types::{LookupOutcome, LookupRequest, NAMESERVERS, RECORD_TYPES};

pub struct QuickDigApp {
    settings: Settings,
    settings_path: PathBuf,
    runtime: tokio::runtime::Handle,
    domain: String,
    nameserver_index: usize,
    record_type: RecordType,
    log: String,
    lookup_rx: Option<Receiver<LookupOutcome>>,
}

impl QuickDigApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            settings,
            settings_path,
            runtime: tokio::runtime::Handle::current(),
            domain: String::new(),
            nameserver_index: 0,
            record_type: RECORD_TYPES[0],
            log: String::new(),
            lookup_rx: None,
        }
    }

    fn perform_lookup(&mut self, ctx: &egui::Context) {
        let domain = self.domain.trim().to_string();
        if domain.is_empty() {
            self.log = "Please enter a domain name!".to_string();
            return;
        }

        let entry = &NAMESERVERS[self.nameserver_index];
        let request = LookupRequest {
            domain: domain.clone(),
            record_type: self.record_type,
            nameserver: entry.address().map(str::to_string),
        };

        info!(
            domain = %request.domain,
            record_type = %request.record_type,
            nameserver = entry.label,
            "dispatching lookup"
        );

        // The status line goes in before the worker starts, so the log order
        // always matches event order.
        self.log.push_str(&format!("\nQuerying {domain}...\n"));
        self.lookup_rx = Some(lookup::spawn(&self.runtime, request, ctx.clone()));
    }

    /// Drains at most one outcome per frame; dropping the receiver re-enables
    /// the Lookup button on success and failure alike.
    fn poll_lookup(&mut self) {
        let Some(rx) = &self.lookup_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.log.push_str(outcome.text());
                if !self.log.ends_with('\n') {
                    self.log.push('\n');
                }
                self.lookup_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.log
                    .push_str("\nError: lookup worker exited without a result\n");
                self.lookup_rx = None;
            }
        }
    }

    fn clear_log(&mut self) {
        self.log.clear();
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.dark_mode = !self.settings.dark_mode;
        theme::apply(ctx, self.settings.dark_mode);
        self.settings.save_to(&self.settings_path);
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Theme:");
            if ui.button("Toggle Dark/Light Mode").clicked() {
                self.toggle_theme(ui.ctx());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Nameserver:");
            egui::ComboBox::from_id_source("nameserver")
                .width(280.0)
                .selected_text(NAMESERVERS[self.nameserver_index].label)
                .show_ui(ui, |ui| {
                    for (index, entry) in NAMESERVERS.iter().enumerate() {
                        ui.selectable_value(&mut self.nameserver_index, index, entry.label);
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Domain:");
            ui.add(
                egui::TextEdit::singleline(&mut self.domain)
                    .hint_text("example.com")
                    .desired_width(f32::INFINITY),
            );
        });

        ui.horizontal(|ui| {
            ui.label("Record Type:");
            egui::ComboBox::from_id_source("record_type")
                .selected_text(self.record_type.to_string())
                .show_ui(ui, |ui| {
                    for record_type in RECORD_TYPES {
                        ui.selectable_value(
                            &mut self.record_type,
                            *record_type,
                            record_type.to_string(),
                        );
                    }
                });
        });

        ui.horizontal(|ui| {
            let idle = self.lookup_rx.is_none();
            if ui.add_enabled(idle, egui::Button::new("Lookup")).clicked() {
                self.perform_lookup(ui.ctx());
            }
            if ui.button("Clear Log").clicked() {
                self.clear_log();
            }
        });

        ui.add_space(6.0);
    }

    fn draw_results(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.log.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(24),
                );
            });
    }
}

impl eframe::App for QuickDigApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_lookup();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.draw_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_results(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tempfile::tempdir;

    fn test_app(dir: &std::path::Path) -> QuickDigApp {
        QuickDigApp::new(Settings::default(), dir.join("settings.json"))
    }

    #[tokio::test]
    async fn empty_domain_shows_prompt_without_dispatching() {
        let dir = tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(dir.path());

        app.domain = "   ".to_string();
        app.perform_lookup(&ctx);

        assert_eq!(app.log, "Please enter a domain name!");
        assert!(app.lookup_rx.is_none());
    }

    #[tokio::test]
    async fn clear_log_empties_results() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.log = "\nQuerying example.com...\n".to_string();
        app.clear_log();

        assert!(app.log.is_empty());
    }

    #[tokio::test]
    async fn toggle_theme_twice_restores_state_and_file() {
        let dir = tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(dir.path());
        let original = app.settings.dark_mode;

        app.toggle_theme(&ctx);
        assert_eq!(app.settings.dark_mode, !original);
        assert_eq!(Settings::load_from(&app.settings_path).dark_mode, !original);

        app.toggle_theme(&ctx);
        assert_eq!(app.settings.dark_mode, original);
        assert_eq!(Settings::load_from(&app.settings_path).dark_mode, original);
    }

    #[tokio::test]
    async fn outcome_appends_to_log_and_reenables_lookup() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        let (tx, rx) = mpsc::channel();
        app.lookup_rx = Some(rx);
        tx.send(LookupOutcome::Failure("Error: boom".to_string()))
            .unwrap();

        app.poll_lookup();

        assert!(app.log.contains("Error: boom"));
        assert!(app.lookup_rx.is_none());
    }

    #[tokio::test]
    async fn pending_outcome_keeps_lookup_disabled() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        let (tx, rx) = mpsc::channel::<LookupOutcome>();
        app.lookup_rx = Some(rx);

        app.poll_lookup();
        assert!(app.lookup_rx.is_some());
        drop(tx);
    }

    #[tokio::test]
    async fn dead_worker_reenables_lookup_with_error_line() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        let (tx, rx) = mpsc::channel::<LookupOutcome>();
        app.lookup_rx = Some(rx);
        drop(tx);

        app.poll_lookup();

        assert!(app.log.contains("Error: lookup worker exited"));
        assert!(app.lookup_rx.is_none());
    }
}
