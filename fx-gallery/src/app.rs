//! This module handles the [`App`] type for the `eframe`-based GUI.

use egui::RichText;
use fx_config::Configuration;
use fx_demos::DemoList;
use fx_panel::{render_prop_table, ControlPanel};
use std::{cell::Cell, rc::Rc};
use tracing::{debug, instrument};

/// The tab currently shown in the central panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Tab {
    /// The live preview with its interactive controls and prop documentation.
    Preview,

    /// The copyable usage example.
    Code,

    /// The copyable CLI install instructions.
    Cli,
}

/// The app type itself.
pub struct App {
    /// The demo currently mounted in the preview.
    selected: DemoList,

    /// The configuration of the mounted demo. Recreated from defaults whenever the selection
    /// changes; nothing survives a switch.
    config: Configuration,

    /// The control panel bound to `config`.
    panel: ControlPanel,

    /// How many times the mounted configuration has notified its renderer.
    notifications: Rc<Cell<u64>>,

    /// The tab currently shown in the central panel.
    tab: Tab,
}

impl App {
    /// Create a new [`App`] with the first demo mounted.
    pub fn new(_cc: &eframe::CreationContext) -> Self {
        let selected = DemoList::Dither;
        let (config, panel, notifications) = Self::mount(selected);

        Self {
            selected,
            config,
            panel,
            notifications,
            tab: Tab::Preview,
        }
    }

    /// Mount a demo: build a fresh configuration from its declared defaults and subscribe the
    /// renderer feed to it.
    ///
    /// The actual effect renderers live outside the gallery, so the subscribed listener stands
    /// in for one: it receives the full flattened configuration, synchronously, on every change.
    #[instrument]
    fn mount(demo: DemoList) -> (Configuration, ControlPanel, Rc<Cell<u64>>) {
        debug!("Mounting demo");

        let mut config = demo.configuration();
        let notifications = Rc::new(Cell::new(0_u64));

        config.subscribe({
            let notifications = Rc::clone(&notifications);
            let name = demo.name();
            move |config| {
                notifications.set(notifications.get() + 1);
                debug!(demo = name, args = ?config.flatten(), "Forwarding configuration to the renderer");
            }
        });

        let panel = ControlPanel::for_configuration(&config);
        (config, panel, notifications)
    }

    /// Switch the gallery to the given demo, dropping the old demo's configuration.
    fn switch_to(&mut self, demo: DemoList) {
        self.selected = demo;
        let (config, panel, notifications) = Self::mount(demo);
        self.config = config;
        self.panel = panel;
        self.notifications = notifications;
    }

    /// Render the sidebar navigation from the static catalog.
    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("FX Gallery").heading());
        ui.separator();

        for category in fx_catalog::CATEGORIES.iter() {
            ui.collapsing(category.name, |ui| {
                for &entry in category.subcategories {
                    let text = if fx_catalog::is_new(entry) {
                        format!("{entry} (new)")
                    } else if fx_catalog::is_updated(entry) {
                        format!("{entry} (updated)")
                    } else {
                        entry.to_owned()
                    };

                    match DemoList::from_name(entry) {
                        Some(demo) => {
                            if ui
                                .selectable_label(self.selected == demo, text)
                                .clicked()
                                && self.selected != demo
                            {
                                self.switch_to(demo);
                            }
                        }
                        // Catalogued but not implemented yet, so not selectable
                        None => {
                            ui.weak(text);
                        }
                    }
                }
            });
        }
    }

    /// Render the preview tab: the renderer's argument feed, the interactive controls, and the
    /// prop documentation.
    fn render_preview_tab(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Preview").strong());
            ui.label(format!(
                "Renderer notified {} times this session",
                self.notifications.get()
            ));

            egui::Grid::new("renderer-args").striped(true).show(ui, |ui| {
                for (name, value) in self.config.flatten() {
                    ui.monospace(name);
                    ui.monospace(value.to_string());
                    ui.end_row();
                }
            });
        });

        if ui.button("Refresh preview").clicked() {
            // The original demos re-mount the whole effect here, so do the same
            self.switch_to(self.selected);
        }

        ui.separator();
        ui.label(RichText::new("Customize").strong());
        self.panel.render(&mut self.config, ui);

        ui.separator();
        ui.label(RichText::new("Props").strong());
        render_prop_table(ui, "prop-table", self.selected.prop_rows());

        ui.separator();
        ui.label(format!(
            "Dependencies: {}",
            self.selected.snippet().dependencies.join(", ")
        ));
    }

    /// Render a copyable block of monospaced text.
    fn render_copyable(ui: &mut egui::Ui, id: &str, text: &str) {
        if ui.button("Copy to clipboard").clicked() {
            ui.ctx().output_mut(|output| output.copied_text = text.to_owned());
        }

        egui::ScrollArea::vertical().id_source(id).show(ui, |ui| {
            ui.monospace(text);
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar").show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.render_sidebar(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new(self.selected.name()).heading());
            if let Some(category) = fx_catalog::category_of(self.selected.name()) {
                ui.weak(category);
            }

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Preview, "Preview");
                ui.selectable_value(&mut self.tab, Tab::Code, "Code");
                ui.selectable_value(&mut self.tab, Tab::Cli, "CLI");
            });
            ui.separator();

            match self.tab {
                Tab::Preview => self.render_preview_tab(ui),
                Tab::Code => Self::render_copyable(ui, "code-tab", self.selected.snippet().usage),
                Tab::Cli => {
                    Self::render_copyable(ui, "cli-tab", &self.selected.snippet().cli_tab())
                }
            }
        });
    }
}
