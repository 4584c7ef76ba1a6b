mod page_view;
mod switch;
pub mod theme;

pub use page_view::show_page;
pub use switch::{shortcut_view, view_switch};

use crate::clock::Clock;
use crate::dashboard::{render, DataProvider, Page, ViewController, ViewMode};
use crate::settings::Settings;
use chrono::NaiveDate;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

struct CachedPage {
    view: ViewMode,
    generation: u64,
    date: NaiveDate,
    page: Page,
}

/// Top-level window: the view switch above the selected dashboard.
pub struct DashboardApp {
    controller: ViewController,
    provider: DataProvider,
    clock: Box<dyn Clock>,
    cached: Option<CachedPage>,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
}

impl DashboardApp {
    pub fn new(
        ctx: &egui::Context,
        settings: Settings,
        provider: DataProvider,
        clock: Box<dyn Clock>,
    ) -> Self {
        let visuals = theme::theme_visuals(settings.theme, &ctx.style().visuals);
        ctx.set_visuals(visuals);

        let mut app = Self {
            controller: ViewController::new(settings.initial_view()),
            provider,
            clock,
            cached: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
        };
        let warnings = app.provider.warnings().to_vec();
        for w in warnings {
            app.push_toast(w, ToastKind::Warning);
        }
        app
    }

    pub fn current_view(&self) -> ViewMode {
        self.controller.current()
    }

    /// Switches the visible dashboard. Returns `false` if it was already shown.
    pub fn select_view(&mut self, view: ViewMode) -> bool {
        self.controller.select(view)
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn provider(&self) -> &DataProvider {
        &self.provider
    }

    /// Page for the current view, rebuilt only when the view, the snapshot or
    /// the date changed.
    pub fn page(&mut self) -> &Page {
        let view = self.controller.current();
        let generation = self.provider.generation();
        let date = self.clock.today();
        let stale = !matches!(
            &self.cached,
            Some(c) if c.view == view && c.generation == generation && c.date == date
        );
        if stale {
            self.cached = None;
        }
        let cached = self.cached.get_or_insert_with(|| CachedPage {
            view,
            generation,
            date,
            page: render(view, self.provider.snapshot(), self.clock.as_ref()),
        });
        &cached.page
    }

    pub fn reload_data(&mut self) {
        match self.provider.reload() {
            Ok(()) => {
                let warnings = self.provider.warnings().to_vec();
                if warnings.is_empty() {
                    self.push_toast("Dashboard data reloaded".into(), ToastKind::Success);
                }
                for w in warnings {
                    self.push_toast(w, ToastKind::Warning);
                }
            }
            Err(e) => {
                tracing::error!("failed to reload dashboard data: {e:#}");
                self.push_toast(format!("Reload failed: {e:#}"), ToastKind::Error);
            }
        }
    }

    fn push_toast(&mut self, text: String, kind: ToastKind) {
        if !self.enable_toasts {
            return;
        }
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
        });
    }

    /// Draws one frame. Split from [`eframe::App::update`] so it can be driven
    /// with a bare [`egui::Context`].
    pub fn ui(&mut self, ctx: &egui::Context) {
        if let Some(view) = shortcut_view(ctx) {
            self.controller.select(view);
        }

        let options = self.controller.options();
        let mut reload = false;
        egui::TopBottomPanel::top("view_switch").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if let Some(view) = view_switch(ui, &options) {
                    self.controller.select(view);
                }
                if self.provider.source().is_some() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        reload = ui.button("Reload data").clicked();
                    });
                }
            });
            ui.add_space(6.0);
        });
        if reload {
            self.reload_data();
        }

        let page = self.page();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source(("dashboard_page", page.view.key()))
                .auto_shrink([false; 2])
                .show(ui, |ui| show_page(ui, page));
        });

        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
