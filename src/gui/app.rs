// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, ViewKind},
    engine::WeekView,
    model::Schedule,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Timetable Grid",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successfully loaded schedule
    pub schedule: Option<Schedule>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // term settings as typed; applied on Load
    pub term_start_text: String,
    pub final_week_text: String,
    pub today_text: String,
    pub periods_text: String,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let term = &state.options.term;
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let term_start_text = term.week1_start.clone();
        let final_week_text = term.final_week.to_string();
        let today_text = term.debug_today.clone().unwrap_or_default();

        logf!(
            "Init: term start={} final week={} view={:?}",
            term.week1_start,
            term.final_week,
            state.gui.view
        );

        Self {
            state,
            schedule: None,
            out_path_text,
            out_path_dirty: false,
            term_start_text,
            final_week_text,
            today_text,
            periods_text: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// The week currently on screen, if anything is loaded.
    pub fn view(&self) -> Option<WeekView<'_>> {
        let schedule = self.schedule.as_ref()?;
        if self.state.gui.whole_term {
            return Some(WeekView::whole_term(schedule));
        }
        Some(self.state.options.term.week_view(schedule, self.state.gui.browse_week))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("source")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::side_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::week_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            match self.state.gui.view {
                ViewKind::Grid => crate::gui::components::timetable::draw(ui, self),
                ViewKind::List => crate::gui::components::session_list::draw(ui, self),
            }
        });
    }
}
