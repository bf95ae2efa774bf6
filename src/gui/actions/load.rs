// src/gui/actions/load.rs
use std::path::Path;

use crate::{
    config::options::{parse_period_table, TermOptions},
    engine::week::parse_date,
    gui::app::App,
    specs::{self, SourceContext},
};

/// Side panel text → TermOptions. Bad fields are reported, not guessed.
fn term_from_fields(app: &App, base: &TermOptions) -> Result<TermOptions, Box<dyn std::error::Error>> {
    let mut term = base.clone();

    let start = app.term_start_text.trim();
    if parse_date(start).is_none() {
        return Err(format!("Invalid week 1 date (want YYYY-MM-DD): {start}").into());
    }
    term.week1_start = s!(start);

    let final_week = app.final_week_text.trim();
    term.final_week = if final_week.is_empty() { 0 } else { final_week.parse()? };

    let today = app.today_text.trim();
    term.debug_today = if today.is_empty() {
        None
    } else if parse_date(today).is_some() {
        Some(s!(today))
    } else {
        return Err(format!("Invalid date for today (want YYYY-MM-DD): {today}").into());
    };

    let periods = app.periods_text.trim();
    term.period_table = if periods.is_empty() { None } else { Some(parse_period_table(periods)?) };

    Ok(term)
}

pub fn load(app: &mut App) {
    let term = match term_from_fields(app, &app.state.options.term) {
        Ok(t) => t,
        Err(e) => {
            loge!("Load: Bad term settings: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };
    if term != app.state.options.term {
        logf!(
            "Load: term start={} final={} today={:?} periods={}",
            term.week1_start,
            term.final_week,
            term.debug_today,
            term.period_table.as_ref().map_or(0, Vec::len)
        );
        app.state.options.term = term;
    }

    let input = app.state.gui.input_path.trim().to_owned();
    if input.is_empty() {
        app.status("Pick an input file first");
        return;
    }

    let term = &app.state.options.term;
    let ctx = SourceContext::from_term(term, term.clock().as_ref());

    match specs::read_input(Path::new(&input), &ctx) {
        Ok(schedule) => {
            if schedule.is_empty() {
                logw!("Load: {} has periods but no sessions", input);
            }
            let msg = format!(
                "Loaded {} ({} sessions, {} courses)",
                schedule.title,
                schedule.session_count(),
                schedule.meta.course_count
            );
            app.schedule = Some(schedule);
            app.state.gui.browse_week = None;
            super::export::adopt_title(app);
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: Error {}: {}", input, e);
            app.status(format!("Error: {e}"));
        }
    }
}
