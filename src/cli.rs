// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::options::{parse_period_table, ExportFormat, TermOptions};
use crate::engine::decode::Linearization;
use crate::engine::WeekView;
use crate::file;
use crate::render;
use crate::specs::{self, SourceContext};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub input: Option<PathBuf>,
    /// Raw `-o` text; a trailing separator means "directory".
    pub out: Option<String>,
    pub format: ExportFormat,
    pub term: TermOptions,
    /// Show this week instead of the current one.
    pub week: Option<u32>,
    pub all_weeks: bool,
    pub include_headers: bool,
    pub show_help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            input: None,
            out: None,
            format: ExportFormat::Text,
            term: TermOptions::default(),
            week: None,
            all_weeks: false,
            include_headers: true,
            show_help: false,
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => params.input = Some(PathBuf::from(args.next().ok_or("Missing value for --input")?)),
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = ExportFormat::from_name(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;}
            "--term-start" => {
                let v = args.next().ok_or("Missing value for --term-start")?;
                if crate::engine::week::parse_date(&v).is_none() {
                    return Err(format!("Invalid --term-start (want YYYY-MM-DD): {}", v).into());
                }
                params.term.week1_start = v;}
            "--final-week" => {
                let v: u32 = args.next().ok_or("Missing value for --final-week")?.parse()?;
                params.term.final_week = v;}
            "--today" => {
                let v = args.next().ok_or("Missing value for --today")?;
                if crate::engine::week::parse_date(&v).is_none() {
                    return Err(format!("Invalid --today (want YYYY-MM-DD): {}", v).into());
                }
                params.term.debug_today = Some(v);}
            "--week" => {
                let v: u32 = args.next().ok_or("Missing value for --week")?.parse()?;
                if v == 0 { return Err("Week numbers start at 1".into()); }
                params.week = Some(v);}
            "--all-weeks" => params.all_weeks = true,
            "--periods" => {
                let v = args.next().ok_or("Missing value for --periods")?;
                params.term.period_table = Some(parse_period_table(&v)?);}
            "--period-major" => params.term.linearization = Linearization::PeriodMajor,
            "--no-headers" => params.include_headers = false,
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => params.show_help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

pub fn run_from_env() -> Result<(), Box<dyn std::error::Error>> {
    run(parse_args(env::args().skip(1))?)
}

pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    if params.show_help {
        println!("{HELP}");
        return Ok(());
    }
    let input = params.input.as_ref().ok_or("Missing --input (see --help)")?;

    let term = &params.term;
    let clock = term.clock();
    let ctx = SourceContext::from_term(term, clock.as_ref());
    let schedule = specs::read_input(input, &ctx)?;

    if term.week1_date().is_none() {
        logw!("CLI: unparseable term start {:?}, treating as pre-term", term.week1_start);
    }

    let view = if params.all_weeks {
        WeekView::whole_term(&schedule)
    } else {
        term.week_view(&schedule, params.week)
    };
    logf!(
        "CLI: week={} sessions={} format={:?}",
        view.week.label,
        view.session_count(),
        params.format
    );

    match (&params.out, params.format) {
        (None, ExportFormat::Text) => {
            print!("{}", render::list_text(&view));
        }
        (out, format) => {
            let default_name = file::default_file_name(&schedule.title, format);
            let user_o = out.clone().unwrap_or_else(|| join!(DEFAULT_OUT_DIR, "/"));
            let path = file::resolve_single_out_path(&user_o, &default_name)?;
            file::write_export_to(&path, format, &view, params.include_headers)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
