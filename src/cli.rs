// src/cli.rs
//
// Terminal front end. Same session as the GUI: load, filter, page, show.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    config::{consts::{CONFIG_FILE, EMPTY_DATASET_MSG, LOAD_FAILED_MSG}, options::AppOptions},
    loader,
    progress::Progress,
    session::{Session, Status},
};

#[derive(Debug, Parser)]
#[command(name = "cli", about = "Browse and search a year's offerings", version)]
pub struct Args {
    /// Dataset directory or http(s) base URL
    #[arg(long)]
    pub source: Option<String>,

    /// Dataset year
    #[arg(long)]
    pub year: Option<u16>,

    /// Config file
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Case-insensitive search over name, city, country and text
    #[arg(short, long, default_value = "")]
    pub query: String,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Pages of cards to list
    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    /// Print the full entry at this position of the filtered list
    #[arg(long)]
    pub show: Option<usize>,

    /// Emit escaped card markup instead of plain text
    #[arg(long)]
    pub html: bool,

    /// List the country and city choices, then exit
    #[arg(long)]
    pub facets: bool,
}

/// Progress lines on stderr so stdout stays clean for output.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, resource: &str) {
        eprintln!("Loading {resource}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn loaded(&mut self, count: usize) {
        eprintln!("Loaded {count} offerings");
    }
}

pub fn run(args: Args) -> Result<()> {
    let mut options = AppOptions::load_or_default(&args.config);
    if let Some(base) = &args.source { options.source.base = base.clone(); }
    if let Some(year) = args.year { options.source.year = year; }

    let source = options.source.data_source();
    let res = loader::load(&source, options.source.year, Some(&mut CliProgress));
    let mut session = Session::from_load(res, &options.ui);

    match session.status().clone() {
        Status::Failed(cause) => {
            return Err(eyre!(cause).wrap_err(LOAD_FAILED_MSG));
        }
        Status::Empty => {
            println!("{EMPTY_DATASET_MSG}");
            return Ok(());
        }
        Status::Ready => {}
    }

    if args.facets {
        let f = session.facets();
        println!("Countries ({}):", f.countries.len());
        for c in &f.countries { println!("  {c}"); }
        println!("Cities ({}):", f.cities.len());
        for c in &f.cities { println!("  {c}"); }
        return Ok(());
    }

    if args.country.is_some() { session.select_country(args.country.clone()); }
    if args.city.is_some() { session.select_city(args.city.clone()); }
    if !args.query.is_empty() { session.set_query(&args.query); }

    if let Some(ix) = args.show {
        if !session.open_card(ix) {
            bail!("no offering at position {} ({} matching)", ix, session.view_len());
        }
        let Some((pos, d)) = session.modal_detail() else {
            bail!("no offering at position {}", ix);
        };
        println!("{}", d.name);
        if !d.location.is_empty() { println!("{}", d.location); }
        println!();
        println!("{}", d.body);
        println!();
        println!("[{} / {}]", pos + 1, session.view_len());
        return Ok(());
    }

    for _ in 1..args.pages.max(1) {
        if session.load_more() == 0 { break; }
    }

    for card in session.visible_cards() {
        if args.html {
            print!("{}", card.to_html());
        } else {
            let v = &card.view;
            if v.location_label.is_empty() {
                println!("[{}] {}", card.index, v.display_name);
            } else {
                println!("[{}] {} · {}", card.index, v.display_name, v.location_label);
            }
            if !v.excerpt.is_empty() { println!("    {}", v.excerpt); }
        }
    }

    if !args.html {
        println!();
        println!("{}", session.results_count());
        if session.pager().has_more() {
            println!("(more: --pages {})", args.pages.max(1) + 1);
        }
    }
    Ok(())
}
