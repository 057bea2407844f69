// src/cli.rs
use std::{io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::{
    catalogue::{Catalogue, CatalogueCache, NormalizedRecord},
    config::{self, consts::{CONFIG_FILE, STORE_DIR}, options::{AppOptions, ExportFormat}},
    core::duration::explain_duration,
    data::{self, CatalogueView, Filters, SortMode, Stats},
    file,
    tutors,
};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Browse, filter and export the course catalogue")]
#[command(version)]
struct Cli {
    /// Catalogue CSV (overrides the config file)
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    /// Tutor CSV (overrides the config file)
    #[arg(long, global = true)]
    tutors: Option<PathBuf>,

    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Mirror log events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List visible courses
    List {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, value_enum, default_value_t = SortMode::Relevance)]
        sort: SortMode,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one course by id
    Show {
        id: usize,
        #[arg(long)]
        json: bool,
    },
    /// Write visible courses as CSV/TSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, value_enum, default_value_t = SortMode::Relevance)]
        sort: SortMode,
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// File or directory (trailing '/') to write to
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long)]
        no_headers: bool,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Summary numbers for the visible courses
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Tutors, optionally only those matching a focus area
    Tutors {
        #[arg(long)]
        focus: Option<String>,
    },
    /// Parse a free-text length and print the hours
    Duration { text: Vec<String> },
}

#[derive(Args, Clone, Debug, Default)]
struct FilterArgs {
    /// Substring of title or description
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long)]
    domain: Vec<String>,
    #[arg(long)]
    skill: Vec<String>,
    #[arg(long)]
    level: Vec<String>,
    /// Passive / interactive format
    #[arg(long)]
    course_format: Vec<String>,
    #[arg(long)]
    stage: Vec<String>,
    #[arg(long)]
    platform: Vec<String>,
    #[arg(long)]
    min_hours: Option<f64>,
    #[arg(long)]
    max_hours: Option<f64>,
    /// Hide courses without a link
    #[arg(long)]
    require_link: bool,
}

impl From<FilterArgs> for Filters {
    fn from(a: FilterArgs) -> Self {
        let duration = match (a.min_hours, a.max_hours) {
            (None, None) => None,
            (lo, hi) => Some((lo.unwrap_or(0.0), hi.unwrap_or(f64::INFINITY))),
        };
        Filters {
            search: a.search.unwrap_or_default(),
            domains: a.domain,
            skills: a.skill,
            levels: a.level,
            formats: a.course_format,
            journey_stages: a.stage,
            platforms: a.platform,
            duration,
            show_without_link: !a.require_link,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(std::path::Path::new(STORE_DIR), cli.verbose);

    let mut opts = config::load_options(&cli.config)?;
    if let Some(p) = cli.catalogue {
        opts.sources.catalogue = p;
    }
    if let Some(p) = cli.tutors {
        opts.sources.tutors = p;
    }

    match cli.command {
        Command::Duration { text } => duration(&text.join(" "), &opts),
        Command::Tutors { focus } => list_tutors(&opts, focus.as_deref()),
        Command::List { filters, sort, limit } => {
            let cat = load(&opts)?;
            let view = CatalogueView::new(&cat, &filters.into(), sort);
            print_list(&view, limit)
        }
        Command::Show { id, json } => {
            let cat = load(&opts)?;
            let rec = cat.get(id).ok_or_else(|| eyre!("no course with id {id} (0..{})", cat.len()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(rec)?);
            } else {
                print_detail(rec);
            }
            Ok(())
        }
        Command::Export { filters, sort, format, out, no_headers, stdout } => {
            let cat = load(&opts)?;
            let view = CatalogueView::new(&cat, &filters.into(), sort);

            let export = &mut opts.export;
            if let Some(f) = format {
                export.format = f;
            }
            if let Some(o) = out {
                export.set_path(&o);
            }
            if no_headers {
                export.include_headers = false;
            }

            if stdout {
                file::write_table(std::io::stdout().lock(), export, &view)?;
            } else {
                let path = file::write_export(export, &view)?;
                eprintln!("Exported {} course(s) to {}", view.len(), path.display());
            }
            Ok(())
        }
        Command::Stats { filters } => {
            let cat = load(&opts)?;
            let view = CatalogueView::new(&cat, &filters.into(), SortMode::Relevance);
            print_stats(&Stats::compute(&view));
            Ok(())
        }
    }
}

fn load(opts: &AppOptions) -> Result<std::sync::Arc<Catalogue>> {
    let mut cache = CatalogueCache::new(opts.durations);
    Ok(cache.get_or_load(&opts.sources.catalogue)?)
}

fn duration(text: &str, opts: &AppOptions) -> Result<()> {
    match explain_duration(text, &opts.durations) {
        Some(m) => println!("{:.1}\t{}", m.hours, m.rule),
        None => println!("unparsed"),
    }
    Ok(())
}

fn print_list(view: &CatalogueView<'_>, limit: Option<usize>) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let n = limit.unwrap_or(usize::MAX);
    for r in view.iter().take(n) {
        writeln!(
            out,
            "{:>4}  {}  [{}]  {}  {}",
            r.id,
            r.title,
            r.domain,
            r.platform,
            data::duration_display(r)
        )?;
    }
    writeln!(out, "-- {} of {} course(s)", view.len().min(n), view.catalogue().len())?;
    Ok(())
}

fn print_detail(r: &NormalizedRecord) {
    println!("#{} {}", r.id, r.title);
    for (k, v) in [
        ("Domain", r.domain.as_str()),
        ("Focus area", r.focus_area.as_str()),
        ("Platform", r.platform.as_str()),
        ("Type", r.resource_type.as_str()),
        ("Level", r.level.as_str()),
        ("Format", r.format.as_str()),
        ("Journey stage", r.journey_stage.as_str()),
    ] {
        if !v.is_empty() {
            println!("  {k:<14} {v}");
        }
    }
    println!("  {:<14} {}", "Duration", data::duration_display(r));
    if let Some(link) = r.link() {
        println!("  {:<14} {}", "Link", link);
    }
    if let Some(text) = data::detail_outcomes(r) {
        println!("\nLearning outcomes:\n{text}");
    }
    if let Some(text) = data::detail_prerequisites(r) {
        println!("\nPrerequisites:\n{text}");
    }
    let skills = data::detail_skills(r);
    if !skills.is_empty() {
        println!("\nSkills: {}", skills.join(", "));
    }
}

fn print_stats(s: &Stats) {
    println!("Total courses   {}", s.total);
    println!("Domains         {}", s.domains);
    println!("Platforms       {}", s.platforms);
    println!("Showing now     {}", s.visible);
    println!("With duration   {}", s.with_duration);
    match s.avg_duration {
        Some(h) => println!("Avg duration    {h:.1} hours"),
        None => println!("Avg duration    N/A"),
    }
    println!("Top platform    {}", s.top_platform.as_deref().unwrap_or("N/A"));
    println!("Top level       {}", s.top_level.as_deref().unwrap_or("N/A"));
    if !s.top_skills.is_empty() {
        println!("Top skills:");
        for (tag, n) in &s.top_skills {
            println!("  {n:>4}  {tag}");
        }
    }
}

fn list_tutors(opts: &AppOptions, focus: Option<&str>) -> Result<()> {
    let table = tutors::load_tutors(&opts.sources.tutors)?;
    let rows: Vec<_> = match focus {
        Some(f) => table.matching(f).collect(),
        None => table.tutors.iter().collect(),
    };
    for t in &rows {
        println!("{}\t{}\t{}\t{}", t.name, t.expertise.join(", "), t.availability, t.booking_link);
    }
    eprintln!("{} of {} tutor(s)", rows.len(), table.len());
    Ok(())
}
