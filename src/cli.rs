// src/cli.rs
use std::env;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::config::consts::GROUP_MATCH_LIMIT;
use crate::config::options::AppOptions;
use crate::core::{BoxError, Fetch, HttpFetcher};
use crate::days::{self, Weekday};
use crate::poll::{self, CancelToken, PollTask};
use crate::progress::Progress;
use crate::{refresh, remaining, render};
use crate::store::Store;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Today,
    Tomorrow,
    Day(Weekday),
    Week,
    Left,
    Update,
    SyncIds,
    Groups(String),
    Poll,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    pub group: Option<String>,
    pub date: Option<NaiveDate>,
    pub store_dir: Option<String>,
    pub base_url: Option<String>,
    pub offline: bool,
}

impl Params {
    pub fn new(command: Command) -> Self {
        Self { command, group: None, date: None, store_dir: None, base_url: None, offline: false }
    }

    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(dir) = &self.store_dir { opts.store.set_dir(dir); }
        if let Some(url) = &self.base_url { opts.fetch.base_url = url.trim().to_string(); }
        opts
    }
}

pub fn run() -> Result<(), BoxError> {
    let params = parse_args(env::args().skip(1))?;
    if params.command == Command::Help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let opts = params.options();
    crate::log::init(opts.store.log_path());
    logf!("CLI: {:?}", params.command);

    let mut store = Store::load(opts.store.clone());
    let now = match params.date {
        Some(d) => d.and_time(Local::now().time()),
        None => Local::now().naive_local(),
    };

    match &params.command {
        Command::Groups(query) => {
            for name in matches_or_all(&store, query) {
                println!("{}", name);
            }
            Ok(())
        }
        Command::SyncIds => {
            let fetcher = HttpFetcher::new(&opts.fetch)?;
            let mut progress = ConsoleProgress;
            let summary = refresh::sync_group_ids(&mut store, &fetcher, &opts, Some(&mut progress));
            println!("{}", summary);
            Ok(())
        }
        Command::Poll => run_poll(store, &opts),
        Command::Update if params.group.is_none() => {
            let fetcher = HttpFetcher::new(&opts.fetch)?;
            let shared = Arc::new(Mutex::new(store));
            let summary = poll::run_cycle(&shared, &fetcher, &opts, &CancelToken::new());
            println!("Оновлено груп: {}, з помилками: {}", summary.refreshed, summary.failed);
            Ok(())
        }
        Command::Update => {
            let group = checked_group(&store, params.group.as_deref())?;
            let fetcher = HttpFetcher::new(&opts.fetch)?;
            let report = refresh::update_group(&mut store, &fetcher, &opts, &group)?;
            println!("{}", report);
            Ok(())
        }
        query => {
            let group = checked_group(&store, params.group.as_deref())?;
            if !params.offline {
                match HttpFetcher::new(&opts.fetch) {
                    Ok(fetcher) => refresh::refresh_on_demand(&mut store, &fetcher, &opts, &group),
                    Err(e) => loge!("CLI: no HTTP client, using cache: {}", e),
                }
            }
            println!("{}", answer(&store, query, &group, now));
            Ok(())
        }
    }
}

/// Text for one of the read-only query commands.
pub fn answer(store: &Store, command: &Command, group: &str, now: NaiveDateTime) -> String {
    let today = now.date();
    match command {
        Command::Today => render::render_day(store.schedule(), group, today),
        Command::Tomorrow => render::render_day(store.schedule(), group, today + Duration::days(1)),
        Command::Day(day) => {
            let date = days::date_for_weekday_in_current_week(*day, today);
            render::render_day(store.schedule(), group, date)
        }
        Command::Week => {
            let header = render::week_header(group, today);
            join!(&header, "\n\n", &render::render_week(store.schedule(), group, today))
        }
        Command::Left => remaining::render_remaining(now, store.lessons(group, &days::fmt_iso(today))),
        _ => String::new(),
    }
}

fn run_poll(store: Store, opts: &AppOptions) -> Result<(), BoxError> {
    let fetcher: Arc<dyn Fetch + Send + Sync> = Arc::new(HttpFetcher::new(&opts.fetch)?);
    let handle = PollTask::spawn(Arc::new(Mutex::new(store)), fetcher, opts.clone());
    eprintln!("Polling every {}s. Press Enter to stop.", opts.poll.interval.as_secs());

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);

    handle.cancel();
    handle.join();
    Ok(())
}

fn matches_or_all<'a>(store: &'a Store, query: &str) -> Vec<&'a str> {
    if query.trim().is_empty() {
        store.groups().iter().map(String::as_str).collect()
    } else {
        store.find_groups(query)
    }
}

/// The group a query runs for. Registry membership is enforced only when a
/// registry exists; otherwise any non-blank name goes through.
fn checked_group(store: &Store, group: Option<&str>) -> Result<String, BoxError> {
    let group = group.map(str::trim).unwrap_or_default();
    if group.is_empty() {
        return Err("Missing group: use -g <name>".into());
    }
    if store.groups().is_empty() || store.contains_group(group) {
        return Ok(group.to_string());
    }

    let hints = store.find_groups(group);
    if hints.is_empty() {
        return Err(format!("Unknown group: {}", group).into());
    }
    let shown: Vec<&str> = hints.into_iter().take(GROUP_MATCH_LIMIT).collect();
    Err(format!("Unknown group: {}. Did you mean: {}", group, shown.join(", ")).into())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, BoxError> {
    let mut params = Params::new(Command::Today);
    let mut command: Option<Command> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-g" | "--group" => params.group = Some(args.next().ok_or("Missing value for --group")?),
            "--date" => {
                let v = args.next().ok_or("Missing value for --date")?;
                params.date = Some(days::parse_iso(&v).ok_or_else(|| format!("Invalid date: {}", v))?);}
            "--store" => params.store_dir = Some(args.next().ok_or("Missing value for --store")?),
            "--base-url" => params.base_url = Some(args.next().ok_or("Missing value for --base-url")?),
            "--offline" => params.offline = true,
            "-h" | "--help" => command = Some(Command::Help),
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => match command.as_mut() {
                None => command = Some(parse_command(&a, &mut args)?),
                Some(Command::Groups(query)) if query.is_empty() => *query = a,
                Some(_) => return Err(format!("Unexpected argument: {}", a).into()),
            },
        }
    }

    if let Some(c) = command { params.command = c; }
    Ok(params)
}

fn parse_command<I: Iterator<Item = String>>(name: &str, rest: &mut I) -> Result<Command, BoxError> {
    Ok(match name.to_lowercase().as_str() {
        "today" => Command::Today,
        "tomorrow" => Command::Tomorrow,
        "day" => {
            let v = rest.next().ok_or("Missing day name")?;
            Command::Day(days::normalize_day_key(&v).ok_or_else(|| format!("Unknown day: {}", v))?)
        }
        "week" => Command::Week,
        "left" => Command::Left,
        "update" => Command::Update,
        "sync-ids" => Command::SyncIds,
        "groups" => Command::Groups(String::new()),
        "poll" => Command::Poll,
        "help" => Command::Help,
        other => match days::normalize_day_key(other) {
            // bare day name: `nung_sched пʼятниця -g ...`
            Some(day) => Command::Day(day),
            None => return Err(format!("Unknown command: {}", other).into()),
        },
    })
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { eprintln!("Groups: {}", total); }
    fn item_done(&mut self, group: &str) { eprintln!("  ok   {}", group); }
    fn item_failed(&mut self, group: &str, reason: &str) { eprintln!("  fail {} ({})", group, reason); }
}
