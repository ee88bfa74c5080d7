use colored::Colorize;

use graph::Preset;
use traverse::{SearchResult, TraceSummary};
use util::Timer;

use crate::settings::Settings;

/// All interactions with the text UI should go through this struct.
/// JSON output goes through [`crate::files::Output`] instead.
pub struct Ui {
    /// -v setting, displays extra text info to user
    pub verbose: bool,
    /// keeps track of time for each step
    timer: Timer,
}

impl Ui {
    pub fn new(settings: &Settings) -> Self {
        Self {
            verbose: settings.verbose > 0,
            timer: Timer::now(),
        }
    }

    pub fn start_timer(&mut self) {
        if self.verbose {
            self.timer.reset();
        }
    }

    pub fn print_elapsed(&self, what: &str) {
        if self.verbose {
            self.timer.print_elapsed(what);
        }
    }

    pub fn verbose_progress(&self, msg: &str) {
        if self.verbose {
            eprint!("{}... ", msg.magenta());
        }
    }

    pub fn verbose_progress_display<T: std::fmt::Display>(&self, msg: &str, arg: T) {
        if self.verbose {
            eprint!("{} {}... ", msg.magenta(), arg);
        }
    }

    pub fn done(&self) {
        if self.verbose {
            eprintln!("{}.", "done".green());
        }
    }

    /// Print a human-readable recap of a finished search to stderr.
    pub fn print_summary(&self, summary: &TraceSummary, goal_reachable: bool) {
        let result = summary.result.to_string();
        let result = match summary.result {
            SearchResult::Found => result.green(),
            SearchResult::Cutoff => result.yellow(),
            SearchResult::NotFound => result.red(),
        };
        match summary.found_at {
            Some(limit) => eprintln!("\nSearch result: {result} at depth limit {limit}"),
            None => eprintln!("\nSearch result: {result}"),
        }
        if !goal_reachable {
            eprintln!("{}", "Goal is not reachable from start at any depth.".yellow());
        }
        if let Some(path) = &summary.goal_path {
            eprintln!("  path:       {}", path.join(" -> ").cyan());
        }

        let per_iteration: Vec<String> = summary
            .iterations
            .iter()
            .map(|it| format!("limit {}: {}", it.depth_limit, it.expansions))
            .collect();
        eprintln!("  iterations: {}", summary.iterations.len());
        eprintln!(
            "  expansions: {} ({})",
            summary.expansions,
            per_iteration.join(", ")
        );
        eprintln!("  backtracks: {}", summary.backtracks);
        eprintln!("  deepest:    {}", summary.deepest);
        eprintln!("  events:     {}", summary.events);
    }

    /// List built-in graphs on stdout.
    pub fn print_presets(&self) {
        for preset in Preset::ALL {
            let graph = preset.graph();
            println!(
                "{} {} nodes, {} links",
                format!("{:<16}", preset.name()).cyan(),
                graph.nodes.len(),
                graph.links.len()
            );
        }
    }
}
