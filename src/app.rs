use anyhow::{Context, Result};
use serde::Serialize;

use graph::{Graph, GraphGenerator};
use traverse::{Iddfs, Trace, TraceSummary};

use crate::files::Input;
use crate::request::{Request, TraceParams};
use crate::settings::{Action, GraphSource, Settings};
use crate::ui::Ui;

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let ui = Ui::new(&settings);
        Self { settings, ui }
    }

    /// Run the app, using settings to determine what to do.
    pub fn run(mut self) -> Result<()> {
        match self.settings.action.clone() {
            Action::Generate { num_nodes, seed } => {
                let graph = self.generate(num_nodes, seed);
                self.write(&graph)
            }
            Action::Trace {
                graph,
                start,
                goal,
                max_depth,
                summary,
            } => {
                let graph = self.load_graph(&graph)?;
                let params = TraceParams {
                    graph,
                    start,
                    goal,
                    max_depth,
                };
                let trace = self.trace(&params, summary);
                self.write(&trace.events)
            }
            Action::Request { input, seed } => self.answer_request(&input, seed),
            Action::ListPresets => {
                self.ui.print_presets();
                Ok(())
            }
        }
    }

    fn write<T: Serialize>(&self, val: &T) -> Result<()> {
        self.settings
            .output
            .write_json(val, self.settings.pretty)
            .context("while writing output")
    }
}

// GRAPHS ////////////////////
impl App {
    fn generate(&mut self, num_nodes: i64, seed: Option<u64>) -> Graph {
        self.ui
            .verbose_progress_display("Generating graph, requested nodes:", num_nodes);
        let graph = match seed {
            Some(seed) => {
                log::info!("generating graph with seed {seed}");
                GraphGenerator::seeded(seed).generate(num_nodes)
            }
            None => GraphGenerator::from_entropy().generate(num_nodes),
        };
        debug_assert!(graph.is_connected());
        self.ui.done();
        graph
    }

    fn load_graph(&self, source: &GraphSource) -> Result<Graph> {
        match source {
            GraphSource::Preset(preset) => {
                log::debug!("using preset graph {preset}");
                Ok(preset.graph())
            }
            GraphSource::File(input) => {
                self.ui.verbose_progress_display("Reading graph from", input);
                let mut strbuf = String::with_capacity(0); // resized on read.
                let graph = input
                    .read_json(&mut strbuf)
                    .context("while loading graph")?;
                self.ui.done();
                Ok(graph)
            }
        }
    }
}

// TRACING ///////////////////
impl App {
    fn trace(&mut self, params: &TraceParams, summary: bool) -> Trace {
        self.ui.verbose_progress("Tracing search");
        self.ui.start_timer();

        let search = Iddfs::new(&params.graph, &params.start, &params.goal);
        let trace = search.run(params.max_depth);

        self.ui.done();
        self.ui.print_elapsed("Tracing search");
        log::info!(
            "trace from {} to {} has {} events, result {}",
            params.start,
            params.goal,
            trace.events.len(),
            trace.result,
        );

        if summary {
            self.ui
                .print_summary(&TraceSummary::new(&trace), search.goal_reachable());
        }
        trace
    }

    fn answer_request(&mut self, input: &Input, seed: Option<u64>) -> Result<()> {
        let mut strbuf = String::with_capacity(0);
        let request: Request = input
            .read_json(&mut strbuf)
            .context("while decoding request")?;

        match request {
            Request::Generate(req) => {
                log::debug!("answering generate request for {} nodes", req.num_nodes);
                let graph = self.generate(req.num_nodes, seed);
                self.write(&graph)
            }
            Request::Iddfs(req) => {
                log::debug!(
                    "answering trace request {} -> {}, max depth {}",
                    req.start_node,
                    req.goal_node,
                    req.max_depth
                );
                let params = req.validate()?;
                let trace = self.trace(&params, self.ui.verbose);
                self.write(&trace.events)
            }
        }
    }
}
