use graph::Preset;

use crate::args::{Args, Command};
use crate::files::{Input, Output};
use crate::request;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no graph specified (use --graph FILE or --preset NAME)")]
    NoGraphSpecified,
    #[error("--graph and --preset can't be used together")]
    ConflictingGraphSources,
}

/// Where a trace's graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    File(Input),
    Preset(Preset),
}

/// What the app was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate {
        num_nodes: i64,
        seed: Option<u64>,
    },
    Trace {
        graph: GraphSource,
        start: String,
        goal: String,
        max_depth: u32,
        summary: bool,
    },
    Request {
        input: Input,
        seed: Option<u64>,
    },
    ListPresets,
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. presets are resolved and depths are checked.
#[derive(Debug)]
pub struct Settings {
    pub action: Action,
    pub output: Output,
    pub pretty: bool,
    pub verbose: u8,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::Generate { nodes, seed } => Action::Generate {
                num_nodes: nodes,
                seed,
            },
            Command::Trace {
                graph,
                preset,
                start,
                goal,
                max_depth,
                summary,
            } => {
                let graph = match (graph, preset) {
                    (Some(_), Some(_)) => return Err(Error::ConflictingGraphSources.into()),
                    (Some(path), None) => GraphSource::File(Input::from(path.as_str())),
                    (None, Some(name)) => GraphSource::Preset(name.parse()?),
                    (None, None) => return Err(Error::NoGraphSpecified.into()),
                };
                Action::Trace {
                    graph,
                    start,
                    goal,
                    max_depth: request::validate_max_depth(max_depth)?,
                    summary: summary || args.verbose > 0,
                }
            }
            Command::Request { file, seed } => Action::Request {
                input: Input::from(file.as_str()),
                seed,
            },
            Command::Presets => Action::ListPresets,
        };

        Ok(Self {
            action,
            output: Output::from(args.output.as_deref()),
            pretty: args.pretty,
            verbose: args.verbose,
        })
    }
}
