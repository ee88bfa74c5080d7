use anyhow::Result;
use iddfs_trace::{App, Args, Command};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const CHAIN_GRAPH: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
    "links": [
        {"source": "A", "target": "B"},
        {"source": {"id": "B", "x": 10.0, "y": 4.5}, "target": {"id": "C"}},
        {"source": "C", "target": "missing"}
    ]
}"#;

fn basic_args(command: Command, output: &Path) -> Args {
    Args {
        command,
        output: Some(output.to_str().unwrap().to_owned()),
        pretty: false,
        verbose: 1,
    }
}

fn trace_command(graph: Option<String>, preset: Option<&str>, start: &str, goal: &str) -> Command {
    Command::Trace {
        graph,
        preset: preset.map(str::to_owned),
        start: start.to_owned(),
        goal: goal.to_owned(),
        max_depth: 3,
        summary: true,
    }
}

fn run(args: Args) -> Result<()> {
    simple_logging::log_to_stderr(log::LevelFilter::Debug);
    let settings = args.try_into()?;
    App::new(settings).run()
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_generate_seeded() -> Result<()> {
    let dir = tempdir()?;
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for output in [&first, &second] {
        let command = Command::Generate {
            nodes: 30,
            seed: Some(99),
        };
        run(basic_args(command, output))?;
    }

    let graph: graph::Graph = serde_json::from_str(&std::fs::read_to_string(&first)?)?;
    assert_eq!(30, graph.nodes.len());
    assert_eq!("1", graph.nodes[0].id);
    assert!(graph.is_connected());
    assert_eq!(
        std::fs::read_to_string(&first)?,
        std::fs::read_to_string(&second)?,
        "same seed gives same graph"
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_trace_graph_file() -> Result<()> {
    let dir = tempdir()?;
    let graph = write_file(dir.path(), "graph.json", CHAIN_GRAPH)?;
    let output = dir.path().join("trace.json");

    let graph = Some(graph.to_str().unwrap().to_owned());
    run(basic_args(trace_command(graph, None, "A", "C"), &output))?;

    let trace = read_json(&output)?;
    let events = trace.as_array().unwrap();
    assert_eq!(24, events.len());

    let first = &events[0];
    assert_eq!("new_iteration", first["type"]);
    assert_eq!("A", first["node"]);
    assert_eq!(0, first["depth"]);
    assert_eq!(0, first["depthLimit"]);
    assert_eq!(2, first["pseudocodeLine"]);
    assert!(first["path"].as_array().unwrap().is_empty());

    let last = events.last().unwrap();
    assert_eq!("goal_found", last["type"]);
    assert_eq!(5, last["pseudocodeLine"]);
    assert_eq!(serde_json::json!(["A", "B", "C"]), last["path"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_trace_preset() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("trace.json");

    run(basic_args(
        trace_command(None, Some("unbalanced-tree"), "A", "G"),
        &output,
    ))?;

    let trace = read_json(&output)?;
    let events = trace.as_array().unwrap();
    let last = events.last().unwrap();
    assert_eq!("goal_found", last["type"]);
    assert_eq!(2, last["depthLimit"]);
    assert_eq!(serde_json::json!(["A", "F", "G"]), last["path"]);

    let iterations = events
        .iter()
        .filter(|e| e["type"] == "new_iteration")
        .count();
    assert_eq!(3, iterations);

    dir.close()?;
    Ok(())
}

#[test]
fn test_trace_unreachable_goal() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("trace.json");

    run(basic_args(
        trace_command(None, Some("balanced-tree"), "B", "C"),
        &output,
    ))?;

    let trace = read_json(&output)?;
    let events = trace.as_array().unwrap();
    assert!(events.iter().all(|e| e["type"] != "goal_found"));
    let last = events.last().unwrap();
    assert_eq!("backtrack", last["type"]);
    assert_eq!("B", last["node"]);
    assert_eq!(3, last["depthLimit"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_request_iddfs() -> Result<()> {
    let dir = tempdir()?;
    let request = format!(
        r#"{{"graph": {CHAIN_GRAPH}, "startNode": "A", "goalNode": "A", "maxDepth": 0}}"#
    );
    let request = write_file(dir.path(), "request.json", &request)?;
    let output = dir.path().join("response.json");

    let command = Command::Request {
        file: request.to_str().unwrap().to_owned(),
        seed: None,
    };
    run(basic_args(command, &output))?;

    let trace = read_json(&output)?;
    let types: Vec<_> = trace
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(vec!["new_iteration", "visit", "visit", "goal_found"], types);

    dir.close()?;
    Ok(())
}

#[test]
fn test_request_generate_clamps() -> Result<()> {
    let dir = tempdir()?;
    let request = write_file(dir.path(), "request.json", r#"{"numNodes": 500}"#)?;
    let output = dir.path().join("response.json");

    let command = Command::Request {
        file: request.to_str().unwrap().to_owned(),
        seed: None,
    };
    run(basic_args(command, &output))?;

    let graph: graph::Graph = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(graph::MAX_NODES, graph.nodes.len());
    assert_eq!("50", graph.nodes[49].id);
    assert!(graph.is_connected());

    dir.close()?;
    Ok(())
}

#[test]
fn test_request_generate_seeded() -> Result<()> {
    let dir = tempdir()?;
    let request = write_file(dir.path(), "request.json", r#"{"numNodes": 12}"#)?;
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for output in [&first, &second] {
        let command = Command::Request {
            file: request.to_str().unwrap().to_owned(),
            seed: Some(5),
        };
        run(basic_args(command, output))?;
    }

    let graph: graph::Graph = serde_json::from_str(&std::fs::read_to_string(&first)?)?;
    assert_eq!(12, graph.nodes.len());
    assert_eq!(
        std::fs::read_to_string(&first)?,
        std::fs::read_to_string(&second)?,
        "same seed gives same graph"
    );

    // a seeded request gives the same graph as `generate` with that seed.
    let generated = dir.path().join("generated.json");
    let command = Command::Generate {
        nodes: 12,
        seed: Some(5),
    };
    run(basic_args(command, &generated))?;
    assert_eq!(
        std::fs::read_to_string(&first)?,
        std::fs::read_to_string(&generated)?
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_request_rejects_bad_depth() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("response.json");

    for depth in [-1, iddfs_trace::MAX_DEPTH_CAP as i64 + 1] {
        let request = format!(
            r#"{{"graph": {CHAIN_GRAPH}, "startNode": "A", "goalNode": "C", "maxDepth": {depth}}}"#
        );
        let request = write_file(dir.path(), "request.json", &request)?;
        let command = Command::Request {
            file: request.to_str().unwrap().to_owned(),
            seed: None,
        };
        assert!(run(basic_args(command, &output)).is_err());
    }
    assert!(!output.exists(), "no output written for rejected requests");

    dir.close()?;
    Ok(())
}

#[test]
fn test_trace_missing_graph_file() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("trace.json");
    let missing = dir.path().join("nope.json").to_str().unwrap().to_owned();

    let result = run(basic_args(
        trace_command(Some(missing), None, "A", "B"),
        &output,
    ));
    assert!(result.is_err());

    dir.close()?;
    Ok(())
}
