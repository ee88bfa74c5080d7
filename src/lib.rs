/// High-level command line app
mod app;
/// Definition of command-line args
mod args;
/// Reading and writing JSON through files or stdio
mod files;
/// Request bodies and their validation
mod request;
/// Interpreted command-line settings
mod settings;
/// Text UI
mod ui;

// exported for tests:
pub use app::App;
pub use args::{Args, Command};
pub use request::{GenerateGraphRequest, IddfsRequest, MAX_DEPTH_CAP};
pub use settings::Settings;

/// Run the command-line app.
pub fn run() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logging::log_to_stderr(log_level);

    // INTERPRET SETTINGS ///////////////
    let settings: Settings = args.try_into()?;

    // RUN THE THING /////////////////
    let app = App::new(settings);
    app.run()?;

    Ok(())
}
