use colored::Colorize;

fn main() {
    if let Err(e) = iddfs_trace::run() {
        eprintln!("{}: {e:?}", "ERROR".red());
        std::process::exit(1);
    }
}
