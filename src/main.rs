use tracing_subscriber::EnvFilter;

mod audio;
mod catalog;
mod config;
mod error;
mod player;
mod runtime;
mod search;
mod session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = runtime::run() {
        eprintln!("rondo: {e}");
        std::process::exit(1);
    }
}
