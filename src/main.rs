mod cli;
mod config;
mod gateways;
mod repl;
mod view;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = cli::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
