use std::error::Error;
use std::io;
use std::process::exit;

mod app;
mod concept;
mod configuration;
mod generator;
mod icons;
mod rasterizer;
mod summary;

fn run() -> Result<(), Box<dyn Error>> {
    env_logger::builder().format_timestamp(None).init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    app::run(
        rasterizer::driver::Engine::new,
        configuration::Configuration::from_env,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Failed to run: {}", e);
        let mut error = e.source();
        while let Some(e) = error {
            eprintln!("Caused by: {}", e);
            error = e.source();
        }
        exit(1);
    }
}
