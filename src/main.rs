use clap::Parser;
use log::debug;

use fielder::cli::Cli;
use fielder::generate::generate;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    debug!("{:?}", cli);

    if let Some(target) = generate(&cli.options())? {
        println!("Generated {}", target.display());
    }
    Ok(())
}
