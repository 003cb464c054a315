use clap::Parser;
use vercheck::{commands, load_config, load_registry, render_failure, resolve_registry_path, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        render_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let path = resolve_registry_path(cli.registry.as_deref(), &config)?;
    let registry = load_registry(&path)?;
    commands::handle_commands(cli, &registry)
}
