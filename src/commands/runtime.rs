use crate::*;

pub fn handle_commands(cli: &Cli, registry: &Registry) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check => {
            let report = check_self(registry)?;
            print_one(cli.json, report, |r| {
                format!(
                    "{}: declared version {} matches the installed record",
                    r.package, r.declared
                )
            })?;
        }
        Commands::Show { package } => {
            let record = find_record(registry, package)?;
            print_one(cli.json, record, |r| format!("{}\t{}", r.name, r.version))?;
        }
        Commands::List => {
            print_out(cli.json, &registry.distributions, |d| {
                format!("{}\t{}", d.name, d.version)
            })?;
        }
    }
    Ok(())
}
