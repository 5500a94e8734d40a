use bookie_admin::utils::{logger, validation::Validate};
use bookie_admin::{blocking, AdminError, BookieInfo, CliArgs, Command};
use clap::Parser;

fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting bookie-admin");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.admin_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let admin = match blocking::BookiesAdmin::new(&config) {
        Ok(admin) => admin,
        Err(e) => {
            tracing::error!("Failed to build admin client: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&admin, &args.command) {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {}", e);

        let exit_code = match e {
            AdminError::Config { .. } => 2,
            AdminError::NotFound { .. } => 3,
            AdminError::Timeout { .. } => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

fn run(admin: &blocking::BookiesAdmin, command: &Command) -> bookie_admin::Result<()> {
    match command {
        Command::RacksPlacement => {
            let racks = admin.racks_info()?;
            tracing::info!("Fetched rack placement for {} bookies", racks.len());
            println!("{}", serde_json::to_string_pretty(&racks)?);
        }
        Command::Get { bookie } => {
            let info = admin.bookie_rack_info(bookie)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Set {
            bookie,
            rack,
            group,
            hostname,
        } => {
            let info = BookieInfo {
                rack: rack.clone(),
                hostname: hostname.clone(),
            };
            admin.update_bookie_rack_info(bookie, group, &info)?;
            println!("Updated rack placement for {}", bookie);
        }
        Command::Delete { bookie } => {
            admin.delete_bookie_rack_info(bookie)?;
            println!("Deleted rack placement for {}", bookie);
        }
    }

    Ok(())
}
