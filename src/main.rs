use clap::Parser;
use macrotag::application::{
    data_from_pairs, ListTypesService, ParseTagService, RenderTagService,
};
use macrotag::cli::{format_tag, format_type_list, Cli, Commands};
use macrotag::error::MacrotagError;
use macrotag::infrastructure::{init_logging, Config};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MacrotagError> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::discover()?,
    };

    match cli.command {
        Commands::Parse { raw, data } => {
            let service = ParseTagService::new(&config);
            let tag = service.execute(&raw, data_from_pairs(&data)?)?;
            print!("{}", format_tag(&tag));
            Ok(())
        }
        Commands::Render { raw, data } => {
            let service = RenderTagService::new(&config);
            let output = service.execute(&raw, data_from_pairs(&data)?)?;
            println!("{}", output);
            Ok(())
        }
        Commands::Types => {
            let types = ListTypesService::new(&config).execute();
            println!("{}", format_type_list(&types).trim_end());
            Ok(())
        }
    }
}
