use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brix", version, about = "Brix CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount the sample block and patch it a few times.
    Demo {
        /// Number of patches to apply after mounting
        #[arg(long, default_value_t = 3)]
        patches: u32,
    },
    /// Print the sample template's extracted edit list.
    Edits,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { patches } => {
            print!("{}", brix_cli::demo_cmd(patches)?);
        }
        Commands::Edits => {
            print!("{}", brix_cli::edits_cmd());
        }
    }
    Ok(())
}
