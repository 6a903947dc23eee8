use anyhow::Result;
use clap::{Parser, Subcommand};
use dockpin::config::{default_config_path, load_config_from};
use dockpin::sources::catalog::Catalog;
use dockpin::sources::pinned::{self, PinnedApps};
use dockpin::{file_exists, normalize, IdentityResolver, PinManager};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to read instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pinned list file to use instead of the configured one
    #[arg(short, long)]
    pins: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the comparison key for an id
    Normalize { id: String },
    /// Print the canonical desktop-entry id
    Resolve { id: String },
    /// Print the display name
    Name { id: String },
    /// Print whether an id is pinned
    IsPinned { id: String },
    /// Pin an id, or unpin it if already pinned
    Toggle { id: String },
    /// Pin an id unless already pinned
    Pin { id: String },
    /// Unpin an id if pinned
    Unpin { id: String },
    /// Print the pinned list in order
    List,
    /// Print whether a file exists
    Exists { path: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = load_config_from(&config_path)?;
    let pins_path = args.pins.clone().unwrap_or_else(|| pinned::pins_path(&config));

    let catalog = Catalog::from_config(&config);
    let resolver = IdentityResolver::with_lookup(&catalog);
    let manager = PinManager::new(resolver);

    match args.command {
        Command::Normalize { id } => println!("{}", normalize(id.as_str())),
        Command::Resolve { id } => println!("{}", resolver.resolve_canonical_id(&id)),
        Command::Name { id } => println!("{}", resolver.resolve_display_name(&id)),
        Command::IsPinned { id } => {
            let pins = pinned::load_pins(&pins_path);
            println!("{}", manager.is_pinned(id.as_str(), &pins.pinned));
        }
        Command::Toggle { id } => print_pins(&pinned::update_pins(&pins_path, |list| manager.toggle_pinned(id.as_str(), list))?),
        Command::Pin { id } => print_pins(&pinned::update_pins(&pins_path, |list| manager.pin(id.as_str(), list))?),
        Command::Unpin { id } => print_pins(&pinned::update_pins(&pins_path, |list| manager.unpin(id.as_str(), list))?),
        Command::List => {
            print_pins(&pinned::load_pins(&pins_path));
        }
        Command::Exists { path } => println!("{}", file_exists(&path)),
    }

    Ok(())
}

fn print_pins(pins: &PinnedApps) {
    for id in &pins.pinned {
        println!("{}", id);
    }
}
