use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use text_processor::wildcard::Expander;
use text_processor::{Library, Settings, registry};

#[derive(Parser, Debug, Clone)]
#[command(about = "Expand wildcard prompts from the command line")]
struct Args {
    /// Base directory, defaults to `TEXT_PROCESSOR_BASE` or the current directory.
    #[clap(long, global = true)]
    base: Option<Utf8PathBuf>,

    /// TOML settings file.
    #[clap(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Expand each TEXT as one prompt slot and print the joined result.
    Expand {
        #[clap(long, default_value_t = 0)]
        seed: u64,

        #[clap(required = true)]
        texts: Vec<String>,
    },
    /// List the wildcard names of the library.
    Wildcards,
    /// List the registered nodes.
    Nodes,
}

fn settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path).with_context(|| format!("loading {path}"))?,
        None => Settings::from_env()?,
    };

    if let Some(base) = &args.base {
        settings.base = base.clone();
    }

    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    text_processor::init_logging()?;

    let args = Args::parse();
    let env = settings(&args)?.finish();

    match args.command {
        Command::Expand { seed, texts } => {
            let library = Library::open(&env.wildcards);
            println!("{}", Expander::new(&library).expand_slots(seed, &texts));
        }
        Command::Wildcards => {
            for name in Library::new(&env.wildcards).names() {
                println!("{name}");
            }
        }
        Command::Nodes => {
            for entry in registry() {
                println!("{:<24} {:<36} {}", entry.id, entry.display_name, entry.category);
            }
        }
    }

    Ok(())
}
