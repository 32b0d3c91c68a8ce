//! CLI entry point for homecard

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homecard::config::{Layout, SlugStyle};
use homecard::content::CardInputs;
use homecard::HomeCard;

#[derive(Parser)]
#[command(name = "homecard")]
#[command(version)]
#[command(about = "Add a blog post card to a static site's homepage", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Site root holding the homepage (overrides `root` in _homecard.yml)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert a post card after the homepage's level 1 heading
    Add {
        #[command(flatten)]
        card: CardArgs,

        /// Overwrite the homepage instead of writing a reviewable copy next to it
        #[arg(long)]
        inplace: bool,
    },

    /// Print the post card without touching the homepage
    Render {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Remove the reviewable copy left by `add`
    Clean,

    /// Display version information
    Version,
}

#[derive(Args)]
struct CardArgs {
    /// Path to the html or markdown source of the post
    #[arg(short, long)]
    post: PathBuf,

    /// Path to the image shown on the card
    #[arg(short, long)]
    image: PathBuf,

    /// Card title (read from the post's front-matter if omitted)
    #[arg(short, long)]
    title: Option<String>,

    /// Card description (read from the post's front-matter if omitted)
    #[arg(short, long)]
    description: Option<String>,

    /// Text of the button linking to the post (defaults to the title)
    #[arg(short, long)]
    button: Option<String>,

    /// How the post's file name becomes its URL slug
    #[arg(long, value_enum)]
    slug_style: Option<SlugStyle>,

    /// Card layout
    #[arg(long, value_enum)]
    layout: Option<Layout>,
}

impl CardArgs {
    /// Apply layout overrides and build the inputs
    fn apply(self, hc: &mut HomeCard) -> CardInputs {
        if let Some(style) = self.slug_style {
            hc.config.slug_style = style;
        }
        if let Some(layout) = self.layout {
            hc.config.layout = layout;
        }

        CardInputs {
            post: hc.input_path(&self.post),
            image: hc.input_path(&self.image),
            title: self.title,
            description: self.description,
            button: self.button,
        }
    }
}

fn load(base_dir: &Path, root: Option<PathBuf>) -> Result<HomeCard> {
    let hc = HomeCard::new(base_dir)?;
    Ok(match root {
        Some(root) => hc.with_root(root)?,
        None => hc,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "homecard=debug,info"
    } else {
        "homecard=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let root = cli.root;

    match cli.command {
        Commands::Add { card, inplace } => {
            let mut hc = load(&base_dir, root)?;
            let inputs = card.apply(&mut hc);
            tracing::info!("Adding {:?} to {:?}", inputs.post, hc.index_path);
            let written = hc.add(&inputs, inplace)?;
            println!("Written: {}", written.display());
        }

        Commands::Render { card } => {
            let mut hc = load(&base_dir, root)?;
            let inputs = card.apply(&mut hc);
            println!("{}", hc.render(&inputs)?);
        }

        Commands::Clean => {
            let hc = load(&base_dir, root)?;
            hc.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("homecard version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
