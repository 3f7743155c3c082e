use clap::{Args, Parser, Subcommand};
use powwow::core::message::Artifact;

/// `powwow` - Marketing Pow Wow message maker.
#[derive(Parser, Debug)]
#[command(name = "powwow")]
#[command(version)]
#[command(
    about = "Turn a few business facts into positioning, AIDA and 4Ps copy.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every generated copy block for the saved form
    Show {
        /// Emit the blocks as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the saved form fields
    Fields,

    /// Change one form field (brand, audience, problem, outcome, category,
    /// differentiator, proof, offer, price, place, cta)
    Set {
        field: String,
        /// New value; may be empty
        value: String,
    },

    /// Restore the preset form
    Reset,

    /// Copy a block (positioning, tagline, headlines, dm-opener, four-ps, aida)
    Copy {
        artifact: Artifact,
        /// Copy only the Nth line of a list block (1-based)
        #[arg(long)]
        item: Option<usize>,
    },

    /// Copy a link that carries the whole form
    Share {
        /// Page the link should point at (default: [share] base_url)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Load a form from a share link or `#simple=...` fragment
    Import { link: String },

    /// Ask the model for structured copy and print the JSON
    Generate(GenerateArgs),

    /// Start the HTTP gateway (POST /generate)
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[arg(long)]
    pub business: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    #[arg(long)]
    pub offer: Option<String>,
    #[arg(long)]
    pub tone: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    /// Principle to emphasize, e.g. AIDA or 4Ps
    #[arg(long)]
    pub principle: Option<String>,
}
