use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every canonical field against a dataset's headers
    Resolve {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        headers: HeaderArgs,

        #[arg(long, help = "Print the mapping as JSON instead of a table")]
        json: bool,

        #[arg(
            long,
            help = "If specified, writes the JSON mapping to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Find the header standing for one canonical field
    Lookup {
        #[command(flatten)]
        table: TableArgs,

        #[arg(long, help = "Canonical field name to look up")]
        name: String,

        #[command(flatten)]
        headers: HeaderArgs,

        #[arg(long, help = "Compare headers with aliases ignoring case")]
        ignore_case: bool,
    },
    /// Print the aliases listed for every canonical field
    Show {
        #[command(flatten)]
        table: TableArgs,

        #[arg(long, help = "Print the alias table as JSON")]
        json: bool,
    },
}

#[derive(Args)]
pub struct TableArgs {
    #[arg(
        long,
        help = "Alias table path (defaults to NAMETOOLS_TABLE from the environment)"
    )]
    pub table: Option<String>,

    #[arg(long, help = "Env file providing NAMETOOLS_TABLE")]
    pub env_file: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct HeaderArgs {
    #[arg(long, value_delimiter = ',', help = "Comma-separated dataset headers")]
    pub headers: Option<Vec<String>>,

    #[arg(long, help = "CSV dataset whose header row is resolved")]
    pub data: Option<String>,
}
