use clap::Parser;

use crate::app_config::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "brew")]
#[command(about = "Price a coffee and the condiments added to it")]
pub struct CliArgs {
    /// Base drink, e.g. `espresso` or `house-blend`
    pub drink: Option<String>,

    /// Condiments in the order they are added, e.g. `--with milk,sugar`
    #[arg(short = 'w', long = "with", value_delimiter = ',')]
    pub condiments: Vec<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Print an itemised receipt")]
    pub receipt: bool,

    #[arg(long, help = "List the drinks and condiments on offer")]
    pub menu: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
