pub mod app_config;
pub mod cli;
pub mod error;
pub mod render;

pub use app_config::{AppConfig, OutputFormat};
pub use cli::CliArgs;
pub use error::{BrewError, BrewResult};

/// Produce the text the `brew` binary prints for one invocation
pub fn run(args: &CliArgs, config: &AppConfig) -> BrewResult<String> {
    if args.menu {
        return Ok(render::render_menu(config.output.format)?);
    }

    let drink = args.drink.as_deref().ok_or(BrewError::MissingDrink)?;
    let beverage = brew_catalog::compose(drink, args.condiments.as_slice())?;

    tracing::info!("Pricing '{}' ({} condiment(s))", beverage.describe(), beverage.depth());

    Ok(render::render_beverage(
        beverage.as_ref(),
        config.output.format,
        config.output.receipt,
    )?)
}
