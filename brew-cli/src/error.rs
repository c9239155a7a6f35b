use brew_catalog::MenuError;

#[derive(Debug, thiserror::Error)]
pub enum BrewError {
    #[error("No drink given; pass a drink name or --menu")]
    MissingDrink,

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BrewError {
    /// Process exit code: 2 for bad input, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            BrewError::MissingDrink | BrewError::Menu(_) => 2,
            BrewError::Serialization(_) => 1,
        }
    }
}

pub type BrewResult<T> = Result<T, BrewError>;
