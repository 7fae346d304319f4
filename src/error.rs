#[derive(Debug)]
pub enum LootplanError {
    /// The factory was handed a type tag outside the closed set it accepts.
    UnknownType { tag: String },
}

impl std::fmt::Display for LootplanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LootplanError::UnknownType { tag } => {
                write!(f, "unrecognized lootplan type tag: {tag:?}")
            }
        }
    }
}

impl std::error::Error for LootplanError {}
