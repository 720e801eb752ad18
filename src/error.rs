use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed permutation source: {0}")]
    MalformedSource(String),

    #[error("Invalid permutation: letter '{0}' is the target of more than one position")]
    InvalidPermutation(char),

    #[error("Invalid reflector: {0}")]
    InvalidReflector(String),

    #[error("Unsupported symbol {symbol:?} at offset {offset}. Messages may only contain a-z, space and newline")]
    UnsupportedSymbol { symbol: char, offset: usize },

    #[error("Problem with {name}: {source}")]
    Component {
        name: String,
        #[source]
        source: Box<EnigmaError>,
    },
}

impl EnigmaError {
    /// Attach the name of the component (usually a file) that failed to load
    pub fn in_component(self, name: impl Into<String>) -> Self {
        Self::Component {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any component context stripped
    pub fn kind_root(&self) -> &EnigmaError {
        match self {
            Self::Component { source, .. } => source.kind_root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnigmaError>;
