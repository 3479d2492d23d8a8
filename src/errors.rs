use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node id already exists in tree: {0}")]
    DuplicateId(String),

    #[error("node cannot be its own parent: {0}")]
    SelfParent(String),

    #[error("destination node not found: {0}")]
    DestinationNotFound(String),

    #[error("cannot move node {id} into its own descendant {destination}")]
    CyclicMove {
        id: String,
        destination: String,
    },
}

pub type TreeResult<T> = Result<T, TreeError>;
