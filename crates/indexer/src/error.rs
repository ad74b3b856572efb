use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parser error: {0}")]
    MailboxError(#[from] mailgraph_mailbox::MailboxError),

    #[error("Invalid corpus path: {0}")]
    InvalidPath(String),
}
