pub mod client;
pub mod alchemy;
pub mod node;
pub mod normalizer;
pub mod fetcher;

pub use client::{NonceSource, TransferIndexer};
pub use alchemy::AlchemyClient;
pub use node::NodeClient;
pub use fetcher::TransactionFetcher;
