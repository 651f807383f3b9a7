pub mod client;
pub mod neynar;
pub mod fetcher;

pub use client::ProfileSource;
pub use neynar::NeynarClient;
pub use fetcher::{placeholder_profile, SocialProfileFetcher};
