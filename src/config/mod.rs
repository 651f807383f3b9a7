pub mod settings;

pub use settings::{Settings, AppSettings, ChainSettings, SocialSettings, ApiSettings};
