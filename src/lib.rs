// Declare modules within this crate
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod translations;

// Re-export the main components for users of this crate
pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::ApiClientError;
pub use models::{AdminUserSubscription, HistoryQuery, SubscriptionTierUpdate, TranslationHistoryPage};
pub use translations::TranslationsApi;
