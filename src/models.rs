use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const DEFAULT_HISTORY_OFFSET: i64 = 0;

/// Body of `PUT /translations/admin/subscription`. The tier is passed through as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionTierUpdate {
    pub email: String,
    pub tier: String,
}

/// Pagination for `GET /translations/history`. No bounds checks; the server decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    pub limit: i64,
    pub offset: i64,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        HistoryQuery {
            limit: DEFAULT_HISTORY_LIMIT,
            offset: DEFAULT_HISTORY_OFFSET,
        }
    }
}

/// One row of the admin subscription listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminUserSubscription {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub subscription: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TranslationHistoryPage {
    pub success: Option<bool>,
    pub count: u64,
    pub total: u64,
    pub history: Vec<Value>,
}
