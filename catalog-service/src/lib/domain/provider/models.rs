use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Supplier record.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing filters; both optional, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ProviderFilter {
    /// Case-sensitive substring match on the name.
    pub name_contains: Option<String>,
    /// Exact country code match.
    pub country_code: Option<String>,
}

#[derive(Debug)]
pub struct CreateProviderCommand {
    pub name: String,
    pub country_code: String,
}

/// Partial update; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateProviderCommand {
    pub name: Option<String>,
    pub country_code: Option<String>,
}
