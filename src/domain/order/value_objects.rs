use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Where the in-flight order sits in serve -> customize -> price -> issue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Empty,
    Served,
    Customized,
    Priced,
    Issued,
}

impl OrderStatus {
    /// True once a beverage is held by the service
    pub fn has_beverage(&self) -> bool {
        !matches!(self, OrderStatus::Empty)
    }
}
