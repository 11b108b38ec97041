// ============================================================================
// Café Business Rule Errors
// ============================================================================

/// Broad classification used by callers that only care about the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a key that is not on the menu
    InvalidArgument,
    /// The operation was called out of sequence
    InvalidOperation,
    /// A subscriber rejected the OrderPlaced event
    Subscriber,
}

#[derive(Debug, thiserror::Error)]
pub enum CafeError {
    #[error("Beverage type '{0}' is not recognized")]
    UnknownBeverage(String),

    #[error("Pricing strategy '{0}' is out of range")]
    UnknownPricingStrategy(String),

    #[error("Beverage must be served before {operation}")]
    NotServed { operation: &'static str },

    #[error("Pricing strategy must be set before applying pricing")]
    PricingStrategyNotSet,

    #[error("Failed to publish OrderPlaced event: {0}")]
    Publish(#[source] anyhow::Error),
}

impl CafeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CafeError::UnknownBeverage(_) | CafeError::UnknownPricingStrategy(_) => {
                ErrorKind::InvalidArgument
            }
            CafeError::NotServed { .. } | CafeError::PricingStrategyNotSet => {
                ErrorKind::InvalidOperation
            }
            CafeError::Publish(_) => ErrorKind::Subscriber,
        }
    }
}
