//! Billing and checkout types.

use serde::Deserialize;

/// Hosted checkout session created by the backend.
///
/// The client redirects the user to `checkout_url`; the payment flow itself
/// runs entirely on the payment provider's side.
#[derive(Debug, Clone, Deserialize)]
pub struct Checkout {
    pub checkout_url: String,
    pub session_id: String,
}

/// Subscription state for the current user.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingStatus {
    pub is_paid: bool,
    #[serde(rename = "stripe_customer_id")]
    pub customer_id: Option<String>,
    #[serde(rename = "stripe_subscription_id")]
    pub subscription_id: Option<String>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_status_from_backend_json() {
        let json = r#"{
            "is_paid": true,
            "stripe_customer_id": "cus_123",
            "stripe_subscription_id": null,
            "email": "trader@example.com"
        }"#;

        let status: BillingStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_paid);
        assert_eq!(status.customer_id.as_deref(), Some("cus_123"));
        assert!(status.subscription_id.is_none());
    }
}
