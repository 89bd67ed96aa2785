//! Trading signal types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        };
        f.pad(s)
    }
}

/// A single trading recommendation.
///
/// Signals are read-only: the backend constructs them and the client only
/// renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Instrument symbol
    pub symbol: String,
    /// Trade direction
    pub action: Action,
    /// Entry price
    pub price: Decimal,
    /// Profit target
    pub target: Decimal,
    /// Stop-loss level
    pub stoploss: Decimal,
    /// Generation time, preformatted by the backend
    pub timestamp: String,
}

/// One page of signals plus the subscription metadata that gates it.
///
/// For free-tier users the backend returns only a subset of signals together
/// with an upsell `message`; paid users get the full list and no message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsPage {
    pub signals: Vec<Signal>,
    pub total: usize,
    pub is_paid: bool,
    /// Whether the backend served this page from its cache
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SignalsPage {
    /// Upsell text to surface for free-tier users, if any.
    pub fn upsell(&self) -> Option<&str> {
        if self.is_paid {
            None
        } else {
            self.message.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_action_wire_format() {
        assert_eq!(serde_json::to_string(&Action::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Action::Sell).unwrap(), "\"SELL\"");
        assert_eq!(
            serde_json::from_str::<Action>("\"SELL\"").unwrap(),
            Action::Sell
        );
        assert!(serde_json::from_str::<Action>("\"HOLD\"").is_err());
    }

    #[test]
    fn test_signals_page_from_backend_json() {
        let json = r#"{
            "signals": [
                {
                    "symbol": "NIFTY",
                    "action": "BUY",
                    "price": 21500.5,
                    "target": 22145.52,
                    "stoploss": 21070.49,
                    "timestamp": "2024-01-15 10:30:00"
                }
            ],
            "total": 3,
            "is_paid": false,
            "cached": true,
            "message": "Subscribe to see all 20 signals"
        }"#;

        let page: SignalsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.signals.len(), 1);
        assert_eq!(page.signals[0].symbol, "NIFTY");
        assert_eq!(page.signals[0].action, Action::Buy);
        assert_eq!(page.signals[0].price, dec!(21500.5));
        assert_eq!(page.total, 3);
        assert!(page.cached);
    }

    #[test]
    fn test_upsell_only_for_free_tier() {
        let mut page = SignalsPage {
            signals: vec![],
            total: 20,
            is_paid: false,
            cached: false,
            message: Some("Subscribe to see all 20 signals".to_string()),
        };
        assert_eq!(page.upsell(), Some("Subscribe to see all 20 signals"));

        page.is_paid = true;
        assert_eq!(page.upsell(), None);

        page.is_paid = false;
        page.message = None;
        assert_eq!(page.upsell(), None);
    }
}
