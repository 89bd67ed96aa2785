//! CLI command implementations.

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod signup;
pub mod status;
pub mod subscribe;
pub mod validate;
pub mod whoami;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use signals_core::error::ApiError;
    use signals_core::traits::Gateway;
    use signals_core::types::{
        Action, AuthResponse, BillingStatus, Checkout, Signal, SignalsPage, User,
    };
    use signals_session::SessionStore;

    pub const STUB_TOKEN: &str = "tok_stub";
    pub const STUB_PASSWORD: &str = "hunter22";

    /// In-memory gateway for command tests.
    pub struct StubGateway {
        pub is_paid: bool,
    }

    impl StubGateway {
        pub fn new() -> Self {
            Self { is_paid: false }
        }

        fn user(&self, email: &str) -> User {
            User {
                id: 1,
                email: email.to_string(),
                is_paid: self.is_paid,
                created_at: "2024-01-15T10:30:00".to_string(),
            }
        }

        fn auth(&self, email: &str) -> AuthResponse {
            AuthResponse {
                access_token: STUB_TOKEN.to_string(),
                token_type: "bearer".to_string(),
                user: self.user(email),
            }
        }
    }

    #[async_trait]
    impl Gateway for StubGateway {
        async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
            if password == STUB_PASSWORD {
                Ok(self.auth(email))
            } else {
                Err(ApiError::Api("Email already registered".to_string()))
            }
        }

        async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
            if password == STUB_PASSWORD {
                Ok(self.auth(email))
            } else {
                Err(ApiError::Unauthorized(
                    "Incorrect email or password".to_string(),
                ))
            }
        }

        async fn me(&self, token: &str) -> Result<User, ApiError> {
            if token == STUB_TOKEN {
                Ok(self.user("trader@example.com"))
            } else {
                Err(ApiError::Unauthorized("Invalid token".to_string()))
            }
        }

        async fn signals(&self, token: &str) -> Result<SignalsPage, ApiError> {
            if token != STUB_TOKEN {
                return Err(ApiError::Unauthorized("Invalid token".to_string()));
            }

            let signal = Signal {
                symbol: "NIFTY".to_string(),
                action: Action::Buy,
                price: dec!(21500.50),
                target: dec!(22145.52),
                stoploss: dec!(21070.49),
                timestamp: "2024-01-15 10:30:00".to_string(),
            };

            Ok(if self.is_paid {
                SignalsPage {
                    signals: vec![signal; 20],
                    total: 20,
                    is_paid: true,
                    cached: false,
                    message: None,
                }
            } else {
                SignalsPage {
                    signals: vec![signal; 3],
                    total: 20,
                    is_paid: false,
                    cached: false,
                    message: Some("Subscribe to see all 20 signals".to_string()),
                }
            })
        }

        async fn create_checkout(&self, token: &str) -> Result<Checkout, ApiError> {
            if token != STUB_TOKEN {
                return Err(ApiError::Unauthorized("Invalid token".to_string()));
            }
            if self.is_paid {
                return Err(ApiError::Api(
                    "You already have an active subscription".to_string(),
                ));
            }
            Ok(Checkout {
                checkout_url: "https://checkout.example.com/c/cs_test_123".to_string(),
                session_id: "cs_test_123".to_string(),
            })
        }

        async fn billing_status(&self, token: &str) -> Result<BillingStatus, ApiError> {
            if token != STUB_TOKEN {
                return Err(ApiError::Unauthorized("Invalid token".to_string()));
            }
            Ok(BillingStatus {
                is_paid: self.is_paid,
                customer_id: self.is_paid.then(|| "cus_test_123".to_string()),
                subscription_id: None,
                email: "trader@example.com".to_string(),
            })
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Session store backed by a unique temp file.
    pub fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("signals-cmd-{}-{}", std::process::id(), name));
        path.push("session.json");
        let _ = std::fs::remove_file(&path);
        SessionStore::new(path)
    }
}
