/// Supplies the bearer token for authenticated writes.
///
/// `None` means "not signed in"; callers must not issue a request then.
pub trait TokenSource: Send + Sync {
    fn current_token(&self) -> Option<String>;
}

/// Token source with a fixed value, handy for scripts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenSource for StaticToken {
    fn current_token(&self) -> Option<String> {
        self.0.clone()
    }
}
