//! Auth Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::Token;

impl ApiClient {
    /// Exchange credentials for a bearer token and keep it for later calls
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Token> {
        let form = [("username", username), ("password", password)];
        let builder = self.request(Method::POST, "/auth/login-form").form(&form);
        let token: Token = self.send(builder).await?.json().await?;
        self.tokens.store(&token.access_token);
        tracing::info!(user = username, "admin session started");
        Ok(token)
    }

    pub fn logout(&self) {
        self.tokens.clear();
        tracing::info!("admin session ended");
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api::tests::test_client;
    use crate::session::{MemoryTokenStore, TokenStore};

    #[test]
    fn test_logout_clears_session() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.store("t");
        let (client, _) = test_client(tokens.clone());
        assert!(client.is_authenticated());
        client.logout();
        assert!(!client.is_authenticated());
        assert_eq!(tokens.token(), None);
    }
}
