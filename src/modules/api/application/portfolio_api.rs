use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::application::domain::entities::{LoginPayload, LoginRequest, VerifyPayload};
use crate::contact::application::domain::entities::ContactSubmission;
use crate::content::application::domain::entities::{
    ContactInfo, PersonalInfo, Project, ProjectDraft, SkillSet,
};
use crate::modules::api::application::ports::outgoing::{ApiClient, HttpMethod};
use crate::shared::api::ApiResponse;

/// Typed facade over the portfolio endpoints.
///
/// Reads decode `data` into the entity type. Writes hand back the raw
/// payload: stores commit what they sent and only peek at the response
/// where the server assigns something (a project id).
#[derive(Clone)]
pub struct PortfolioApi {
    client: Arc<dyn ApiClient>,
}

impl PortfolioApi {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> ApiResponse<Value> {
        let body = match body.map(serde_json::to_value).transpose() {
            Ok(body) => body,
            Err(e) => return ApiResponse::failure(format!("Failed to encode request: {e}")),
        };

        self.client.request(method, endpoint, body, token).await
    }

    async fn get(&self, endpoint: &str, token: Option<&str>) -> ApiResponse<Value> {
        self.send::<Value>(HttpMethod::Get, endpoint, None, token).await
    }

    // ---------------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> ApiResponse<LoginPayload> {
        self.send(HttpMethod::Post, "/auth/login", Some(request), None)
            .await
            .decode()
    }

    pub async fn logout(&self, token: &str) -> ApiResponse<Value> {
        self.send(HttpMethod::Post, "/auth/logout", Some(&serde_json::json!({})), Some(token))
            .await
    }

    pub async fn verify_token(&self, token: &str) -> ApiResponse<VerifyPayload> {
        self.get("/auth/verify", Some(token)).await.decode()
    }

    // ---------------------------------------------------------------------
    // Content
    // ---------------------------------------------------------------------

    pub async fn get_personal_info(&self) -> ApiResponse<PersonalInfo> {
        self.get("/personal-info", None).await.decode()
    }

    pub async fn update_personal_info(&self, info: &PersonalInfo, token: &str) -> ApiResponse<Value> {
        self.send(HttpMethod::Put, "/personal-info", Some(info), Some(token))
            .await
    }

    pub async fn get_projects(&self) -> ApiResponse<Vec<Project>> {
        self.get("/projects", None).await.decode()
    }

    pub async fn create_project(&self, draft: &ProjectDraft, token: &str) -> ApiResponse<Value> {
        self.send(HttpMethod::Post, "/projects", Some(draft), Some(token))
            .await
    }

    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        token: &str,
    ) -> ApiResponse<Value> {
        self.send(
            HttpMethod::Put,
            &format!("/projects/{id}"),
            Some(draft),
            Some(token),
        )
        .await
    }

    pub async fn delete_project(&self, id: &str, token: &str) -> ApiResponse<Value> {
        self.send::<Value>(HttpMethod::Delete, &format!("/projects/{id}"), None, Some(token))
            .await
    }

    pub async fn get_skills(&self) -> ApiResponse<SkillSet> {
        self.get("/skills", None).await.decode()
    }

    pub async fn update_skills(&self, skills: &SkillSet, token: &str) -> ApiResponse<Value> {
        self.send(HttpMethod::Put, "/skills", Some(skills), Some(token))
            .await
    }

    pub async fn get_contact_info(&self) -> ApiResponse<ContactInfo> {
        self.get("/contact-info", None).await.decode()
    }

    pub async fn update_contact_info(&self, info: &ContactInfo, token: &str) -> ApiResponse<Value> {
        self.send(HttpMethod::Put, "/contact-info", Some(info), Some(token))
            .await
    }

    // ---------------------------------------------------------------------
    // Contact form
    // ---------------------------------------------------------------------

    pub async fn submit_contact_form(&self, submission: &ContactSubmission) -> ApiResponse<Value> {
        self.send(HttpMethod::Post, "/contact/submit", Some(submission), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::ScriptedApiClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_posts_credentials_and_decodes_payload() {
        let client = Arc::new(ScriptedApiClient::new());
        client.respond(
            HttpMethod::Post,
            "/auth/login",
            ApiResponse::success(
                Some(json!({
                    "user": { "id": "1", "email": "a@b.com", "name": "Ann" },
                    "token": "jwt"
                })),
                None,
            ),
        );
        let api = PortfolioApi::new(client.clone());

        let resp = api
            .login(&LoginRequest::new("a@b.com", "secret").unwrap())
            .await;

        assert!(resp.success);
        assert_eq!(resp.data.unwrap().token, "jwt");

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].body, Some(json!({ "email": "a@b.com", "password": "secret" })));
        assert!(calls[0].token.is_none());
    }

    #[tokio::test]
    async fn test_verify_attaches_token() {
        let client = Arc::new(ScriptedApiClient::new());
        let api = PortfolioApi::new(client.clone());

        let resp = api.verify_token("abc").await;

        // Unscripted endpoints fail like an unreachable backend.
        assert!(!resp.success);
        assert_eq!(client.calls()[0].token.as_deref(), Some("abc"));
        assert_eq!(client.calls()[0].endpoint, "/auth/verify");
    }

    #[tokio::test]
    async fn test_project_endpoints_embed_id() {
        let client = Arc::new(ScriptedApiClient::new());
        let api = PortfolioApi::new(client.clone());
        let draft = ProjectDraft {
            title: "T".into(),
            image: "i".into(),
            description: "d".into(),
            technologies: vec![],
            live_url: "#".into(),
            github_url: "#".into(),
        };

        api.update_project("42", &draft, "tok").await;
        api.delete_project("42", "tok").await;

        let calls = client.calls();
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(calls[0].endpoint, "/projects/42");
        assert_eq!(calls[0].body.as_ref().unwrap()["liveUrl"], "#");
        assert_eq!(calls[1].method, HttpMethod::Delete);
        assert_eq!(calls[1].endpoint, "/projects/42");
        assert!(calls[1].body.is_none());
    }

    #[tokio::test]
    async fn test_malformed_read_payload_is_failure() {
        let client = Arc::new(ScriptedApiClient::new());
        client.respond(
            HttpMethod::Get,
            "/contact-info",
            ApiResponse::success(Some(json!({ "email": 42 })), None),
        );
        let api = PortfolioApi::new(client);

        let resp = api.get_contact_info().await;

        assert!(!resp.success);
        assert!(resp.data.is_none());
    }
}
