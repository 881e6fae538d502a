use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::models::{AccessToken, Scope};
use crate::request::Requester;

/// Page the user is sent to in order to grant access.
pub const AUTHORIZE_URL: &str = "https://api.pinterest.com/oauth/";

/// Authorization-code flow: build the consent URL, then exchange the code.
#[derive(Debug, Clone, Copy)]
pub struct OAuthController<'a> {
    requester: &'a Requester,
}

impl<'a> OAuthController<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Builds the consent URL. Pure string construction, no request is made.
    pub fn authorization_url(
        &self,
        client_id: &str,
        redirect_uri: &str,
        scopes: &[Scope],
        state: Option<&str>,
    ) -> String {
        let scope = scopes
            .iter()
            .map(Scope::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("client_id", client_id)
            .append_pair("scope", &scope);
        if let Some(state) = state {
            query.append_pair("state", state);
        }
        format!("{AUTHORIZE_URL}?{}", query.finish())
    }

    /// `redirect_uri` must match the one used for `authorization_url`.
    pub fn build_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> HttpRequest {
        let mut request = self.requester.request(HttpMethod::Post, "/oauth/token");
        request.set_query("grant_type", "authorization_code");
        request.set_query("client_id", client_id);
        request.set_query("client_secret", client_secret);
        request.set_query("code", code);
        request.set_query("redirect_uri", redirect_uri);
        request
    }

    /// Exchanges an authorization code for an access token.
    pub fn token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken, ApiError> {
        self.requester
            .send_json(self.build_token(client_id, client_secret, code, redirect_uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::testing::Recorder;

    fn requester(status: u16, body: &str) -> Requester {
        let (recorder, _) = Recorder::new(status, body);
        Requester::new("https://api.pinterest.com/v1", "application/json", Box::new(recorder))
    }

    #[test]
    fn authorization_url_encodes_every_parameter() {
        let requester = requester(200, "{}");
        let url = OAuthController::new(&requester).authorization_url(
            "4800",
            "https://app.example.com/callback",
            &[Scope::ReadPublic, Scope::WritePublic],
            Some("xyz"),
        );
        assert_eq!(
            url,
            "https://api.pinterest.com/oauth/?response_type=code\
             &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback\
             &client_id=4800&scope=read_public%2Cwrite_public&state=xyz"
        );
    }

    #[test]
    fn authorization_url_omits_missing_state() {
        let requester = requester(200, "{}");
        let url = OAuthController::new(&requester).authorization_url(
            "4800",
            "https://app.example.com/callback",
            &[Scope::ReadRelationships],
            None,
        );
        assert!(!url.contains("state="));
        assert!(url.ends_with("scope=read_relationships"));
    }

    #[test]
    fn build_token_produces_correct_request() {
        let requester = requester(200, "{}");
        let req = OAuthController::new(&requester).build_token(
            "4800",
            "s3cret",
            "code-1",
            "https://app.example.com/callback",
        );
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "https://api.pinterest.com/v1/oauth/token");
        assert_eq!(req.query_param("grant_type"), Some("authorization_code"));
        assert_eq!(req.query_param("client_secret"), Some("s3cret"));
        assert_eq!(req.query_param("code"), Some("code-1"));
        assert_eq!(
            req.query_param("redirect_uri"),
            Some("https://app.example.com/callback")
        );
        assert!(req.url().unwrap().as_str().ends_with(
            "&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback"
        ));
        assert!(req.body.is_none());
    }

    #[test]
    fn token_decodes_unwrapped_body() {
        let requester = requester(
            200,
            r#"{"access_token": "AT", "token_type": "bearer", "scope": ["read_public"]}"#,
        );
        let token = OAuthController::new(&requester)
            .token("4800", "s3cret", "code-1", "https://app.example.com/callback")
            .unwrap();
        assert_eq!(token.access_token, "AT");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.scope, vec!["read_public".to_string()]);
    }

    #[test]
    fn token_rejected_code_is_api_error() {
        let requester = requester(
            400,
            r#"{"status": "failure", "code": 1, "message": "Invalid authorization code", "type": "api"}"#,
        );
        let err = OAuthController::new(&requester)
            .token("4800", "s3cret", "bad", "https://app.example.com/callback")
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
}
