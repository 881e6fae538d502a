use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::models::{User, USER_FIELDS};
use crate::request::Requester;

use super::segment;

#[derive(Debug, Clone, Copy)]
pub struct UsersController<'a> {
    requester: &'a Requester,
}

impl<'a> UsersController<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    pub fn build_get(&self, username: &str, fields: Option<&[&str]>) -> HttpRequest {
        self.requester.request_with_fields(
            HttpMethod::Get,
            &format!("/users/{}/", segment(username)),
            fields,
            USER_FIELDS,
        )
    }

    /// Fetches a public profile by username.
    pub fn get(&self, username: &str, fields: Option<&[&str]>) -> Result<User, ApiError> {
        self.requester.send(self.build_get(username, fields))
    }
}
