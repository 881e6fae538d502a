use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::models::{CreatePin, Pin, UpdatePin, PIN_FIELDS};
use crate::request::Requester;

use super::segment;

#[derive(Debug, Clone, Copy)]
pub struct PinsController<'a> {
    requester: &'a Requester,
}

impl<'a> PinsController<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    pub fn build_get(&self, id: &str, fields: Option<&[&str]>) -> HttpRequest {
        self.requester.request_with_fields(
            HttpMethod::Get,
            &format!("/pins/{}/", segment(id)),
            fields,
            PIN_FIELDS,
        )
    }

    pub fn get(&self, id: &str, fields: Option<&[&str]>) -> Result<Pin, ApiError> {
        self.requester.send(self.build_get(id, fields))
    }

    pub fn build_create(
        &self,
        input: &CreatePin,
        fields: Option<&[&str]>,
    ) -> Result<HttpRequest, ApiError> {
        let request =
            self.requester
                .request_with_fields(HttpMethod::Post, "/pins/", fields, PIN_FIELDS);
        self.requester.with_json(request, input)
    }

    pub fn create(&self, input: &CreatePin, fields: Option<&[&str]>) -> Result<Pin, ApiError> {
        self.requester.send(self.build_create(input, fields)?)
    }

    pub fn build_update(
        &self,
        id: &str,
        input: &UpdatePin,
        fields: Option<&[&str]>,
    ) -> Result<HttpRequest, ApiError> {
        let request = self.requester.request_with_fields(
            HttpMethod::Patch,
            &format!("/pins/{}/", segment(id)),
            fields,
            PIN_FIELDS,
        );
        self.requester.with_json(request, input)
    }

    pub fn update(
        &self,
        id: &str,
        input: &UpdatePin,
        fields: Option<&[&str]>,
    ) -> Result<Pin, ApiError> {
        self.requester.send(self.build_update(id, input, fields)?)
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        self.requester
            .request(HttpMethod::Delete, &format!("/pins/{}/", segment(id)))
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_delete(id))
    }
}
