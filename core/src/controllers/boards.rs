use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::models::{Board, CreateBoard, Paginated, Pin, UpdateBoard, BOARD_FIELDS, PIN_FIELDS};
use crate::request::Requester;

use super::{board_segments, PageOptions};

/// Boards are addressed by their `username/board-slug` spec.
#[derive(Debug, Clone, Copy)]
pub struct BoardsController<'a> {
    requester: &'a Requester,
}

impl<'a> BoardsController<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    pub fn build_get(&self, board: &str, fields: Option<&[&str]>) -> HttpRequest {
        self.requester.request_with_fields(
            HttpMethod::Get,
            &format!("/boards/{}/", board_segments(board)),
            fields,
            BOARD_FIELDS,
        )
    }

    pub fn get(&self, board: &str, fields: Option<&[&str]>) -> Result<Board, ApiError> {
        self.requester.send(self.build_get(board, fields))
    }

    pub fn build_create(
        &self,
        input: &CreateBoard,
        fields: Option<&[&str]>,
    ) -> Result<HttpRequest, ApiError> {
        let request =
            self.requester
                .request_with_fields(HttpMethod::Post, "/boards/", fields, BOARD_FIELDS);
        self.requester.with_json(request, input)
    }

    /// Creates a board owned by the authenticated user.
    pub fn create(&self, input: &CreateBoard, fields: Option<&[&str]>) -> Result<Board, ApiError> {
        self.requester.send(self.build_create(input, fields)?)
    }

    pub fn build_update(
        &self,
        board: &str,
        input: &UpdateBoard,
        fields: Option<&[&str]>,
    ) -> Result<HttpRequest, ApiError> {
        let request = self.requester.request_with_fields(
            HttpMethod::Patch,
            &format!("/boards/{}/", board_segments(board)),
            fields,
            BOARD_FIELDS,
        );
        self.requester.with_json(request, input)
    }

    pub fn update(
        &self,
        board: &str,
        input: &UpdateBoard,
        fields: Option<&[&str]>,
    ) -> Result<Board, ApiError> {
        self.requester.send(self.build_update(board, input, fields)?)
    }

    pub fn build_delete(&self, board: &str) -> HttpRequest {
        self.requester
            .request(HttpMethod::Delete, &format!("/boards/{}/", board_segments(board)))
    }

    pub fn delete(&self, board: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_delete(board))
    }

    pub fn build_pins(&self, board: &str, options: &PageOptions) -> HttpRequest {
        let path = format!("/boards/{}/pins/", board_segments(board));
        let mut request = self.requester.request(HttpMethod::Get, &path);
        options.apply(&mut request, PIN_FIELDS);
        request
    }

    /// One page of the pins on a board.
    pub fn pins(&self, board: &str, options: &PageOptions) -> Result<Paginated<Pin>, ApiError> {
        self.requester.send_page(self.build_pins(board, options))
    }
}
