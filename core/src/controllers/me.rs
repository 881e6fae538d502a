use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::models::{
    Board, Interest, Paginated, Pin, User, BOARD_FIELDS, INTEREST_FIELDS, PIN_FIELDS, USER_FIELDS,
};
use crate::request::Requester;

use super::{board_segments, segment, PageOptions};

/// Options for `GET /me/boards/suggested/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestedBoardsOptions {
    /// Suggest boards that fit this pin.
    pub pin: Option<String>,
    pub count: Option<u32>,
    pub fields: Option<Vec<String>>,
}

/// Operations on the authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct MeController<'a> {
    requester: &'a Requester,
}

impl<'a> MeController<'a> {
    pub(crate) fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    fn page_request(&self, path: &str, options: &PageOptions, default: &[&str]) -> HttpRequest {
        let mut request = self.requester.request(HttpMethod::Get, path);
        options.apply(&mut request, default);
        request
    }

    pub fn build_get(&self, fields: Option<&[&str]>) -> HttpRequest {
        self.requester
            .request_with_fields(HttpMethod::Get, "/me/", fields, USER_FIELDS)
    }

    pub fn get(&self, fields: Option<&[&str]>) -> Result<User, ApiError> {
        self.requester.send(self.build_get(fields))
    }

    pub fn build_boards(&self, fields: Option<&[&str]>) -> HttpRequest {
        self.requester
            .request_with_fields(HttpMethod::Get, "/me/boards/", fields, BOARD_FIELDS)
    }

    /// All boards of the user. This endpoint is not paginated.
    pub fn boards(&self, fields: Option<&[&str]>) -> Result<Vec<Board>, ApiError> {
        self.requester.send(self.build_boards(fields))
    }

    pub fn build_suggested_boards(&self, options: &SuggestedBoardsOptions) -> HttpRequest {
        let mut request = self.requester.request(HttpMethod::Get, "/me/boards/suggested/");
        let fields = match &options.fields {
            Some(fields) => fields.join(","),
            None => BOARD_FIELDS.join(","),
        };
        request.set_query("fields", fields);
        if let Some(pin) = &options.pin {
            request.set_query("pin", pin.as_str());
        }
        if let Some(count) = options.count {
            request.set_query("count", count.to_string());
        }
        request
    }

    pub fn suggested_boards(
        &self,
        options: &SuggestedBoardsOptions,
    ) -> Result<Vec<Board>, ApiError> {
        self.requester.send(self.build_suggested_boards(options))
    }

    pub fn build_pins(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/pins/", options, PIN_FIELDS)
    }

    pub fn pins(&self, options: &PageOptions) -> Result<Paginated<Pin>, ApiError> {
        self.requester.send_page(self.build_pins(options))
    }

    pub fn build_likes(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/likes/", options, PIN_FIELDS)
    }

    pub fn likes(&self, options: &PageOptions) -> Result<Paginated<Pin>, ApiError> {
        self.requester.send_page(self.build_likes(options))
    }

    pub fn build_followers(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/followers/", options, USER_FIELDS)
    }

    pub fn followers(&self, options: &PageOptions) -> Result<Paginated<User>, ApiError> {
        self.requester.send_page(self.build_followers(options))
    }

    pub fn build_following_users(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/following/users/", options, USER_FIELDS)
    }

    pub fn following_users(&self, options: &PageOptions) -> Result<Paginated<User>, ApiError> {
        self.requester.send_page(self.build_following_users(options))
    }

    pub fn build_following_boards(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/following/boards/", options, BOARD_FIELDS)
    }

    pub fn following_boards(&self, options: &PageOptions) -> Result<Paginated<Board>, ApiError> {
        self.requester.send_page(self.build_following_boards(options))
    }

    pub fn build_following_interests(&self, options: &PageOptions) -> HttpRequest {
        self.page_request("/me/following/interests/", options, INTEREST_FIELDS)
    }

    pub fn following_interests(
        &self,
        options: &PageOptions,
    ) -> Result<Paginated<Interest>, ApiError> {
        self.requester
            .send_page(self.build_following_interests(options))
    }

    pub fn build_follow_user(&self, user: &str) -> Result<HttpRequest, ApiError> {
        let request = self
            .requester
            .request(HttpMethod::Post, "/me/following/users/");
        self.requester.with_json(request, &json!({ "user": user }))
    }

    pub fn follow_user(&self, user: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_follow_user(user)?)
    }

    pub fn build_unfollow_user(&self, user: &str) -> HttpRequest {
        let path = format!("/me/following/users/{}/", segment(user));
        self.requester.request(HttpMethod::Delete, &path)
    }

    pub fn unfollow_user(&self, user: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_unfollow_user(user))
    }

    pub fn build_follow_board(&self, board: &str) -> Result<HttpRequest, ApiError> {
        let request = self
            .requester
            .request(HttpMethod::Post, "/me/following/boards/");
        self.requester.with_json(request, &json!({ "board": board }))
    }

    pub fn follow_board(&self, board: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_follow_board(board)?)
    }

    pub fn build_unfollow_board(&self, board: &str) -> HttpRequest {
        let path = format!("/me/following/boards/{}/", board_segments(board));
        self.requester.request(HttpMethod::Delete, &path)
    }

    pub fn unfollow_board(&self, board: &str) -> Result<(), ApiError> {
        self.requester.send_empty(self.build_unfollow_board(board))
    }

    pub fn build_search_boards(&self, query: &str, options: &PageOptions) -> HttpRequest {
        let mut request = self.page_request("/me/search/boards/", options, BOARD_FIELDS);
        request.set_query("query", query);
        request
    }

    /// Searches the user's own boards.
    pub fn search_boards(
        &self,
        query: &str,
        options: &PageOptions,
    ) -> Result<Paginated<Board>, ApiError> {
        self.requester
            .send_page(self.build_search_boards(query, options))
    }

    pub fn build_search_pins(&self, query: &str, options: &PageOptions) -> HttpRequest {
        let mut request = self.page_request("/me/search/pins/", options, PIN_FIELDS);
        request.set_query("query", query);
        request
    }

    /// Searches the user's own pins.
    pub fn search_pins(
        &self,
        query: &str,
        options: &PageOptions,
    ) -> Result<Paginated<Pin>, ApiError> {
        self.requester
            .send_page(self.build_search_pins(query, options))
    }
}
