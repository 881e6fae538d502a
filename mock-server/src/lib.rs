use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Token the default app accepts.
pub const ACCESS_TOKEN: &str = "mock-token";
/// Authorization code `/v1/oauth/token` exchanges for `ACCESS_TOKEN`.
pub const AUTH_CODE: &str = "mock-code";

const CREATED_AT: &str = "2024-01-15T09:30:00";
const DEFAULT_LIMIT: usize = 25;
const MAX_LIMIT: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub created_at: String,
    pub url: String,
    pub account_type: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardCounts {
    pub pins: i32,
    pub collaborators: i32,
    pub followers: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub creator: User,
    pub created_at: String,
    pub counts: BoardCounts,
    pub privacy: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardRef {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PinCounts {
    pub likes: i32,
    pub comments: i32,
    pub repins: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub link: Option<String>,
    pub url: String,
    pub board: BoardRef,
    pub created_at: String,
    pub note: String,
    pub color: String,
    pub counts: PinCounts,
    pub media: Value,
    pub attribution: Option<Value>,
    pub image: Value,
    pub metadata: Value,
}

#[derive(Deserialize)]
pub struct CreateBoard {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBoard {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePin {
    pub board: String,
    pub note: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub image_base64: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePin {
    pub board: Option<String>,
    pub note: Option<String>,
    pub link: Option<String>,
}

#[derive(Deserialize)]
struct TokenQuery {
    access_token: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct Params {
    pub fields: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct TokenParams {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
    #[serde(default)]
    pub redirect_uri: String,
}

pub struct Store {
    me: String,
    users: BTreeMap<String, User>,
    /// Keyed by `username/slug`.
    boards: BTreeMap<String, Board>,
    pins: BTreeMap<u64, Pin>,
    next_id: u64,
}

impl Store {
    fn seeded() -> Self {
        let users = [("1", "alice", "Alice"), ("2", "bob", "Bob")]
            .into_iter()
            .map(|(id, username, first_name)| {
                let user = User {
                    id: id.to_string(),
                    username: username.to_string(),
                    first_name: first_name.to_string(),
                    last_name: String::new(),
                    bio: String::new(),
                    created_at: CREATED_AT.to_string(),
                    url: format!("https://www.pinterest.com/{username}/"),
                    account_type: "individual".to_string(),
                };
                (username.to_string(), user)
            })
            .collect();
        Self {
            me: "alice".to_string(),
            users,
            boards: BTreeMap::new(),
            pins: BTreeMap::new(),
            next_id: 100,
        }
    }

    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    db: Db,
    token: Arc<str>,
}

/// Pinterest-shaped error payload.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    code: u32,
    message: String,
}

impl Failure {
    fn new(status: StatusCode, code: u32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, 40, format!("{what} not found."))
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = json!({
            "status": "failure",
            "code": self.code,
            "message": self.message,
            "type": "api",
        });
        (self.status, Json(body)).into_response()
    }
}

type ApiResult = Result<Json<Value>, Failure>;

pub fn app() -> Router {
    app_with_token(ACCESS_TOKEN)
}

pub fn app_with_token(token: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::seeded())),
        token: Arc::from(token),
    };

    let api = Router::new()
        .route("/v1/me/", get(get_me))
        .route("/v1/me/boards/", get(list_my_boards))
        .route("/v1/me/pins/", get(list_my_pins))
        .route("/v1/users/{username}/", get(get_user))
        .route("/v1/boards/", post(create_board))
        .route(
            "/v1/boards/{user}/{board}/",
            get(get_board).patch(update_board).delete(delete_board),
        )
        .route("/v1/boards/{user}/{board}/pins/", get(list_board_pins))
        .route("/v1/pins/", post(create_pin))
        .route(
            "/v1/pins/{id}/",
            get(get_pin).patch(update_pin).delete(delete_pin),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .merge(api)
        .route("/v1/oauth/token", post(exchange_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let token = Query::<TokenQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(params)| params.access_token);
    match token {
        Some(token) if *token == *state.token => next.run(request).await,
        _ => Failure::new(StatusCode::UNAUTHORIZED, 3, "Authorization failed.").into_response(),
    }
}

/// Keeps only the requested top-level keys, mimicking partial responses.
fn select<T: Serialize>(value: &T, fields: Option<&str>) -> Value {
    let mut value = serde_json::to_value(value).unwrap_or(Value::Null);
    if let (Some(fields), Value::Object(map)) = (fields, &mut value) {
        let wanted: Vec<&str> = fields.split(',').map(str::trim).collect();
        map.retain(|key, _| wanted.contains(&key.as_str()));
    }
    value
}

fn paginate<T: Serialize>(items: &[T], params: &Params, path: &str) -> ApiResult {
    let offset = match &params.cursor {
        Some(cursor) => cursor
            .parse::<usize>()
            .map_err(|_| Failure::new(StatusCode::BAD_REQUEST, 1, "Invalid cursor."))?,
        None => 0,
    };
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let end = offset.saturating_add(limit).min(items.len());
    let data: Vec<Value> = items
        .get(offset..end)
        .unwrap_or_default()
        .iter()
        .map(|item| select(item, params.fields.as_deref()))
        .collect();

    let page = if end < items.len() {
        json!({ "cursor": end.to_string(), "next": format!("{path}?cursor={end}") })
    } else {
        json!({ "cursor": null, "next": null })
    };
    Ok(Json(json!({ "data": data, "page": page })))
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

async fn get_me(State(state): State<AppState>, Query(params): Query<Params>) -> ApiResult {
    let store = state.db.read().await;
    let me = store.users.get(&store.me).ok_or_else(|| Failure::not_found("User"))?;
    Ok(Json(json!({ "data": select(me, params.fields.as_deref()) })))
}

async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<Params>,
) -> ApiResult {
    let store = state.db.read().await;
    let user = store.users.get(&username).ok_or_else(|| Failure::not_found("User"))?;
    Ok(Json(json!({ "data": select(user, params.fields.as_deref()) })))
}

async fn list_my_boards(State(state): State<AppState>, Query(params): Query<Params>) -> ApiResult {
    let store = state.db.read().await;
    let prefix = format!("{}/", store.me);
    let data: Vec<Value> = store
        .boards
        .iter()
        .filter(|(spec, _)| spec.starts_with(&prefix))
        .map(|(_, board)| select(board, params.fields.as_deref()))
        .collect();
    Ok(Json(json!({ "data": data })))
}

async fn list_my_pins(State(state): State<AppState>, Query(params): Query<Params>) -> ApiResult {
    let store = state.db.read().await;
    let prefix = format!("https://www.pinterest.com/{}/", store.me);
    let pins: Vec<&Pin> = store
        .pins
        .values()
        .filter(|pin| pin.board.url.starts_with(&prefix))
        .collect();
    paginate(&pins, &params, "/v1/me/pins/")
}

async fn create_board(
    State(state): State<AppState>,
    Query(params): Query<Params>,
    Json(input): Json<CreateBoard>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let slug = slugify(&input.name);
    if slug.is_empty() {
        return Err(Failure::new(StatusCode::BAD_REQUEST, 1, "Board name is required."));
    }
    let spec = format!("{}/{slug}", store.me);
    if store.boards.contains_key(&spec) {
        return Err(Failure::new(
            StatusCode::CONFLICT,
            58,
            "You already have a board with this name.",
        ));
    }
    let creator = store
        .users
        .get(&store.me)
        .cloned()
        .ok_or_else(|| Failure::not_found("User"))?;
    let board = Board {
        id: store.next_id(),
        name: input.name,
        url: format!("https://www.pinterest.com/{spec}/"),
        description: input.description,
        creator,
        created_at: CREATED_AT.to_string(),
        counts: BoardCounts::default(),
        privacy: "public".to_string(),
    };
    let data = select(&board, params.fields.as_deref());
    store.boards.insert(spec, board);
    Ok(Json(json!({ "data": data })))
}

async fn get_board(
    State(state): State<AppState>,
    Path((user, board)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> ApiResult {
    let store = state.db.read().await;
    let board = store
        .boards
        .get(&format!("{user}/{board}"))
        .ok_or_else(|| Failure::not_found("Board"))?;
    Ok(Json(json!({ "data": select(board, params.fields.as_deref()) })))
}

async fn update_board(
    State(state): State<AppState>,
    Path((user, board)): Path<(String, String)>,
    Query(params): Query<Params>,
    Json(input): Json<UpdateBoard>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let board = store
        .boards
        .get_mut(&format!("{user}/{board}"))
        .ok_or_else(|| Failure::not_found("Board"))?;
    if let Some(name) = input.name {
        board.name = name;
    }
    if let Some(description) = input.description {
        board.description = Some(description);
    }
    Ok(Json(json!({ "data": select(&*board, params.fields.as_deref()) })))
}

async fn delete_board(
    State(state): State<AppState>,
    Path((user, board)): Path<(String, String)>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let removed = store
        .boards
        .remove(&format!("{user}/{board}"))
        .ok_or_else(|| Failure::not_found("Board"))?;
    store.pins.retain(|_, pin| pin.board.id != removed.id);
    Ok(Json(json!({ "data": null })))
}

async fn list_board_pins(
    State(state): State<AppState>,
    Path((user, board)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> ApiResult {
    let store = state.db.read().await;
    let spec = format!("{user}/{board}");
    let board = store.boards.get(&spec).ok_or_else(|| Failure::not_found("Board"))?;
    let pins: Vec<&Pin> = store
        .pins
        .values()
        .filter(|pin| pin.board.id == board.id)
        .collect();
    paginate(&pins, &params, &format!("/v1/boards/{spec}/pins/"))
}

async fn create_pin(
    State(state): State<AppState>,
    Query(params): Query<Params>,
    Json(input): Json<CreatePin>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let image_url = match (input.image_url, input.image_base64) {
        (Some(url), _) => url,
        (None, Some(_)) => "https://i.pinimg.com/originals/uploaded.jpg".to_string(),
        (None, None) => {
            return Err(Failure::new(
                StatusCode::BAD_REQUEST,
                1,
                "An image_url or image_base64 is required.",
            ))
        }
    };
    let id = store.next_id();
    let board = store
        .boards
        .get_mut(&input.board)
        .ok_or_else(|| Failure::not_found("Board"))?;
    board.counts.pins += 1;
    let pin = Pin {
        url: format!("https://www.pinterest.com/pin/{id}/"),
        id: id.clone(),
        link: input.link,
        board: BoardRef {
            id: board.id.clone(),
            name: board.name.clone(),
            url: board.url.clone(),
        },
        created_at: CREATED_AT.to_string(),
        note: input.note,
        color: "#c8a165".to_string(),
        counts: PinCounts::default(),
        media: json!({ "type": "image" }),
        attribution: None,
        image: json!({ "original": { "url": image_url, "width": 600, "height": 900 } }),
        metadata: json!({}),
    };
    let data = select(&pin, params.fields.as_deref());
    store.pins.insert(id.parse().unwrap_or_default(), pin);
    Ok(Json(json!({ "data": data })))
}

fn pin_key(id: &str) -> Result<u64, Failure> {
    id.parse().map_err(|_| Failure::not_found("Pin"))
}

async fn get_pin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
) -> ApiResult {
    let store = state.db.read().await;
    let pin = store.pins.get(&pin_key(&id)?).ok_or_else(|| Failure::not_found("Pin"))?;
    Ok(Json(json!({ "data": select(pin, params.fields.as_deref()) })))
}

async fn update_pin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
    Json(input): Json<UpdatePin>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let key = pin_key(&id)?;
    let target = match &input.board {
        Some(spec) => {
            let board = store.boards.get(spec).ok_or_else(|| Failure::not_found("Board"))?;
            Some(BoardRef {
                id: board.id.clone(),
                name: board.name.clone(),
                url: board.url.clone(),
            })
        }
        None => None,
    };
    let pin = store.pins.get_mut(&key).ok_or_else(|| Failure::not_found("Pin"))?;
    if let Some(board) = target {
        pin.board = board;
    }
    if let Some(note) = input.note {
        pin.note = note;
    }
    if let Some(link) = input.link {
        pin.link = Some(link);
    }
    Ok(Json(json!({ "data": select(&*pin, params.fields.as_deref()) })))
}

async fn delete_pin(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut store = state.db.write().await;
    let pin = store
        .pins
        .remove(&pin_key(&id)?)
        .ok_or_else(|| Failure::not_found("Pin"))?;
    if let Some(board) = store.boards.values_mut().find(|b| b.id == pin.board.id) {
        board.counts.pins -= 1;
    }
    Ok(Json(json!({ "data": null })))
}

async fn exchange_token(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, Failure> {
    if params.grant_type != "authorization_code" {
        return Err(Failure::new(StatusCode::BAD_REQUEST, 1, "Unsupported grant_type."));
    }
    if params.redirect_uri.is_empty() {
        return Err(Failure::new(StatusCode::BAD_REQUEST, 1, "redirect_uri is required."));
    }
    if params.client_id.is_empty() || params.client_secret.is_empty() || params.code != AUTH_CODE {
        return Err(Failure::new(
            StatusCode::UNAUTHORIZED,
            3,
            "Invalid authorization code.",
        ));
    }
    Ok(Json(json!({
        "access_token": &*state.token,
        "token_type": "bearer",
        "scope": ["read_public", "write_public"],
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_only_requested_fields() {
        let value = json!({ "id": "1", "note": "n", "color": "#fff" });
        let selected = select(&value, Some("id,note"));
        assert_eq!(selected, json!({ "id": "1", "note": "n" }));
    }

    #[test]
    fn select_without_fields_returns_everything() {
        let value = json!({ "id": "1", "note": "n" });
        assert_eq!(select(&value, None), value);
    }

    #[test]
    fn paginate_emits_cursor_until_last_page() {
        let items: Vec<u32> = (0..5).collect();
        let params = Params {
            limit: Some(2),
            ..Params::default()
        };
        let Json(first) = paginate(&items, &params, "/v1/me/pins/").unwrap();
        assert_eq!(first["data"], json!([0, 1]));
        assert_eq!(first["page"]["cursor"], "2");

        let params = Params {
            limit: Some(2),
            cursor: Some("4".to_string()),
            ..Params::default()
        };
        let Json(last) = paginate(&items, &params, "/v1/me/pins/").unwrap();
        assert_eq!(last["data"], json!([4]));
        assert!(last["page"]["cursor"].is_null());
    }

    #[test]
    fn paginate_rejects_bad_cursor() {
        let params = Params {
            cursor: Some("abc".to_string()),
            ..Params::default()
        };
        assert!(paginate(&[1, 2][..], &params, "/").is_err());
    }

    #[test]
    fn paginate_past_the_end_is_an_empty_last_page() {
        let params = Params {
            cursor: Some(usize::MAX.to_string()),
            limit: Some(MAX_LIMIT),
            ..Params::default()
        };
        let Json(page) = paginate(&[1, 2][..], &params, "/").unwrap();
        assert_eq!(page["data"], json!([]));
        assert!(page["page"]["cursor"].is_null());
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("  Sweet  Recipes "), "sweet-recipes");
    }

    #[test]
    fn create_pin_requires_note() {
        let result: Result<CreatePin, _> = serde_json::from_str(r#"{"board":"alice/x"}"#);
        assert!(result.is_err());
    }
}
