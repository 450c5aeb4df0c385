//! In-process fake of the MediaLogger backend
//!
//! Implements the auth and entries endpoints over in-memory state, enforces
//! bearer tokens, and counts hits per route so tests can assert that no
//! request was sent.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post, put},
};
use common::{KeyValueStore, MemoryStore, Settings};
use medialogger::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Reply = (StatusCode, Json<Value>);

#[derive(Default)]
struct Inner {
    // email -> (username, password)
    users: HashMap<String, (String, String)>,
    // token -> email
    tokens: HashMap<String, String>,
    // (owner email, entry)
    entries: Vec<(String, Value)>,
    next_id: u32,
    hits: HashMap<String, usize>,
    latency: Option<Duration>,
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Inner>>);

impl Shared {
    fn with<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        f(&mut self.0.lock().unwrap())
    }

    async fn hit(&self, route: &str) {
        let latency = self.with(|inner| {
            *inner.hits.entry(route.to_string()).or_default() += 1;
            inner.latency
        });
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn owner(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .to_string();
        self.with(|inner| inner.tokens.get(&token).cloned())
    }
}

fn unauthorized() -> Reply {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"})))
}

fn not_found() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Entry not found"})))
}

async fn login(State(shared): State<Shared>, Json(body): Json<Value>) -> Reply {
    shared.hit("POST /api/auth/login").await;
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();

    let valid = shared.with(|inner| {
        inner
            .users
            .get(&email)
            .is_some_and(|(_, stored)| stored == password)
    });
    if !valid {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"ok": false, "error": "Invalid credentials"})),
        );
    }

    let token = format!("tok-{email}");
    shared.with(|inner| inner.tokens.insert(token.clone(), email));
    (StatusCode::OK, Json(json!({"ok": true, "token": token})))
}

async fn register(State(shared): State<Shared>, Json(body): Json<Value>) -> Reply {
    shared.hit("POST /api/auth/register").await;
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    let taken = shared.with(|inner| inner.users.contains_key(&email));
    if taken {
        return (
            StatusCode::CONFLICT,
            Json(json!({"ok": false, "error": "Email already registered"})),
        );
    }

    shared.with(|inner| inner.users.insert(email.clone(), (username.clone(), password)));

    // accounts named "pending..." must log in separately
    if username.starts_with("pending") {
        return (StatusCode::CREATED, Json(json!({"ok": true})));
    }

    let token = format!("tok-{email}");
    shared.with(|inner| inner.tokens.insert(token.clone(), email));
    (StatusCode::CREATED, Json(json!({"ok": true, "token": token})))
}

async fn list(State(shared): State<Shared>, headers: HeaderMap) -> Reply {
    shared.hit("GET /api/entries").await;
    let Some(owner) = shared.owner(&headers) else {
        return unauthorized();
    };

    let entries: Vec<Value> = shared.with(|inner| {
        inner
            .entries
            .iter()
            .filter(|(entry_owner, _)| *entry_owner == owner)
            .map(|(_, entry)| entry.clone())
            .collect()
    });
    (StatusCode::OK, Json(Value::Array(entries)))
}

async fn create(State(shared): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    shared.hit("POST /api/entries").await;
    let Some(owner) = shared.owner(&headers) else {
        return unauthorized();
    };

    if !(1..=5).contains(&body["rating"].as_u64().unwrap_or(0)) {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Rating out of range"})));
    }

    let entry = shared.with(|inner| {
        inner.next_id += 1;
        let entry = json!({
            "_id": format!("e{}", inner.next_id),
            "title": body["title"],
            "mediaType": body["mediaType"],
            "rating": body["rating"],
        });
        inner.entries.push((owner, entry.clone()));
        entry
    });
    (StatusCode::CREATED, Json(entry))
}

async fn update(
    State(shared): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    shared.hit("PUT /api/entries/:id").await;
    let Some(owner) = shared.owner(&headers) else {
        return unauthorized();
    };

    shared.with(|inner| {
        let found = inner
            .entries
            .iter_mut()
            .find(|(entry_owner, entry)| *entry_owner == owner && entry["_id"] == id.as_str());
        match found {
            Some((_, entry)) => {
                for field in ["title", "mediaType", "rating"] {
                    entry[field] = body[field].clone();
                }
                (StatusCode::OK, Json(entry.clone()))
            }
            None => not_found(),
        }
    })
}

async fn remove(State(shared): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    shared.hit("DELETE /api/entries/:id").await;
    let Some(owner) = shared.owner(&headers) else {
        return unauthorized();
    };

    shared.with(|inner| {
        let before = inner.entries.len();
        inner
            .entries
            .retain(|(entry_owner, entry)| !(*entry_owner == owner && entry["_id"] == id.as_str()));
        if inner.entries.len() == before {
            not_found()
        } else {
            (StatusCode::OK, Json(json!({"ok": true})))
        }
    })
}

/// Running fake backend
pub struct FakeBackend {
    pub base_url: String,
    shared: Shared,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let shared = Shared::default();
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/entries", get(list).post(create))
            .route("/api/entries/:id", put(update).delete(remove))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            shared,
        }
    }

    pub fn add_user(&self, username: &str, email: &str, password: &str) {
        self.shared.with(|inner| {
            inner
                .users
                .insert(email.to_string(), (username.to_string(), password.to_string()))
        });
    }

    /// Issue a token for an existing user without going through login
    pub fn issue_token(&self, email: &str) -> String {
        let token = format!("tok-{email}");
        self.shared
            .with(|inner| inner.tokens.insert(token.clone(), email.to_string()));
        token
    }

    pub fn entries_of(&self, email: &str) -> Vec<Value> {
        self.shared.with(|inner| {
            inner
                .entries
                .iter()
                .filter(|(owner, _)| owner == email)
                .map(|(_, entry)| entry.clone())
                .collect()
        })
    }

    /// Number of requests received for a route such as `POST /api/entries`
    pub fn hits(&self, route: &str) -> usize {
        self.shared
            .with(|inner| inner.hits.get(route).copied().unwrap_or(0))
    }

    pub fn total_hits(&self) -> usize {
        self.shared.with(|inner| inner.hits.values().sum())
    }

    pub fn set_latency(&self, latency: Duration) {
        self.shared.with(|inner| inner.latency = Some(latency));
    }
}

/// Settings pointing at `base_url`
pub fn settings_for(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings
}

/// App state over a fresh in-memory session store
pub fn app_state(base_url: &str) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(&settings_for(base_url), store.clone());
    (state, store)
}

/// App state whose session already holds `token`
pub async fn signed_in_state(base_url: &str, token: &str) -> (AppState, Arc<MemoryStore>) {
    let (state, store) = app_state(base_url);
    store.set("token", token).await.unwrap();
    (state, store)
}

/// Base URL of a port nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
