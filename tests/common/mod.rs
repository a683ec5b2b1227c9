//! In-process stand-in for the apps backend, served over real HTTP so the
//! blocking client and the binary can talk to it.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Json, Router};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};

use appdeck::model::{App, AppPayload, HistoryRecord, SettingValue, Settings};

pub const SEED_SQLITE_PATH: &str = "data/apps.db";

#[derive(Debug, Default)]
pub struct StubState {
    pub apps: Vec<App>,
    pub history: Vec<HistoryRecord>,
    pub settings: Settings,
    pub fail_reorder: bool,
    pub restarts: usize,
    next_app_id: i64,
    next_history_id: i64,
    clock: u32,
}

impl StubState {
    fn tick(&mut self) -> String {
        self.clock += 1;
        format!(
            "2024-05-{:02} 10:{:02}:00",
            1 + self.clock / 60,
            self.clock % 60
        )
    }

    fn snapshot(&mut self, app: &App, note: &str) {
        self.next_history_id += 1;
        let created_at = self.tick();
        self.history.push(HistoryRecord {
            id: self.next_history_id,
            app_id: app.id,
            app_name: app.name.clone(),
            tags: app.tags.clone(),
            description: app.description.clone(),
            params: app.params.clone(),
            code: app.code.clone(),
            note: note.to_string(),
            created_at,
        });
    }

    /// Adds an app as if it had been created through the API.
    pub fn seed(&mut self, name: &str, tags: &str, code: &str) -> i64 {
        self.next_app_id += 1;
        let id = self.next_app_id;
        let ts = self.tick();
        let app = App {
            id: Some(id),
            name: name.to_string(),
            tags: tags.to_string(),
            code: code.to_string(),
            position: Some(self.apps.len() as i64 + 1),
            created_at: Some(ts.clone()),
            updated_at: Some(ts),
            ..App::default()
        };
        self.snapshot(&app, "created");
        self.apps.push(app);
        id
    }

    pub fn order(&self) -> Vec<i64> {
        self.apps.iter().filter_map(|a| a.id).collect()
    }
}

type Shared = Arc<Mutex<StubState>>;

pub struct StubBackend {
    pub base_url: String,
    state: Shared,
}

impl StubBackend {
    pub fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap()
    }
}

/// Starts a backend on an ephemeral port. It lives until the test process exits.
pub fn spawn_stub() -> Result<StubBackend> {
    let mut initial = StubState::default();
    initial.settings.insert(
        "sqlite_path".to_string(),
        SettingValue::Entry {
            value: SEED_SQLITE_PATH.to_string(),
            description: Some("SQLite database file path".to_string()),
        },
    );
    let state: Shared = Arc::new(Mutex::new(initial));

    let router = router(state.clone());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = tx.send(Err(anyhow::Error::from(err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = tx.send(Err(anyhow::Error::from(err)));
                    return;
                }
            };
            let _ = tx.send(listener.local_addr().map_err(anyhow::Error::from));
            let _ = axum::serve(listener, router).await;
        });
    });

    let addr = rx
        .recv_timeout(Duration::from_secs(5))
        .context("stub backend did not start")??;
    Ok(StubBackend {
        base_url: format!("http://{}", addr),
        state,
    })
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/apps", get(list_apps).post(create_app))
        .route("/api/apps/reorder", put(reorder_apps))
        .route(
            "/api/apps/:id",
            get(get_app).put(update_app).delete(delete_app),
        )
        .route("/api/apps/:id/execute", post(execute_app))
        .route("/api/apps/:id/history", get(list_history))
        .route("/api/settings", get(get_settings).post(save_settings))
        .route("/api/restart", post(restart))
        .with_state(state)
}

fn status(code: StatusCode, success: bool, message: &str) -> Response {
    (
        code,
        Json(serde_json::json!({"success": success, "message": message})),
    )
        .into_response()
}

fn ok(message: &str) -> Response {
    status(StatusCode::OK, true, message)
}

fn not_found() -> Response {
    status(StatusCode::NOT_FOUND, false, "app does not exist")
}

fn invalid(payload: &AppPayload) -> Option<Response> {
    if payload.name.trim().is_empty() || payload.code.trim().is_empty() {
        return Some(status(
            StatusCode::BAD_REQUEST,
            false,
            "name and code must not be empty",
        ));
    }
    None
}

async fn list_apps(State(state): State<Shared>) -> Response {
    let st = state.lock().unwrap();
    Json(st.apps.clone()).into_response()
}

async fn get_app(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    match st.apps.iter().find(|a| a.id == Some(id)) {
        Some(app) => Json(app.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_app(State(state): State<Shared>, Json(payload): Json<AppPayload>) -> Response {
    if let Some(resp) = invalid(&payload) {
        return resp;
    }
    let mut st = state.lock().unwrap();
    st.next_app_id += 1;
    let ts = st.tick();
    let app = App {
        id: Some(st.next_app_id),
        name: payload.name,
        tags: payload.tags,
        description: payload.description,
        params: payload.params,
        code: payload.code,
        note: String::new(),
        position: Some(st.apps.len() as i64 + 1),
        created_at: Some(ts.clone()),
        updated_at: Some(ts),
    };
    st.snapshot(&app, &payload.note);
    st.apps.push(app);
    ok("app created")
}

async fn update_app(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(payload): Json<AppPayload>,
) -> Response {
    if let Some(resp) = invalid(&payload) {
        return resp;
    }
    let mut st = state.lock().unwrap();
    let ts = st.tick();
    let Some(app) = st.apps.iter_mut().find(|a| a.id == Some(id)) else {
        return not_found();
    };
    app.name = payload.name;
    app.tags = payload.tags;
    app.description = payload.description;
    app.params = payload.params;
    app.code = payload.code;
    app.updated_at = Some(ts);
    let app = app.clone();
    st.snapshot(&app, &payload.note);
    ok("app updated")
}

async fn delete_app(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut st = state.lock().unwrap();
    let before = st.apps.len();
    st.apps.retain(|a| a.id != Some(id));
    if st.apps.len() == before {
        return not_found();
    }
    st.history.retain(|r| r.app_id != Some(id));
    ok("app deleted")
}

#[derive(serde::Deserialize)]
struct ReorderBody {
    order: Vec<i64>,
}

async fn reorder_apps(State(state): State<Shared>, Json(body): Json<ReorderBody>) -> Response {
    let mut st = state.lock().unwrap();
    if st.fail_reorder {
        return status(
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
            "database is locked",
        );
    }
    let rank = |app: &App| {
        app.id
            .and_then(|id| body.order.iter().position(|o| *o == id))
            .unwrap_or(usize::MAX)
    };
    st.apps.sort_by_key(rank);
    for (i, app) in st.apps.iter_mut().enumerate() {
        app.position = Some(i as i64 + 1);
    }
    ok("order updated")
}

async fn execute_app(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    let Some(app) = st.apps.iter().find(|a| a.id == Some(id)) else {
        return not_found();
    };
    let console = format!("exec: python {}.py", id);
    if app.code.contains("fail") {
        return Json(serde_json::json!({
            "success": false,
            "error": "exit status 1",
            "details": "Traceback: boom",
            "output": "",
            "exit_code": 1,
            "console_output": console,
        }))
        .into_response();
    }
    Json(serde_json::json!({
        "success": true,
        "output": format!("hello from {}", app.name),
        "exit_code": 0,
        "console_output": console,
    }))
    .into_response()
}

async fn list_history(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    if !st.apps.iter().any(|a| a.id == Some(id)) {
        return not_found();
    }
    let records: Vec<HistoryRecord> = st
        .history
        .iter()
        .rev()
        .filter(|r| r.app_id == Some(id))
        .cloned()
        .collect();
    Json(records).into_response()
}

async fn get_settings(State(state): State<Shared>) -> Response {
    let st = state.lock().unwrap();
    Json(st.settings.clone()).into_response()
}

async fn save_settings(
    State(state): State<Shared>,
    Json(body): Json<BTreeMap<String, SettingValue>>,
) -> Response {
    let mut st = state.lock().unwrap();
    st.settings.extend(body);
    ok("settings saved")
}

async fn restart(State(state): State<Shared>) -> Response {
    let mut st = state.lock().unwrap();
    st.restarts += 1;
    ok("restarting")
}
