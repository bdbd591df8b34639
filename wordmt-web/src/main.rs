use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use wordmt::{
    CorpusPair, MtError, Prediction, Suggestion, TableEntry, Translator, TranslatorConfig,
    TranslatorState, load_alignment_memory_from_file, load_corpus_from_file,
};

const BIND_VAR: &str = "WORDMT_BIND";
const CORPUS_VAR: &str = "WORDMT_CORPUS";
const MEMORY_VAR: &str = "WORDMT_MEMORY";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Largest `max_suggestions` a client may request
pub const MAX_SUGGESTIONS_LIMIT: usize = 20;

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub sentence: String,
    pub max_suggestions: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct PredictionView {
    pub alignment: String,
    pub source: String,
    pub target: String,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize)]
pub struct SuggestionView {
    pub display: String,
    pub confidence: f64,
    pub predictions: Vec<PredictionView>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub suggestions: Vec<SuggestionView>,
}

#[derive(Serialize, Deserialize)]
pub struct EntryView {
    pub key: String,
    pub predictions: Vec<PredictionView>,
}

#[derive(Serialize, Deserialize)]
pub struct VerboseResponse {
    pub entries: Vec<EntryView>,
}

#[derive(Serialize, Deserialize)]
pub struct CorpusRequest {
    pub pairs: Vec<(String, String)>,
}

#[derive(Serialize, Deserialize)]
pub struct MemoryRequest {
    pub source: String,
    pub target: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub state: TranslatorState,
    pub corpus_size: usize,
    pub memory_size: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Mutex<Translator>>,
}

impl AppState {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator: Arc::new(Mutex::new(translator)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Translator>, ApiError> {
        lock_translator(&self.translator)
    }

    /// Run `f` on the translator from the blocking thread pool.
    ///
    /// Translation may rebuild the prediction index, which aligns the whole
    /// corpus, so it must not run on an async worker.
    async fn with_translator<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Translator) -> Result<T, ApiError> + Send + 'static,
    {
        let translator = Arc::clone(&self.translator);
        tokio::task::spawn_blocking(move || {
            let mut guard = lock_translator(&translator)?;
            f(&mut guard)
        })
        .await
        .map_err(|e| {
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Translation task failed: {}", e),
            )
        })?
    }
}

fn lock_translator(translator: &Mutex<Translator>) -> Result<MutexGuard<'_, Translator>, ApiError> {
    translator
        .lock()
        .map_err(|_| error(StatusCode::INTERNAL_SERVER_ERROR, "Translator lock poisoned"))
}

fn check_max_suggestions(requested: Option<usize>) -> Result<Option<usize>, ApiError> {
    match requested {
        Some(count) if count > MAX_SUGGESTIONS_LIMIT => Err(error(
            StatusCode::BAD_REQUEST,
            format!(
                "max_suggestions must be at most {}, got {}",
                MAX_SUGGESTIONS_LIMIT, count
            ),
        )),
        _ => Ok(requested),
    }
}

impl From<&Prediction> for PredictionView {
    fn from(prediction: &Prediction) -> Self {
        Self {
            alignment: prediction.key(),
            source: prediction.source().to_string(),
            target: prediction.target().to_string(),
            confidence: prediction.confidence(),
        }
    }
}

impl From<&Suggestion> for SuggestionView {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            display: suggestion.to_string(),
            confidence: suggestion.compound_confidence(),
            predictions: suggestion.predictions().iter().map(PredictionView::from).collect(),
        }
    }
}

impl From<&TableEntry> for EntryView {
    fn from(entry: &TableEntry) -> Self {
        Self {
            key: entry.key.clone(),
            predictions: entry.predictions.iter().map(PredictionView::from).collect(),
        }
    }
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn translation_error(e: MtError) -> ApiError {
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Translation failed: {}", e),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/translate", post(translate))
        .route("/api/translate/verbose", post(translate_verbose))
        .route("/api/corpus", post(append_corpus))
        .route("/api/memory", post(append_memory))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the translator from configuration and the optional preload files
fn load_translator() -> Result<Translator, Box<dyn std::error::Error>> {
    let config = TranslatorConfig::from_env()?;
    let mut translator = Translator::with_config(config)?;

    if let Ok(path) = std::env::var(CORPUS_VAR) {
        let corpus = load_corpus_from_file(Path::new(&path))?;
        info!("📚 Loaded {} sentence pairs from {}", corpus.len(), path);
        translator.append_corpus(&corpus);
    }

    if let Ok(path) = std::env::var(MEMORY_VAR) {
        let memory = load_alignment_memory_from_file(Path::new(&path))?;
        info!("🧠 Loaded {} approved alignments from {}", memory.len(), path);
        for entry in &memory {
            if let Err(e) = translator.append_alignment_memory_from_text(&entry.source, &entry.target)
            {
                warn!("Skipping alignment {:?} -> {:?}: {}", entry.source, entry.target, e);
            }
        }
    }

    Ok(translator)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let translator =
        load_translator().map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let state = AppState::new(translator);

    info!("Starting wordmt web server");

    let app = router(state);

    let bind = std::env::var(BIND_VAR).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("🚀 Server running at http://{}", bind);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let translator = state.lock()?;
    Ok(Json(HealthResponse {
        status: "ok",
        state: translator.state(),
        corpus_size: translator.corpus().len(),
        memory_size: translator.alignment_memory().len(),
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let requested = check_max_suggestions(request.max_suggestions)?;

    let suggestions = state
        .with_translator(move |translator| {
            let max_suggestions =
                requested.unwrap_or_else(|| translator.default_max_suggestions());
            info!(
                "Translating '{}' ({} suggestions)",
                &request.sentence, max_suggestions
            );
            translator
                .translate(&request.sentence, max_suggestions)
                .map_err(translation_error)
        })
        .await?;

    Ok(Json(TranslateResponse {
        suggestions: suggestions.iter().map(SuggestionView::from).collect(),
    }))
}

async fn translate_verbose(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<VerboseResponse>, ApiError> {
    let requested = check_max_suggestions(request.max_suggestions)?;

    let table = state
        .with_translator(move |translator| {
            let max_suggestions =
                requested.unwrap_or_else(|| translator.default_max_suggestions());
            translator
                .translate_verbose(&request.sentence, max_suggestions)
                .map_err(translation_error)
        })
        .await?;

    Ok(Json(VerboseResponse {
        entries: table.iter().map(EntryView::from).collect(),
    }))
}

async fn append_corpus(
    State(state): State<AppState>,
    Json(request): Json<CorpusRequest>,
) -> Result<StatusCode, ApiError> {
    let pairs: Vec<CorpusPair> = request.pairs.into_iter().map(CorpusPair::from).collect();
    let mut translator = state.lock()?;
    translator.append_corpus(&pairs);
    info!(
        "Appended {} sentence pairs (corpus size {})",
        pairs.len(),
        translator.corpus().len()
    );
    Ok(StatusCode::NO_CONTENT)
}

async fn append_memory(
    State(state): State<AppState>,
    Json(request): Json<MemoryRequest>,
) -> Result<StatusCode, ApiError> {
    let mut translator = state.lock()?;
    translator
        .append_alignment_memory_from_text(&request.source, &request.target)
        .map_err(|e| error(StatusCode::BAD_REQUEST, e.to_string()))?;
    info!("Approved alignment '{}' -> '{}'", request.source, request.target);
    Ok(StatusCode::NO_CONTENT)
}
