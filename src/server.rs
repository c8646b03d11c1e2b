//! HTTP surface: the page, static assets, a health probe and resolver metrics.

use crate::catalog::SiteContent;
use crate::config::Config;
use crate::i18n::{Language, LocaleCatalog, LocaleValidator, MetricsReport, PAGE_KEYS};
use crate::render::{render_page, RenderContext};
use crate::state::{PageQuery, PageState};
use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Read-only data shared by every request.
pub struct AppState {
    pub content: SiteContent,
    pub locales: LocaleCatalog,
    pub default_language: Language,
}

impl AppState {
    /// Load content and locales from the configured paths, or the embedded
    /// defaults, and log locale validation findings.
    pub fn load(config: &Config) -> Result<Self> {
        let content = match &config.content_file {
            Some(path) => SiteContent::from_file(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?,
            None => SiteContent::embedded().context("Embedded content is invalid")?,
        };
        if content.catalog.is_empty() {
            warn!("Content has no locations, the menu will show its empty state");
        } else {
            info!(
                "Loaded {} locations and {} reviews",
                content.catalog.len(),
                content.reviews.len()
            );
        }

        let locales = match &config.locales_dir {
            Some(dir) => LocaleCatalog::from_dir(dir)
                .with_context(|| format!("Failed to load locales from {}", dir.display()))?,
            None => LocaleCatalog::embedded().context("Embedded locales are invalid")?,
        };

        let mut required: Vec<String> = PAGE_KEYS.iter().map(|key| key.to_string()).collect();
        required.extend(content.required_keys());
        let report = LocaleValidator::validate(&locales, &required);
        for error in &report.errors {
            warn!("Locale error: {}", error);
        }
        for warning in &report.warnings {
            warn!("Locale warning: {}", warning);
        }
        if report.is_clean() {
            info!("✓ Locales complete for {} languages", locales.languages().len());
        }

        Ok(Self {
            content,
            locales,
            default_language: config.default_language,
        })
    }

    /// Tab shown when the query names none.
    pub fn default_tab(&self) -> &str {
        self.content
            .catalog
            .first()
            .map(|location| location.id.as_str())
            .unwrap_or_default()
    }

    /// Render the page for a parsed query.
    pub fn render(&self, query: &PageQuery) -> String {
        let state = PageState::from_query(query, self.default_language, self.default_tab());
        let ctx = RenderContext::new(&self.content, &self.locales, &state);
        render_page(&ctx).into_string()
    }
}

pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health))
        .route("/metrics", get(metrics))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The page never rejects its query string: repeated keys keep their first
/// value and an undecodable query renders the defaults.
async fn index(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Html<String> {
    let query = match query {
        Ok(Query(pairs)) => PageQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!("Rendering defaults for unreadable query: {}", rejection);
            PageQuery::default()
        }
    };
    Html(state.render(&query))
}

async fn health() -> &'static str {
    "ok"
}

async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsReport> {
    Json(state.locales.metrics().report())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config, state: Arc<AppState>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state, &config.static_dir))
        .await
        .context("Server error")?;
    Ok(())
}
