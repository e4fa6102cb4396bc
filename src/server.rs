//! HTTP surface over the i18n core.
//!
//! Every request passes through [`resolve_locale`] first: the locale prefix
//! is read from the path, a [`PageContext`] is attached to the request, and
//! the URI is rewritten to the logical path so routes are declared once for
//! all locales.

use crate::config::Config;
use crate::context::PageContext;
use crate::i18n::{
    expand_prerender, AlternateLink, CoverageReport, I18nError, LinkState, Locale, MetricsReport,
    PrerenderPage, TextDirection, TranslationMetrics, TranslationTable, TranslationValidator,
};
use axum::{
    extract::{Query, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Error returned by handlers, rendered as JSON.
#[derive(Debug)]
pub struct ApiError(I18nError);

impl From<I18nError> for ApiError {
    fn from(err: I18nError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            I18nError::MissingTranslation { .. } => StatusCode::NOT_FOUND,
            I18nError::UnknownLocale(_) => StatusCode::BAD_REQUEST,
            I18nError::InvalidPattern { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the application router.
///
/// Routes are matched against the logical path; the locale middleware wraps
/// the whole route table so it runs before matching.
pub fn router(config: Arc<Config>) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/api/context", get(context))
        .route("/api/translate", get(translate_text))
        .route("/api/link", get(link))
        .route("/api/alternates", get(alternates))
        .route("/api/prerender", get(prerender))
        .route("/api/coverage", get(coverage))
        .route("/api/metrics", get(metrics))
        .with_state(AppState { config });

    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(resolve_locale))
        .layer(TraceLayer::new_for_http())
}

/// Resolve the request locale and rewrite the URI to its logical path.
pub async fn resolve_locale(mut request: Request, next: Next) -> Response {
    let original = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let ctx = PageContext::from_url(&original);

    let logical = match ctx.query() {
        Some(query) => format!("{}?{}", ctx.url_logical, query),
        None => ctx.url_logical.clone(),
    };
    match logical.parse::<Uri>() {
        Ok(uri) => *request.uri_mut() = uri,
        Err(e) => warn!(url = %original, error = %e, "Could not rewrite to logical URL"),
    }

    debug!(locale = %ctx.locale, logical = %ctx.url_logical, "Resolved request locale");
    request.extensions_mut().insert(ctx);
    next.run(request).await
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Serialize)]
struct ContextResponse {
    #[serde(flatten)]
    page: PageContext,
    direction: TextDirection,
    language: &'static str,
}

async fn context(Extension(ctx): Extension<PageContext>) -> Json<ContextResponse> {
    Json(ContextResponse {
        direction: ctx.direction(),
        language: ctx.locale.native_name(),
        page: ctx,
    })
}

#[derive(Deserialize)]
struct TranslateParams {
    text: String,
    locale: Option<Locale>,
}

#[derive(Serialize)]
struct TranslateResponse {
    text: String,
    locale: Locale,
    translation: String,
}

async fn translate_text(
    Extension(ctx): Extension<PageContext>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let locale = params.locale.unwrap_or(ctx.locale);
    let translation = TranslationTable::global()
        .translate(&params.text, locale)?
        .to_string();

    Ok(Json(TranslateResponse {
        text: params.text,
        locale,
        translation,
    }))
}

#[derive(Deserialize)]
struct LinkParams {
    href: String,
    locale: Option<Locale>,
    threshold: Option<usize>,
}

#[derive(Serialize)]
struct LinkResponse {
    #[serde(flatten)]
    state: LinkState,
    class_names: Vec<&'static str>,
    target: Option<&'static str>,
}

async fn link(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    Query(params): Query<LinkParams>,
) -> Json<LinkResponse> {
    let threshold = params
        .threshold
        .unwrap_or(state.config.link_highlight_threshold);
    let link_state = ctx.link(&params.href, params.locale, threshold);

    Json(LinkResponse {
        class_names: link_state.class_names(),
        target: link_state.target(),
        state: link_state,
    })
}

#[derive(Serialize)]
struct AlternatesResponse {
    links: Vec<AlternateLink>,
    html: Vec<String>,
}

async fn alternates(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
) -> Json<AlternatesResponse> {
    let links = ctx.alternates(&state.config.site_domain);
    let html = links.iter().map(AlternateLink::to_html).collect();
    Json(AlternatesResponse { links, html })
}

async fn prerender(State(state): State<AppState>) -> Json<Vec<PrerenderPage>> {
    Json(expand_prerender(state.config.prerender_routes.as_slice()))
}

async fn coverage() -> Json<CoverageReport> {
    Json(TranslationValidator::new(TranslationTable::global()).coverage())
}

async fn metrics() -> Json<MetricsReport> {
    Json(TranslationMetrics::global().report())
}
