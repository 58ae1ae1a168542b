//! Single binary JSON API over the tournament finder engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, TOURNAMENTS_FILE (.json or .csv; demo data when unset).

use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tournament_finder::data::{self, decode_json_record, ingest_decoded};
use tournament_finder::{
    demo_tournaments, load_file, type_facets, Catalog, DateFacet, GroupedTournaments, Ingested,
    Query, SourceFormat, Tournament, TournamentError, TournamentId,
};

/// Current catalog snapshot plus where it was loaded from (for reloads).
/// Handlers clone the `Arc` and release the lock before running a query.
struct Store {
    catalog: RwLock<Arc<Catalog>>,
    data_file: Option<PathBuf>,
}

type AppState = Data<Store>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    tournaments: usize,
}

fn default_filter() -> String {
    "all".to_string()
}

/// Query string of `GET /api/tournaments`.
#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    search: String,
    #[serde(rename = "type", default = "default_filter")]
    kind: String,
    #[serde(default = "default_filter")]
    date: String,
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    total: usize,
    groups: GroupedTournaments<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TournamentDetail<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    date_range: String,
    month: String,
}

#[derive(Serialize)]
struct FacetsResponse<'a> {
    types: Vec<&'static str>,
    dates: &'a [DateFacet],
}

#[derive(Serialize)]
struct RejectedView {
    position: usize,
    id: Option<TournamentId>,
    error: String,
}

#[derive(Serialize)]
struct ReplaceResponse {
    accepted: usize,
    rejected: Vec<RejectedView>,
}

impl From<&Ingested> for ReplaceResponse {
    fn from(ingested: &Ingested) -> Self {
        Self {
            accepted: ingested.tournaments.len(),
            rejected: ingested
                .rejected
                .iter()
                .map(|r| RejectedView {
                    position: r.position,
                    id: r.id,
                    error: r.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn snapshot(state: &AppState) -> Result<Arc<Catalog>, HttpResponse> {
    match state.catalog.read() {
        Ok(guard) => Ok(Arc::clone(&guard)),
        Err(_) => Err(HttpResponse::InternalServerError().body("lock error")),
    }
}

fn swap_catalog(state: &AppState, ingested: &Ingested) -> HttpResponse {
    let catalog = Arc::new(Catalog::new(ingested.tournaments.clone()));
    let mut g = match state.catalog.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    *g = catalog;
    HttpResponse::Ok().json(ReplaceResponse::from(ingested))
}

#[get("/api/health")]
async fn api_health(state: AppState) -> HttpResponse {
    let catalog = match snapshot(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-finder",
        tournaments: catalog.len(),
    })
}

/// Filtered tournaments grouped by month and status.
#[get("/api/tournaments")]
async fn api_search(state: AppState, params: web::Query<SearchParams>) -> HttpResponse {
    let catalog = match snapshot(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let query = match Query::parse(&params.search, &params.kind, &params.date) {
        Ok(q) => q,
        Err(e) => return error_response(&e),
    };
    let groups = catalog.search(&query);
    HttpResponse::Ok().json(SearchResponse {
        total: groups.total(),
        groups,
    })
}

/// One tournament with its display labels (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let catalog = match snapshot(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    match catalog.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(TournamentDetail {
            tournament: t,
            date_range: t.date_range_label(),
            month: t.month_label(),
        }),
        Err(e) => error_response(&e),
    }
}

/// Values for the type and date selectors.
#[get("/api/facets")]
async fn api_facets(state: AppState) -> HttpResponse {
    let catalog = match snapshot(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(FacetsResponse {
        types: type_facets(),
        dates: catalog.date_facets(),
    })
}

/// Replace the whole store with the posted records. Records that fail to decode or
/// validate are reported, not stored.
#[put("/api/tournaments")]
async fn api_replace_tournaments(
    state: AppState,
    body: Json<Vec<serde_json::Value>>,
) -> HttpResponse {
    let ingested = ingest_decoded(body.into_inner().into_iter().map(decode_json_record));
    swap_catalog(&state, &ingested)
}

/// Re-read TOURNAMENTS_FILE and swap the catalog.
#[post("/api/tournaments/reload")]
async fn api_reload(state: AppState) -> HttpResponse {
    let path = match &state.data_file {
        Some(p) => p.clone(),
        None => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "No TOURNAMENTS_FILE configured" }))
        }
    };
    let parsed = match SourceFormat::from_path(&path) {
        Ok(format) => match tokio::fs::read(&path).await {
            Ok(bytes) => data::parse(format, &bytes),
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e),
    };
    match parsed {
        Ok(ingested) => {
            log::info!(
                "Reloaded {} tournament(s) from {} ({} rejected)",
                ingested.tournaments.len(),
                path.display(),
                ingested.rejected.len()
            );
            swap_catalog(&state, &ingested)
        }
        Err(e) => {
            log::error!("Reload of {} failed: {}", path.display(), e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Register every API route.
fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_facets)
        .service(api_reload)
        .service(api_search)
        .service(api_replace_tournaments)
        .service(api_get_tournament);
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var_os("TOURNAMENTS_FILE").map(PathBuf::from);

    let tournaments = match &data_file {
        Some(path) => load_file(path)
            .map_err(|e| std::io::Error::other(e.to_string()))?
            .tournaments,
        None => {
            log::info!("TOURNAMENTS_FILE not set, serving demo tournaments");
            demo_tournaments()
        }
    };

    let state = Data::new(Store {
        catalog: RwLock::new(Arc::new(Catalog::new(tournaments))),
        data_file,
    });

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new().app_data(state.clone()).configure(configure)
    })
    .bind(bind)?
    .run()
    .await
}
