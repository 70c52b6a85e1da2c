//! Single binary web server: orders match lists for the schedule and results pages via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{self, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use table_tennis_matches::{
    partition, FilterOptions, GroupDescriptor, GroupIndex, MatchRecord, PartitionCounts,
};

/// Full tournament match lists exceed actix's default 32 KiB JSON limit.
const JSON_BODY_LIMIT: usize = 4 * 1024 * 1024;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Raw filter values, as the pages keep them in the URL.
#[derive(Deserialize)]
struct OrderQuery {
    states: Option<String>,
    groups: Option<String>,
    search: Option<String>,
}

#[derive(Deserialize)]
struct OrderBody {
    matches: Vec<MatchRecord>,
    #[serde(default)]
    groups: Vec<GroupDescriptor>,
}

#[derive(Serialize)]
struct OrderResponse<'a> {
    matches: Vec<&'a MatchRecord>,
    counts: PartitionCounts,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "table-tennis-matches",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Filter and order a match list (ongoing, then upcoming, then finished).
#[post("/api/matches/ordered")]
async fn api_order_matches(query: Query<OrderQuery>, body: Json<OrderBody>) -> HttpResponse {
    let filters = match FilterOptions::from_query(
        query.states.as_deref(),
        query.groups.as_deref(),
        query.search.as_deref(),
    ) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("Rejected match filter: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    let body = body.into_inner();
    let groups: GroupIndex = body.groups.into_iter().collect();
    let sections = partition(&body.matches, &filters, &groups);
    let counts = sections.counts();
    HttpResponse::Ok().json(OrderResponse {
        matches: sections.concat(),
        counts,
    })
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
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .service(api_health)
            .service(favicon)
            .service(api_order_matches)
    })
    .bind(bind)?
    .run()
    .await
}
