use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    dataset::Dataset,
    query::parse_query,
    session::{CommentKey, Effect, Event, Origin, SessionState},
    submission::{self, LocationReport, Recommendation},
    view,
};

pub struct ApiState {
    dataset: Arc<Dataset>,
    session: Mutex<SessionState>,
}

impl ApiState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            session: Mutex::new(SessionState::new()),
        }
    }

    /// Snapshot of the session overlay for rendering.
    fn session(&self) -> SessionState {
        match self.session.lock() {
            Ok(session) => session.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[derive(Serialize)]
struct ErrJsonResp {
    message: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(browse)
        .service(restaurant)
        .service(home)
        .service(moderation)
        .service(areas)
        .service(recommend_form)
        .service(recommend)
        .service(resolve)
        .service(location);
}

#[actix_web::get("/api/v1/browse")]
async fn browse(data: web::Data<ApiState>, req: HttpRequest) -> HttpResponse {
    let params = parse_query(req.query_string());
    HttpResponse::Ok().json(view::browse(&data.dataset, &params))
}

#[actix_web::get("/api/v1/restaurant")]
async fn restaurant(data: web::Data<ApiState>, req: HttpRequest) -> HttpResponse {
    let params = parse_query(req.query_string());
    match view::detail(&data.dataset, &data.session(), &params) {
        found @ view::DetailView::Found(_) => HttpResponse::Ok().json(found),
        missing => HttpResponse::NotFound().json(missing),
    }
}

#[actix_web::get("/api/v1/home")]
async fn home(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(view::home(&data.dataset))
}

#[actix_web::get("/api/v1/moderation")]
async fn moderation(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(view::moderation(&data.dataset, &data.session()))
}

#[actix_web::get("/api/v1/areas")]
async fn areas(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(view::areas(&data.dataset))
}

#[actix_web::get("/api/v1/recommend")]
async fn recommend_form(data: web::Data<ApiState>, req: HttpRequest) -> HttpResponse {
    let params = parse_query(req.query_string());
    HttpResponse::Ok().json(view::recommend_form(&data.dataset, &params))
}

#[actix_web::post("/api/v1/recommend")]
async fn recommend(
    form: web::Either<web::Json<BTreeMap<String, Value>>, web::Form<Recommendation>>,
) -> HttpResponse {
    let form = match form {
        web::Either::Left(json) => submission::form_from_json(json.into_inner()),
        web::Either::Right(form) => form.into_inner(),
    };
    HttpResponse::Ok().json(submission::submit(&form))
}

#[derive(Deserialize)]
struct ResolveBody {
    #[serde(flatten)]
    key: CommentKey,
    #[serde(default)]
    origin: Origin,
}

#[actix_web::post("/api/v1/resolve")]
async fn resolve(data: web::Data<ApiState>, body: web::Json<ResolveBody>) -> HttpResponse {
    let ResolveBody { key, origin } = body.into_inner();
    let event = Event::ResolveIssue { key, origin };

    let effect = {
        let mut session = match data.session.lock() {
            Ok(session) => session,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (next, effect) = session.apply(&data.dataset, &event);
        *session = next;
        effect
    };

    match effect {
        Effect::NotFound => {
            tracing::warn!(?event, "resolve target does not exist");
            HttpResponse::NotFound().json(ErrJsonResp {
                message: "no such comment".to_string(),
            })
        }
        effect => {
            tracing::info!(?event, ?effect, "issue status updated");
            HttpResponse::Ok().json(effect)
        }
    }
}

#[actix_web::post("/api/v1/location")]
async fn location(report: web::Json<LocationReport>) -> HttpResponse {
    HttpResponse::Ok().json(submission::location_status(&report))
}
