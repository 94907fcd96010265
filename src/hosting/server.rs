use super::desk::Desk;
use super::webhook::Webhook;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::time::SystemTime;

pub struct Server;

impl Server {
    pub async fn run(desk: Desk, bind: &str) -> anyhow::Result<()> {
        let state = web::Data::new(desk);
        log::info!("[server] listening on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .app_data(state.clone())
                .route("/webhook", web::post().to(webhook))
                .route("/status", web::get().to(status))
                .route("/health", web::get().to(health))
        })
        .workers(1)
        .bind(bind)?
        .run()
        .await?;
        Ok(())
    }
}

/// Always 200: the upstream retries anything else, and nothing the desk
/// rejects would succeed on a retry.
async fn webhook(desk: web::Data<Desk>, body: web::Bytes) -> impl Responder {
    match serde_json::from_slice::<Webhook>(&body) {
        Ok(hook) => match hook.inbound() {
            Some(inbound) => {
                desk.handle(inbound, SystemTime::now()).await;
            }
            None => log::debug!("[server] update without text"),
        },
        Err(e) => log::warn!("[server] malformed update: {}", e),
    }
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

async fn status(desk: web::Data<Desk>) -> impl Responder {
    let snapshot = desk.snapshot().await;
    HttpResponse::Ok().json(serde_json::json!({
        "handled": desk.handled(),
        "tracker": snapshot,
    }))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
