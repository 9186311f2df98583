use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use super::types::{ErrorResponse, SimulateRequest};
use crate::remote::client::RemoteClient;
use crate::remote::types::ExecutionOutcome;
use crate::simulation::engine;
use crate::simulation::error::SimulationError;
use crate::simulation::parser::parse_references;
use crate::simulation::types::Algorithm;

type SimulateReply = Result<Json<ExecutionOutcome>, (StatusCode, Json<ErrorResponse>)>;

pub async fn handle_fifo(
    client: Extension<Arc<RemoteClient>>,
    req: Json<SimulateRequest>,
) -> SimulateReply {
    simulate(Algorithm::Fifo, client, req).await
}

pub async fn handle_lru(
    client: Extension<Arc<RemoteClient>>,
    req: Json<SimulateRequest>,
) -> SimulateReply {
    simulate(Algorithm::Lru, client, req).await
}

pub async fn handle_optimo(
    client: Extension<Arc<RemoteClient>>,
    req: Json<SimulateRequest>,
) -> SimulateReply {
    simulate(Algorithm::Optimo, client, req).await
}

pub async fn handle_health() -> &'static str {
    "Page Replacement Service is running"
}

// Generic execution path - the public handlers are concrete wrappers per algorithm
async fn simulate(
    algorithm: Algorithm,
    Extension(client): Extension<Arc<RemoteClient>>,
    Json(req): Json<SimulateRequest>,
) -> SimulateReply {
    if req.marcos < 1 {
        return Err(bad_request("the frame count must be a positive integer"));
    }
    let marcos = req.marcos as usize;

    // Validate up front so invalid input never reaches the network
    if let Err(SimulationError::InvalidInput(message)) =
        parse_references(&req.referencias, marcos)
    {
        tracing::debug!("Rejected {} request: {}", algorithm, message);
        return Err(bad_request(&message));
    }

    if client.config().local_mode {
        return match engine::run(algorithm, &req.referencias, marcos) {
            Ok(result) => Ok(Json(ExecutionOutcome::Local(result))),
            Err(SimulationError::InvalidInput(message)) => Err(bad_request(&message)),
        };
    }

    match client.execute(algorithm, &req.referencias, marcos).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(SimulationError::InvalidInput(message)) => Err(bad_request(&message)),
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
