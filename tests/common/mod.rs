//! In-process stand-in for the prediction service.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use overrun_dashboard::domain::{MaterialAvailability, ProjectInput, ProjectType, Terrain, VendorPerformance};

/// What the mock answers with.
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Delayed(Duration, Value),
}

/// A request as the service saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub body: Value,
    pub request_id: Option<String>,
}

#[derive(Clone)]
pub struct MockService {
    reply: Arc<Mutex<Reply>>,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockService {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock() = reply;
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().clone()
    }

    /// Bind to an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/predict", post(predict))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}")
    }
}

async fn predict(
    State(service): State<MockService>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    service.received.lock().push(Received {
        body,
        request_id: headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let reply = service.reply.lock().clone();
    match reply {
        Reply::Json(status, value) => (status, Json(value)).into_response(),
        Reply::Text(status, text) => (status, text).into_response(),
        Reply::Delayed(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
    }
}

/// An address nothing is listening on.
pub async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn line_a() -> ProjectInput {
    ProjectInput {
        project_name: "Line A".to_string(),
        project_type: ProjectType::Transmission,
        terrain: Terrain::Plains,
        vendor_performance: VendorPerformance::Good,
        material_availability: MaterialAvailability::Medium,
    }
}

pub fn line_a_prediction() -> Value {
    json!({
        "predictedTimeOverrun": 45,
        "predictedCostOverrun": 12.5,
        "confidenceScore": 82.3,
        "hotspots": [
            {"feature": "Terrain", "impact": 15, "description": "x"},
            {"feature": "Vendor", "impact": -5, "description": "y"}
        ],
        "historicalData": {"overruns": [10, 20, 30, 40, 50]},
        "riskCategories": [
            {"category": "Logistics", "percentage": 60},
            {"category": "Weather", "percentage": 40}
        ]
    })
}
