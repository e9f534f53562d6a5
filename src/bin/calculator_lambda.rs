//! Serverless HTTP function exposing the calculators as JSON endpoints
//!
//! Routes (all POST, JSON body):
//!   /savings        SavingsForm      -> ProjectionResult
//!   /budget         BudgetRequest    -> BudgetReport
//!   /subscriptions  [Subscription]   -> SubscriptionSummary

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use log::{info, warn};
use savings_planner::budget::{plan_budget, BudgetInput, BudgetRule};
use savings_planner::savings::{ProjectionEngine, SavingsForm};
use savings_planner::subscriptions::{summarize, Subscription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct BudgetRequest {
    #[serde(flatten)]
    input: BudgetInput,
    #[serde(default)]
    rule: Option<BudgetRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SavingsResponse {
    #[serde(flatten)]
    result: savings_planner::ProjectionResult,
    time_to_goal: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Status code and JSON body for a request
fn route(method: &str, path: &str, body: &[u8]) -> (u16, String) {
    if method != "POST" {
        return error(405, format!("method {} not allowed", method));
    }

    let outcome = match path.trim_end_matches('/') {
        "/savings" => handle_savings(body),
        "/budget" => handle_budget(body),
        "/subscriptions" => handle_subscriptions(body),
        other => return error(404, format!("no calculator at {}", other)),
    };

    match outcome {
        Ok(json) => (200, json),
        Err(message) => {
            warn!("Rejected {} request: {}", path, message);
            error(400, message)
        }
    }
}

fn error(status: u16, message: String) -> (u16, String) {
    let body = serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| String::from("{\"error\":\"internal error\"}"));
    (status, body)
}

fn handle_savings(body: &[u8]) -> Result<String, String> {
    let form: SavingsForm = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    let input = form.validate().map_err(|e| e.to_string())?;
    let result = ProjectionEngine::default().project(&input);
    let response = SavingsResponse {
        time_to_goal: result.time_to_goal_label(),
        result,
    };
    serde_json::to_string(&response).map_err(|e| e.to_string())
}

fn handle_budget(body: &[u8]) -> Result<String, String> {
    let request: BudgetRequest = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    if !request.input.income.is_finite() || request.input.income < 0.0 {
        return Err("income must be a non-negative number".to_string());
    }
    let report = plan_budget(&request.input, &request.rule.unwrap_or_default());
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

fn handle_subscriptions(body: &[u8]) -> Result<String, String> {
    let subscriptions: Vec<Subscription> = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    if let Some(bad) = subscriptions.iter().find(|s| !(s.monthly_cost >= 0.0)) {
        return Err(format!("monthly cost for '{}' must not be negative", bad.name));
    }
    serde_json::to_string(&summarize(&subscriptions)).map_err(|e| e.to_string())
}

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();
    info!("{} {}", method, path);

    let (status, json) = route(&method, &path, event.body().as_ref());

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(json))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
