//! Ticket assignment endpoint

use crate::models::{ApiError, AssignmentDto, AssignmentRequest, AssignmentResponse};
use crate::ApiState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use desk_assign::{Agent, Ticket};
use std::sync::Arc;

/// Run one assignment pass over the submitted dataset
#[utoipa::path(
    post,
    path = "/v1/ticket-assignment",
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignments computed", body = AssignmentResponse),
        (status = 400, description = "Payload failed validation", body = ApiError),
        (status = 500, description = "Workload snapshot could not be persisted", body = ApiError)
    ),
    tag = "assignments"
)]
pub async fn create_assignments(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AssignmentRequest>,
) -> Response {
    let agents: Vec<Agent> = request.agents.into_iter().map(Agent::from).collect();
    let tickets: Vec<Ticket> = request.tickets.into_iter().map(Ticket::from).collect();

    match state.service.run(&agents, &tickets) {
        Ok(assignments) => {
            let response = AssignmentResponse {
                assignments: assignments.into_iter().map(AssignmentDto::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) if e.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("validation_error", &e.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "assignment run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal_error", &e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{build_router, ApiState};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use desk_assign::{DispatchService, MemoryWorkloadStore};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn test_server() -> TestServer {
        let state = Arc::new(ApiState {
            service: DispatchService::new(MemoryWorkloadStore::new()),
        });
        TestServer::new(build_router(state)).unwrap()
    }

    fn dataset() -> Value {
        json!({
            "agents": [
                {
                    "agent_id": "agent_001",
                    "name": "Priya Sharma",
                    "availability_status": "Available",
                    "experience_level": 8,
                    "current_load": 0,
                    "skills": { "Networking": 9, "VPN_Troubleshooting": 8 }
                },
                {
                    "agent_id": "agent_002",
                    "name": "Marcus Cole",
                    "availability_status": "On Leave",
                    "experience_level": 10,
                    "current_load": 0,
                    "skills": { "Networking": 10 }
                }
            ],
            "tickets": [
                {
                    "ticket_id": "TKT-1001",
                    "title": "VPN outage",
                    "description": "Site-wide vpn down, critical",
                    "creation_timestamp": 1_700_000_000
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_assignment_endpoint_returns_assignments() {
        let server = test_server();
        let response = server.post("/v1/ticket-assignment").json(&dataset()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        let assignments = body["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0]["ticket_id"], "TKT-1001");
        // agent_002 is not Available despite the better skill fit
        assert_eq!(assignments[0]["assigned_agent_id"], "agent_001");
        assert!(assignments[0]["rationale"].as_str().unwrap().contains("Priya Sharma"));
    }

    #[tokio::test]
    async fn test_empty_agent_list_is_a_400() {
        let server = test_server();
        let response = server
            .post("/v1/ticket-assignment")
            .json(&json!({ "agents": [], "tickets": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_missing_skills_field_is_tolerated() {
        let server = test_server();
        let response = server
            .post("/v1/ticket-assignment")
            .json(&json!({
                "agents": [{
                    "agent_id": "agent_001",
                    "name": "Priya Sharma",
                    "availability_status": "Available",
                    "experience_level": 2,
                    "current_load": 0
                }],
                "tickets": [{
                    "ticket_id": "TKT-1",
                    "title": "printer request",
                    "description": "toner",
                    "creation_timestamp": 1
                }]
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["assignments"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = test_server();
        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}
