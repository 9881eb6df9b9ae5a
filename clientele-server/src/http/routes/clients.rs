//! Client endpoints
//!
//! Each handler acquires one pooled connection, runs its statements on it
//! through `ClientRepo`, and the connection returns to the pool when it
//! drops, on success and on error alike.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Client, ClientChanges, ClientRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create client request
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
}

/// Partial update request. Unknown fields are rejected by the JSON layer
/// before any database interaction.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateClientRequest> for ClientChanges {
    fn from(req: UpdateClientRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

/// Client response
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// POST /clients - create a new client
async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    let mut conn = state.pool.acquire().await?;
    let client = ClientRepo::new(&mut conn)
        .create(&req.name, &req.email)
        .await?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

/// GET /clients - list all clients, ascending id
async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let clients = ClientRepo::new(&mut conn).list().await?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// GET /clients/{id} - get a single client
async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ClientResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let client = ClientRepo::new(&mut conn).get(id).await?;

    Ok(Json(ClientResponse::from(client)))
}

/// PUT /clients/{id} - update the supplied fields only
async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let client = ClientRepo::new(&mut conn)
        .update(id, &ClientChanges::from(req))
        .await?;

    Ok(Json(ClientResponse::from(client)))
}

/// DELETE /clients/{id} - delete a client
async fn delete_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.pool.acquire().await?;
    ClientRepo::new(&mut conn).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Client routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn update_request_rejects_unknown_fields() {
        let err = serde_json::from_value::<UpdateClientRequest>(json!({
            "name": "Ada",
            "nickname": "countess"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn update_request_allows_partial_body() {
        let req: UpdateClientRequest =
            serde_json::from_value(json!({ "name": "Ada" })).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.email, None);

        let req: UpdateClientRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.email, None);
    }

    #[test]
    fn create_request_requires_both_fields() {
        let err =
            serde_json::from_value::<CreateClientRequest>(json!({ "name": "Ada" })).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn response_serializes_rfc3339() {
        let client = Client {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let response = ClientResponse::from(client);
        assert_eq!(response.created_at, "2024-05-01T12:00:00+00:00");

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["email"], "ada@example.com");
    }
}
