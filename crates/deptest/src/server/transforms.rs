//! Stateless endpoints that hand their input to a single collaborator.
//!
//! None of these validate beyond the request shape; collaborator failures reach
//! the error boundary unchanged.

use axum::extract::State;
use axum::Json;
use deptest_core::transform::ParsedUrl;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::context::SharedContext;
use super::external::ExternalPayload;
use crate::error::{JsonBody, QueryParams};
use crate::prelude::*;

/// Input of the memoized computation; the endpoint never varies it
pub const CACHE_INPUT: i64 = 10;

const SHUFFLE_INPUT: [i64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    #[serde(rename = "password")]
    pub _password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkdownRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct HtmlResponse {
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct SerializeRequest {
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct SerializeResponse {
    pub serialized: String,
}

#[derive(Debug, Deserialize)]
pub struct EncryptRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub hash: String,
}

#[derive(Debug, Deserialize)]
pub struct DecodeQuery {
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub decoded: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
pub struct ParseUrlQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

pub async fn external(
    State(ctx): State<SharedContext>,
) -> Result<Json<ExternalPayload>, ApiError> {
    let data = ctx
        .external
        .fetch()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(ExternalPayload::new(data)))
}

pub async fn login(
    State(ctx): State<SharedContext>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = ctx
        .collaborators
        .tokens
        .sign(request.username.as_deref())?;

    Ok(Json(TokenResponse { token }))
}

pub async fn markdown(
    State(ctx): State<SharedContext>,
    JsonBody(request): JsonBody<MarkdownRequest>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let html = ctx.collaborators.markdown.render(&request.content)?;
    Ok(Json(HtmlResponse { html }))
}

pub async fn util(State(ctx): State<SharedContext>) -> Json<ResultResponse<Vec<i64>>> {
    let result = ctx.collaborators.shuffler.shuffle(SHUFFLE_INPUT.to_vec());
    Json(ResultResponse { result })
}

pub async fn serialize(
    State(ctx): State<SharedContext>,
    JsonBody(request): JsonBody<SerializeRequest>,
) -> Result<Json<SerializeResponse>, ApiError> {
    let serialized = ctx.collaborators.serializer.serialize(&request.data)?;
    Ok(Json(SerializeResponse { serialized }))
}

pub async fn encrypt(
    State(ctx): State<SharedContext>,
    JsonBody(request): JsonBody<EncryptRequest>,
) -> Result<Json<HashResponse>, ApiError> {
    let hash = ctx.collaborators.hasher.digest_hex(&request.message)?;
    Ok(Json(HashResponse { hash }))
}

pub async fn decode(
    State(ctx): State<SharedContext>,
    QueryParams(query): QueryParams<DecodeQuery>,
) -> Result<Json<DecodeResponse>, ApiError> {
    let decoded = ctx.collaborators.decoder.decode(&query.uri)?;
    Ok(Json(DecodeResponse { decoded }))
}

pub async fn template(
    State(ctx): State<SharedContext>,
    JsonBody(request): JsonBody<TemplateRequest>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let html = ctx
        .collaborators
        .template
        .render(&request.template, &request.data)?;

    Ok(Json(HtmlResponse { html }))
}

pub async fn parse_url(
    State(ctx): State<SharedContext>,
    QueryParams(query): QueryParams<ParseUrlQuery>,
) -> Result<Json<ParsedUrl>, ApiError> {
    Ok(Json(ctx.collaborators.url_parser.parse(&query.url)?))
}

pub async fn cache(State(ctx): State<SharedContext>) -> Json<ResultResponse<i64>> {
    let result = ctx.collaborators.memo.get(CACHE_INPUT);
    Json(ResultResponse { result })
}
