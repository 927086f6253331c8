//! Users and posts: create, list and get-by-id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deptest_core::resources::{
    CreatePostRequest, CreateUserRequest, Post, PostListing, User, UserListing,
};

use super::context::SharedContext;
use crate::error::PayloadBody;
use crate::prelude::*;

pub async fn list_users(State(ctx): State<SharedContext>) -> Json<UserListing> {
    Json(ctx.list_users())
}

pub async fn create_user(
    State(ctx): State<SharedContext>,
    PayloadBody(request): PayloadBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = ctx.create_user(request)?;
    log::debug!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(ctx): State<SharedContext>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    ctx.get_user(&id).map(Json)
}

pub async fn list_posts(State(ctx): State<SharedContext>) -> Json<PostListing> {
    Json(ctx.list_posts())
}

pub async fn create_post(
    State(ctx): State<SharedContext>,
    PayloadBody(request): PayloadBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = ctx.create_post(request)?;
    log::debug!("Created post {}", post.id);
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_post(
    State(ctx): State<SharedContext>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    ctx.get_post(&id).map(Json)
}
