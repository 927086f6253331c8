//! Users and posts: records, creation payloads and listing envelopes.

use serde::{Deserialize, Serialize};

use crate::identity::Timestamp;
use crate::store::Record;
use crate::validation::{validate_create, CreatePayload, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Not checked against existing users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub created_at: Timestamp,
}

/// Body of `POST /api/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
}

impl CreatePayload for CreateUserRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            _ => None,
        }
    }
}

impl CreatePayload for CreatePostRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }
}

impl User {
    /// Build a user from a validated payload and server-assigned identity
    pub fn create(
        request: CreateUserRequest,
        id: String,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        validate_create(&request)?;

        Ok(Self {
            id,
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            created_at,
        })
    }
}

impl Post {
    /// Build a post from a validated payload and server-assigned identity
    pub fn create(
        request: CreatePostRequest,
        id: String,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        validate_create(&request)?;

        Ok(Self {
            id,
            title: request.title.unwrap_or_default(),
            content: request.content.unwrap_or_default(),
            author_id: request.author_id,
            created_at,
        })
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Response of `GET /api/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListing {
    pub total: usize,
    pub users: Vec<User>,
}

/// Response of `GET /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListing {
    pub total: usize,
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
    }

    // ============================================================================
    // User
    // ============================================================================

    #[test]
    fn test_create_user() {
        let request = CreateUserRequest {
            name: Some("A".to_string()),
            email: Some("a@x.com".to_string()),
        };

        let user = User::create(request, "u-1".to_string(), at()).unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.created_at, at());
    }

    #[test]
    fn test_create_user_without_email() {
        let request = CreateUserRequest {
            name: Some("A".to_string()),
            email: None,
        };

        let err = User::create(request, "u-1".to_string(), at()).unwrap_err();
        assert_eq!(err.message, "name and email are required");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: "u-1".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            created_at: at(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u-1",
                "name": "A",
                "email": "a@x.com",
                "createdAt": "2024-03-01T08:30:00.000Z"
            })
        );
    }

    // ============================================================================
    // Post
    // ============================================================================

    #[test]
    fn test_create_post_without_author() {
        let request = CreatePostRequest {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            author_id: None,
        };

        let post = Post::create(request, "p-1".to_string(), at()).unwrap();
        let json = serde_json::to_value(&post).unwrap();

        assert!(post.author_id.is_none());
        assert!(json.get("authorId").is_none());
    }

    #[test]
    fn test_create_post_keeps_unknown_author() {
        let request = CreatePostRequest {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            author_id: Some("no-such-user".to_string()),
        };

        let post = Post::create(request, "p-1".to_string(), at()).unwrap();
        assert_eq!(post.author_id.as_deref(), Some("no-such-user"));
    }

    #[test]
    fn test_create_post_empty_content() {
        let request = CreatePostRequest {
            title: Some("T".to_string()),
            content: Some(String::new()),
            author_id: None,
        };

        let err = Post::create(request, "p-1".to_string(), at()).unwrap_err();
        assert_eq!(err.message, "title and content are required");
    }

    #[test]
    fn test_post_request_reads_author_id_camel_case() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title":"T","content":"C","authorId":"u-9"}"#).unwrap();
        assert_eq!(request.author_id.as_deref(), Some("u-9"));
    }
}
