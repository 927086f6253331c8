//! Static descriptions of the service: root metadata and the route table.

use serde::{Deserialize, Serialize};

pub const SERVICE_MESSAGE: &str = "DependencyTrack test server";

/// Response of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointIndex {
    pub users: String,
    pub posts: String,
    pub external: String,
}

impl ServiceInfo {
    pub fn new(version: &str) -> Self {
        Self {
            message: SERVICE_MESSAGE.to_string(),
            version: version.to_string(),
            endpoints: EndpointIndex {
                users: "/api/users".to_string(),
                posts: "/api/posts".to_string(),
                external: "/api/external".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn route(method: &'static str, path: &'static str, description: &'static str) -> RouteInfo {
    RouteInfo {
        method,
        path,
        description,
    }
}

pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/", "Service metadata"),
    route("GET", "/api/users", "List users, newest first"),
    route("POST", "/api/users", "Create a user {name, email}"),
    route("GET", "/api/users/{id}", "Get a user by id"),
    route("GET", "/api/posts", "List posts, newest first"),
    route("POST", "/api/posts", "Create a post {title, content, authorId?}"),
    route("GET", "/api/posts/{id}", "Get a post by id"),
    route("GET", "/api/external", "Fetch and wrap an upstream JSON document"),
    route("POST", "/api/login", "Issue a signed token {username, password}"),
    route("POST", "/api/markdown", "Render markdown to HTML {content}"),
    route("GET", "/api/util", "Shuffle [1, 2, 3, 4, 5]"),
    route("POST", "/api/serialize", "Serialize a JSON value {data}"),
    route("POST", "/api/encrypt", "SHA-256 hex digest {message}"),
    route("GET", "/api/decode", "Percent-decode ?uri="),
    route("POST", "/api/template", "Render a handlebars template {template, data}"),
    route("GET", "/api/parse-url", "Split ?url= into its components"),
    route("GET", "/api/cache", "Memoized computation"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_shape() {
        let json = serde_json::to_value(ServiceInfo::new("1.0.0")).unwrap();
        assert_eq!(json["message"], SERVICE_MESSAGE);
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["endpoints"]["users"], "/api/users");
        assert_eq!(json["endpoints"]["posts"], "/api/posts");
        assert_eq!(json["endpoints"]["external"], "/api/external");
    }

    #[test]
    fn test_route_table_has_no_duplicates() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate route {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }
}
