//! OpenAPI document describing the public endpoints.
//!
//! The document is built once at startup from [`ApiDocsConfig`] and served
//! as-is from shared state.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::{ApiDocsConfig, IDENTITY_HEADER};
use crate::state::AppState;

/// Name of the security scheme referencing the ALB's OIDC integration.
const SECURITY_SCHEME: &str = "cognito";

const TAG: &str = "Demo Controller";

/// Build the OpenAPI 3.0 document.
pub fn build_document(config: &ApiDocsConfig) -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": config.title,
            "version": env!("CARGO_PKG_VERSION"),
            "description": config.description,
            "contact": { "name": config.contact_name },
        },
        "servers": [
            { "url": "/", "description": "Relative base path via ALB" }
        ],
        "security": [ { SECURITY_SCHEME: [] } ],
        "tags": [
            { "name": TAG, "description": "Endpoints for the DevSecOps demo application" }
        ],
        "paths": {
            "/": {
                "get": {
                    "tags": [TAG],
                    "summary": "Greeting endpoint",
                    "description": "Returns metadata about the caller and the AWS-native DevSecOps demo.",
                    "operationId": "hello",
                    "parameters": [
                        {
                            "name": IDENTITY_HEADER,
                            "in": "header",
                            "required": false,
                            "description": "Caller identity asserted by the load balancer after OIDC login",
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Greeting produced",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/GreetingResponse" }
                                }
                            }
                        }
                    }
                }
            },
            "/healthz": {
                "get": {
                    "tags": [TAG],
                    "summary": "Health check",
                    "description": "Used by Kubernetes readiness/liveness probes.",
                    "operationId": "health",
                    "responses": {
                        "200": {
                            "description": "Service is healthy",
                            "content": {
                                "text/plain": { "schema": { "type": "string" } }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "GreetingResponse": {
                    "type": "object",
                    "required": ["message", "timestamp"],
                    "properties": {
                        "message": { "type": "string" },
                        "timestamp": { "type": "string", "format": "date-time" },
                        "authenticatedUser": { "type": "string", "maxLength": 256 }
                    }
                }
            },
            "securitySchemes": {
                SECURITY_SCHEME: {
                    "type": "openIdConnect",
                    "name": SECURITY_SCHEME,
                    "openIdConnectUrl": config.openid_connect_url,
                    "description": "OIDC flow handled at the ALB layer"
                }
            }
        }
    })
}

/// Serve the pre-built document.
pub async fn document(State(state): State<AppState>) -> Json<Value> {
    Json(state.api_docs.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uses_config() {
        let config = ApiDocsConfig {
            title: "Custom".to_string(),
            openid_connect_url: "/custom/idp".to_string(),
            ..ApiDocsConfig::default()
        };
        let doc = build_document(&config);

        assert_eq!(doc["info"]["title"], "Custom");
        assert_eq!(doc["info"]["contact"]["name"], "Platform Team");
        assert_eq!(
            doc["components"]["securitySchemes"]["cognito"]["openIdConnectUrl"],
            "/custom/idp"
        );
    }

    #[test]
    fn test_document_lists_both_endpoints() {
        let doc = build_document(&ApiDocsConfig::default());
        let paths = doc["paths"].as_object().unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths["/"]["get"]["summary"], "Greeting endpoint");
        assert_eq!(
            paths["/"]["get"]["parameters"][0]["name"],
            "x-amzn-oidc-identity"
        );
        assert!(paths["/healthz"]["get"]["responses"]["200"]["content"]
            .get("text/plain")
            .is_some());
        assert_eq!(doc["security"][0]["cognito"], json!([]));
    }
}
