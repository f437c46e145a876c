use axum::response::{Html, IntoResponse};
use axum::Json;

pub async fn openapi_json() -> impl IntoResponse {
    // OpenAPI 3.0, written by hand: small surface, stable and explicit.
    let spec = serde_json::json!({
      "openapi": "3.0.3",
      "info": {
        "title": "Jobbermed Board API",
        "version": "1.0.0",
        "description": "Versioned, typed API for the Jobbermed job board. /api/v1/* is the stable surface."
      },
      "paths": {
        "/api/v1/health": {
          "get": {
            "summary": "Healthcheck",
            "responses": {
              "200": { "description": "OK" }
            }
          }
        },
        "/api/v1/jobs": {
          "get": {
            "summary": "Filtered, paginated job listing with per-control counts",
            "parameters": [
              {
                "name": "category",
                "in": "query",
                "schema": { "type": "string" },
                "description": "Taxonomy label; defaults to \"All\""
              },
              {
                "name": "location",
                "in": "query",
                "schema": { "type": "string" },
                "description": "Location bucket; defaults to \"All locations\". A bucket with no active jobs falls back to the default."
              },
              {
                "name": "q",
                "in": "query",
                "schema": { "type": "string" },
                "description": "Keyword over title, company, location, job type and category; case-insensitive"
              },
              {
                "name": "page",
                "in": "query",
                "schema": { "type": "integer", "minimum": 1 },
                "description": "1-based page of 12; out-of-range pages come back empty"
              }
            ],
            "responses": {
              "200": {
                "description": "Current page plus counts and the canonical share query",
                "content": {
                  "application/json": {
                    "schema": { "$ref": "#/components/schemas/ApiOkJobListResponseV1" }
                  }
                }
              },
              "503": { "description": "Feed unavailable" }
            }
          }
        },
        "/api/v1/jobs/{slug}": {
          "get": {
            "summary": "Full detail view for one job",
            "parameters": [
              {
                "name": "slug",
                "in": "path",
                "required": true,
                "schema": { "type": "string" }
              }
            ],
            "responses": {
              "200": {
                "description": "Detail content in render order",
                "content": {
                  "application/json": {
                    "schema": { "$ref": "#/components/schemas/ApiOkJobDetailV1" }
                  }
                }
              },
              "404": { "description": "Unknown slug" },
              "503": { "description": "Feed unavailable" }
            }
          }
        }
      },
      "components": {
        "schemas": {
          "JobCardV1": {
            "type": "object",
            "properties": {
              "slug": { "type": "string" },
              "title": { "type": "string" },
              "company": { "type": "string" },
              "location": { "type": "string", "nullable": true },
              "salary": { "type": "string", "nullable": true },
              "job_type": { "type": "string", "nullable": true },
              "category": { "type": "string" },
              "location_buckets": { "type": "array", "items": { "type": "string" } },
              "posted": { "type": "string" },
              "deadline": { "type": "string" },
              "source": { "type": "string", "nullable": true }
            },
            "required": ["slug", "title", "company", "category", "location_buckets", "posted", "deadline"]
          },
          "LabelCountV1": {
            "type": "object",
            "properties": {
              "label": { "type": "string" },
              "count": { "type": "integer" }
            },
            "required": ["label", "count"]
          },
          "JobListResponseV1": {
            "type": "object",
            "properties": {
              "jobs": { "type": "array", "items": { "$ref": "#/components/schemas/JobCardV1" } },
              "page": { "type": "integer" },
              "total": { "type": "integer" },
              "total_pages": { "type": "integer" },
              "show_controls": { "type": "boolean" },
              "category_counts": { "type": "array", "items": { "$ref": "#/components/schemas/LabelCountV1" } },
              "location_counts": { "type": "array", "items": { "$ref": "#/components/schemas/LabelCountV1" } },
              "share_query": { "type": "string" }
            },
            "required": ["jobs", "page", "total", "total_pages", "show_controls", "category_counts", "location_counts", "share_query"]
          },
          "JobDetailV1": {
            "type": "object",
            "properties": {
              "slug": { "type": "string" },
              "title": { "type": "string" },
              "company_line": { "type": "string" },
              "salary": { "type": "string", "nullable": true },
              "source": { "type": "string", "nullable": true },
              "tags": {
                "type": "object",
                "properties": {
                  "posted": { "type": "string" },
                  "category": { "type": "string" },
                  "job_type": { "type": "string", "nullable": true },
                  "deadline": { "type": "string" }
                }
              },
              "requirements": { "type": "array", "items": { "type": "string" } },
              "responsibilities": { "type": "array", "items": { "type": "string" } },
              "how_to_apply": { "type": "array", "items": { "type": "string" } },
              "apply": {
                "type": "object",
                "properties": {
                  "kind": { "type": "string", "enum": ["link", "disabled"] },
                  "url": { "type": "string", "nullable": true }
                },
                "required": ["kind"]
              }
            },
            "required": ["slug", "title", "company_line", "tags", "apply"]
          },
          "ApiOkJobListResponseV1": {
            "type": "object",
            "properties": {
              "ok": { "type": "boolean" },
              "data": { "$ref": "#/components/schemas/JobListResponseV1" }
            },
            "required": ["ok", "data"]
          },
          "ApiOkJobDetailV1": {
            "type": "object",
            "properties": {
              "ok": { "type": "boolean" },
              "data": { "$ref": "#/components/schemas/JobDetailV1" }
            },
            "required": ["ok", "data"]
          },
          "ApiErr": {
            "type": "object",
            "properties": {
              "ok": { "type": "boolean" },
              "error": {
                "type": "object",
                "properties": {
                  "code": { "type": "string" },
                  "message": { "type": "string" },
                  "details": { "nullable": true }
                },
                "required": ["code", "message"]
              }
            },
            "required": ["ok", "error"]
          }
        }
      }
    });

    Json(spec)
}

pub async fn docs_page() -> impl IntoResponse {
    Html(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Jobbermed Board API Docs</title>
    <style>
      body { font-family: ui-sans-serif, system-ui, sans-serif; margin: 2rem auto; max-width: 52rem; padding: 0 1rem; color: #1d2733; }
      h1 { font-size: 1.5rem; }
      code { background: #f2f4f7; padding: .1rem .35rem; border-radius: .25rem; }
      li { margin: .4rem 0; }
    </style>
  </head>
  <body>
    <h1>Jobbermed Board API</h1>
    <p>The stable surface lives under <code>/api/v1/*</code>. The machine-readable contract is at
    <a href="/api-docs/openapi.json"><code>/api-docs/openapi.json</code></a>.</p>
    <ul>
      <li><code>GET /api/v1/health</code>: liveness probe</li>
      <li><code>GET /api/v1/jobs</code>: filtered, paginated listing (<code>category</code>, <code>location</code>, <code>q</code>, <code>page</code>)</li>
      <li><code>GET /api/v1/jobs/{slug}</code>: full detail view for one job</li>
    </ul>
    <p>Responses are wrapped in <code>{"ok": true, "data": ...}</code>; errors in
    <code>{"ok": false, "error": {"code", "message"}}</code>.</p>
  </body>
</html>"#,
    )
}
