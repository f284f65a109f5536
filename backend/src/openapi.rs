//! Hand-assembled OpenAPI 3.1 document, served at `GET /openapi.json`.

use axum::Json;
use serde_json::{json, Value};

pub async fn openapi_spec() -> Json<Value> {
    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Todo Backend API",
            "version": "1.0.0",
            "description": "CRUD API for todo items persisted in SQLite. The database path can be configured via the DB_PATH environment variable."
        },
        "tags": [
            { "name": "health", "description": "Service readiness and health checks." },
            { "name": "todos", "description": "CRUD operations for todo items." }
        ],
        "components": {
            "schemas": {
                "Todo": {
                    "type": "object",
                    "required": ["id", "title", "description", "completed", "created_at", "updated_at"],
                    "properties": {
                        "id": { "type": "integer" },
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "completed": { "type": "boolean" },
                        "created_at": { "type": "string", "format": "date-time" },
                        "updated_at": { "type": "string", "format": "date-time" }
                    }
                },
                "TodoCreate": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": { "type": "string", "minLength": 1 },
                        "description": { "type": "string", "default": "" },
                        "completed": { "type": "boolean", "default": false }
                    }
                },
                "TodoUpdate": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "completed": { "type": "boolean" }
                    }
                },
                "ErrorDetail": {
                    "type": "object",
                    "properties": { "detail": { "type": "string" } }
                }
            }
        },
        "paths": {
            "/": {
                "get": {
                    "operationId": "healthCheck",
                    "summary": "Health check",
                    "tags": ["health"],
                    "responses": { "200": { "description": "Service is healthy" } }
                }
            },
            "/config": {
                "get": {
                    "operationId": "getConfig",
                    "summary": "Resolved runtime configuration",
                    "tags": ["health"],
                    "responses": { "200": { "description": "Database path configuration" } }
                }
            },
            "/todos": {
                "get": {
                    "operationId": "listTodos",
                    "summary": "List todos, newest first",
                    "tags": ["todos"],
                    "responses": {
                        "200": {
                            "description": "All todos",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Todo" } }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "operationId": "createTodo",
                    "summary": "Create a todo",
                    "tags": ["todos"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/TodoCreate" } }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created todo",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Todo" } } }
                        },
                        "422": {
                            "description": "Invalid payload",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        }
                    }
                }
            },
            "/todos/{id}": {
                "parameters": [
                    { "name": "id", "in": "path", "required": true, "schema": { "type": "integer", "minimum": 1 } }
                ],
                "get": {
                    "operationId": "getTodo",
                    "summary": "Fetch a single todo",
                    "tags": ["todos"],
                    "responses": {
                        "200": {
                            "description": "The todo",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Todo" } } }
                        },
                        "404": {
                            "description": "No todo with this id",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        },
                        "422": {
                            "description": "Malformed id",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        }
                    }
                },
                "patch": {
                    "operationId": "updateTodo",
                    "summary": "Partially update a todo",
                    "tags": ["todos"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/TodoUpdate" } }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Updated todo",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Todo" } } }
                        },
                        "404": {
                            "description": "No todo with this id",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        },
                        "422": {
                            "description": "Malformed id or payload",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        }
                    }
                },
                "delete": {
                    "operationId": "deleteTodo",
                    "summary": "Delete a todo",
                    "tags": ["todos"],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": {
                            "description": "No todo with this id",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        },
                        "422": {
                            "description": "Malformed id",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorDetail" } } }
                        }
                    }
                }
            }
        }
    }))
}
