//! MCP server for the Canva REST API.
//!
//! Exposes design, brand, asset, and user operations as MCP tools plus
//! markdown resource views over JSON-RPC 2.0 stdio transport. When the
//! `CANVA_APP_ID` / `CANVA_API_KEY` environment variables are absent the
//! server runs in placeholder mode: every call resolves to deterministic
//! mock data without touching the network.

pub mod client;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod mock;
pub mod protocol;
pub mod server;

pub mod schema;
