mod auth;
mod openapi;
mod rpc;
