mod eval;
mod operations;
mod server;
