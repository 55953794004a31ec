//! Integration tests driving the full router through salvo's `TestClient`.

mod delete;
mod fs;
mod helpers;
