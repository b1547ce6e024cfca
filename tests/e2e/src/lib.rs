//! HTTP-level checks against a running `web` server.
