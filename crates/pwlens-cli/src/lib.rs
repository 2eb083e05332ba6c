// NOTE: CLI Shape
//
// Six flat verbs over one loaded bundle, mirroring the engine surface
// one-to-one. Every command decodes from the container on demand; there is
// no index, cache, or state between invocations. Per-result commands take
// the composite ID printed by `failures`, so the workflow is:
//
//   pwlens failures --report ./report
//   pwlens trace --report ./report --result-id <id>
//
// Output is a serde view model: pretty JSON with --format json, a small
// human rendering otherwise. Errors go to stderr as one {"error": ...}
// line with exit code 1.

mod args;
mod commands;
pub mod config;
mod handlers;
mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
