//! Serves the compiled front end bundle from the binary.
//!
//! `build.rs` copies `frontend/dist` into `static/dist` before compilation.
//! Paths that name a bundled file are served with a guessed content type;
//! anything else gets `index.html` so the single page app can boot.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path to the bundle-relative file it asks for.
fn bundle_path(request_path: &str) -> &str {
    match request_path.trim_start_matches('/') {
        "" => INDEX,
        path => path,
    }
}

/// Fallback handler for every path the API does not claim.
pub async fn process(req: HttpRequest) -> HttpResponse {
    let path = bundle_path(req.path());

    if let Some(file) = BUNDLE.get_file(path) {
        let mime = from_path(path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents());
    }

    match BUNDLE.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents()),
        None => HttpResponse::NotFound().body("Front end bundle not built"),
    }
}
