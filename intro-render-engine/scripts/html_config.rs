use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    //  The distributed directory, provided by Trunk to post-build hooks
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, err))?;

    //  Using the configured html output name (set in Trunk.toml)
    let staged_html_path = PathBuf::from(staging_dir).join("intro.html");

    let html = fs::read_to_string(&staged_html_path)?;

    // Serve from any sub-path: make the wasm bindings relative
    let html = html
        .replace("/intro-render-engine.js", "./intro-render-engine.js")
        .replace("/intro-render-engine_bg.wasm", "./intro-render-engine_bg.wasm");

    fs::write(staged_html_path, html)
}
