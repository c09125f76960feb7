use futures::StreamExt;
use leptos::*;
use leptos_dom::ssr::render_to_stream;
use step_counter::{config_script, App};
use worker::*;

mod config;
mod utils;

const KV_KEY_PREFIX: &str = "$__MINIFLARE_SITES__$";
const PKG_PATH: &str = "/client/client";

#[event(fetch)]
pub async fn main(req: Request, env: worker::Env, _ctx: worker::Context) -> Result<Response> {
    log_request(&req);

    utils::set_panic_hook();

    let router = Router::new();

    router
        .get("/", |_req, ctx| {
            let thresholds = match config::thresholds_from_env(&ctx.env) {
                Ok(thresholds) => thresholds,
                Err(err) => return Response::error(err.to_string(), 500),
            };
            console_debug!("Rendering counter with {:?}", thresholds);

            let head = match config_script(&thresholds) {
                Ok(config) => document_head(&config),
                Err(err) => return Response::error(err.to_string(), 500),
            };
            let tail = "</body></html>";

            let stream = futures::stream::once(async move { head })
                .chain(render_to_stream(move |cx| {
                    view! { cx, <App thresholds=thresholds /> }.into_view(cx)
                }))
                .chain(futures::stream::once(async { tail.to_string() }))
                .map(|html| Result::Ok(html.into_bytes()));
            let mut response = Response::from_stream(stream)?;
            response
                .headers_mut()
                .set("Content-Type", "text/html")?;
            Ok(response)
        })
        .get_async("/client/:resource", |_req, ctx| async move {
            let resource = match ctx.param("resource") {
                Some(resource) => resource.to_owned(),
                None => return Ok(Response::from_bytes(b"Not found".to_vec())?.with_status(404)),
            };

            let store = ctx.env.kv("__STATIC_CONTENT")?;
            let key = format!("{KV_KEY_PREFIX}/{resource}");
            match store.get(&key).bytes().await? {
                Some(bytes) => {
                    let content_type = mime_guess::from_path(&resource).first_or_octet_stream();
                    let mut response = Response::from_bytes(bytes)?;
                    response
                        .headers_mut()
                        .set("Content-Type", content_type.essence_str())?;
                    Ok(response)
                }
                None => {
                    console_log!("Asset [{}] not found", key);
                    Ok(Response::from_bytes(b"Not found".to_vec())?.with_status(404))
                }
            }
        })
        .run(req, env)
        .await
}

/// Everything up to and including `<body>`: the client bundle preloads and the
/// embedded counter config.
fn document_head(config: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1"/>
        <title>My Counter</title>
        <style>.green {{ color: green; }} .red {{ color: red; }}</style>
        {config}
        <link rel="modulepreload" href="{PKG_PATH}.js">
        <link rel="preload" href="{PKG_PATH}_bg.wasm" as="fetch" type="application/wasm" crossorigin="">
        <script type="module">import init, {{ hydrate }} from '{PKG_PATH}.js'; init('{PKG_PATH}_bg.wasm').then(hydrate);</script>
    </head>
    <body>"#
    )
}

fn log_request(req: &Request) {
    console_log!(
        "{} - [{}], located at: {:?}, within: {}",
        Date::now().to_string(),
        req.path(),
        req.cf().coordinates().unwrap_or_default(),
        req.cf().region().unwrap_or_else(|| "unknown region".into())
    );
}
