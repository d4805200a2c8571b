use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

const WELCOME: &str = r#"
<h1>Welcome to Cyber Kittens!</h1>
<p>Kittens live at <a href="/kittens/1">/kittens/:id</a></p>
<p>Adopt one with <b><code>POST /kittens</code></b> and let one go with <b><code>DELETE /kittens/:id</code></b></p>
<p>Sign up via <code>POST /register</code> and get a token via <code>POST /login</code></p>
"#;

#[get("/")]
async fn index() -> ApiResult<()> {
    Ok(ApiResponse::Html(WELCOME))
}
