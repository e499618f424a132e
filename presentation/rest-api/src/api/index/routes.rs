use poem_openapi::{OpenApi, payload::Html};

const INDEX_PAGE: &str = include_str!("../../../static/index.html");

/// Landing page served at the root URL.
pub struct IndexApi;

#[OpenApi]
impl IndexApi {
    /// Root URL response
    #[oai(path = "/", method = "get", hidden)]
    async fn index(&self) -> Html<String> {
        Html(INDEX_PAGE.to_string())
    }
}
