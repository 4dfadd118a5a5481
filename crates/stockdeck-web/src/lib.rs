use rocket::{routes, Build, Rocket};
use stockdeck_client::prelude::ApiClient;

pub mod error;
pub mod proxy;
pub mod render;
pub mod routes;

pub use error::WebError;
pub use render::Renderer;

/// Assemble the front end: pages, the sections fragment and the `/api` proxy,
/// all talking to the backend through `api`.
pub fn rocket(api: ApiClient, config: rocket::Config) -> Result<Rocket<Build>, WebError> {
    let renderer = Renderer::new()?;

    let rocket = rocket::custom(config)
        // shared state
        .manage(api)
        .manage(renderer)
        // register routes
        .mount(
            "/",
            routes![
                routes::landing,
                routes::stock,
                routes::sections,
                proxy::forward,
                proxy::forward_delete,
                proxy::forward_post,
                proxy::forward_put,
                proxy::forward_patch,
            ],
        );

    Ok(rocket)
}
