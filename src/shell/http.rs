use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::cart::adapters::inbound::http as cart_http;
use crate::shell::context::CartContext;

pub fn router(context: CartContext) -> Router {
    Router::new()
        .route("/cart", get(cart_http::show))
        .route(
            "/cart/products/{id}",
            post(cart_http::add)
                .put(cart_http::update)
                .delete(cart_http::remove),
        )
        .route("/cart/products/{id}/increment", post(cart_http::increment))
        .route("/cart/products/{id}/decrement", post(cart_http::decrement))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}
