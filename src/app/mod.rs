//! 应用层：路由与处理器

pub mod health;
pub mod product;

use axum::{routing::get, Router};
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use product::handler::{self, AppState};

/// 创建路由
///
/// 访问日志由 `TraceLayer` 输出：每个请求一个 INFO span（方法、路径、版本），
/// 响应记录状态码和毫秒耗时，5xx 按失败以 ERROR 记录。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/products",
            get(handler::get_all_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product_by_id)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
