//! Product 处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use futures::TryStreamExt;
use validator::Validate;

use super::{model::Product, service::ProductService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 解析路径中的商品 id
///
/// 只接受十进制数字串。超出存储整数范围的数字合法但不可能存在，返回 `None`。
pub(crate) fn parse_product_id(raw: &str) -> Result<Option<i64>, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::BadRequest(format!("invalid product id: {}", raw)));
    }
    Ok(raw.parse::<i64>().ok())
}

/// 找到时返回 JSON，找不到时返回 200 空响应体
fn json_or_empty(product: Option<Product>) -> Response {
    match product {
        Some(product) => Json(product).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products: Vec<Product> = state
        .product_service
        .get_all_products()
        .try_collect()
        .await?;
    Ok(Json(products))
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CoreError> {
    let Some(id) = parse_product_id(&id)? else {
        return Ok(json_or_empty(None));
    };

    let product = state.product_service.get_product_by_id(id).await?;
    Ok(json_or_empty(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    payload.validate()?;

    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Product>,
) -> Result<Response, CoreError> {
    let id = parse_product_id(&id)?;
    payload.validate()?;

    let Some(id) = id else {
        return Ok(json_or_empty(None));
    };

    let product = state.product_service.update_product(id, payload).await?;
    Ok(json_or_empty(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    if let Some(id) = parse_product_id(&id)? {
        state.product_service.delete_product(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("0").unwrap(), Some(0));
        assert_eq!(parse_product_id("42").unwrap(), Some(42));
        assert_eq!(
            parse_product_id("9223372036854775807").unwrap(),
            Some(i64::MAX)
        );
        assert_eq!(parse_product_id("99999999999999999999999").unwrap(), None);
    }

    #[test]
    fn test_parse_product_id_rejects_malformed() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "0x10"] {
            assert!(
                matches!(parse_product_id(raw), Err(CoreError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
