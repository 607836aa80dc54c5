//! Product 数据模型

use std::borrow::Cow;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 请求体中超出存储整数范围的 id 统一映射到这个值，它永远不会被分配
pub const UNASSIGNABLE_ID: i64 = i64::MIN;

/// 商品记录
///
/// `id` 在首次保存前为空，由存储层分配，之后不再改变。
/// `cost` 和 `price` 是任意精度十进制，JSON 中以数字形式原样读写，不做舍入。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_id::deserialize")]
    pub id: Option<i64>,

    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub category: String,

    #[serde(with = "exact_number")]
    #[validate(custom(function = "non_negative"))]
    pub cost: BigDecimal,

    #[serde(with = "exact_number")]
    #[validate(custom(function = "non_negative"))]
    pub price: BigDecimal,
}

impl Product {
    /// 创建尚未持久化的商品
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        cost: BigDecimal,
        price: BigDecimal,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            cost,
            price,
        }
    }
}

/// 金额与 JSON 数字互转，依赖 serde_json 的 `arbitrary_precision` 保留全部位数
mod exact_number {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Number;

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        Number::from_str(&value.to_string())
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let number = Number::deserialize(deserializer)?;
        BigDecimal::from_str(&number.to_string()).map_err(de::Error::custom)
    }
}

/// 请求体 id：整数即可，超出 `i64` 的整数映射为 `UNASSIGNABLE_ID`
mod lenient_id {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Number;

    use super::UNASSIGNABLE_ID;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let Some(number) = Option::<Number>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Some(id) = number.as_i64() {
            return Ok(Some(id));
        }

        let raw = number.to_string();
        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Some(UNASSIGNABLE_ID))
        } else {
            Err(de::Error::custom(format!("product id must be an integer, got {}", raw)))
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("must not be blank"));
        return Err(error);
    }
    Ok(())
}

fn non_negative(value: &BigDecimal) -> Result<(), ValidationError> {
    if value < &BigDecimal::default() {
        let mut error = ValidationError::new("negative");
        error.message = Some(Cow::from("must be greater than or equal to 0"));
        return Err(error);
    }
    Ok(())
}
