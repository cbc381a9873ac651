use super::ExtraFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Discount code created by an admin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coupon {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "couponName")]
    #[validate(length(min = 1))]
    pub coupon_name: String,
    #[serde(
        rename = "discountPercentage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_percentage: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Body of `POST /couponCodeValidationApi`
#[derive(Debug, Clone, Deserialize)]
pub struct CouponCheckRequest {
    #[serde(rename = "couponCode")]
    pub coupon_code: String,
}

/// Outcome of a coupon code check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponCheck {
    pub coupon: bool,
    #[serde(rename = "discountPercentage", skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<serde_json::Value>,
}

impl From<Option<Coupon>> for CouponCheck {
    fn from(found: Option<Coupon>) -> Self {
        match found {
            Some(coupon) => Self {
                coupon: true,
                discount_percentage: Some(
                    coupon
                        .discount_percentage
                        .unwrap_or(serde_json::Value::Null),
                ),
            },
            None => Self {
                coupon: false,
                discount_percentage: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_coupon_reports_false_only() {
        let check = serde_json::to_value(CouponCheck::from(None)).unwrap();
        assert_eq!(check, json!({ "coupon": false }));
    }

    #[test]
    fn test_found_coupon_reports_discount() {
        let coupon = Coupon {
            coupon_name: "WELCOME10".into(),
            discount_percentage: Some(json!(10)),
            ..Coupon::default()
        };
        let check = serde_json::to_value(CouponCheck::from(Some(coupon))).unwrap();
        assert_eq!(check, json!({ "coupon": true, "discountPercentage": 10 }));
    }
}
