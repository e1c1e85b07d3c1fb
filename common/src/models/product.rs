use std::fmt;

use serde::Deserialize;
use serde_json::Number;

/// Largest magnitude below which an integral float still prints without a fraction.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

/// A product as returned by `products_service`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Price,
    pub stock_quantity: i64,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: ${}, Stock: {}",
            self.id, self.name, self.price, self.stock_quantity
        )
    }
}

/// Price exactly as the service sent it.
///
/// Numbers print in their shortest form (`10.0` prints as `10`), strings print verbatim.
/// No rounding and no currency formatting happen here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Text(text) => f.write_str(text),
            Price::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    return write!(f, "{number}");
                }
                match number.as_f64() {
                    Some(value)
                        if value.is_finite()
                            && value.fract() == 0.0
                            && value.abs() < INTEGRAL_DISPLAY_LIMIT =>
                    {
                        write!(f, "{}", value as i64)
                    }
                    Some(value) => write!(f, "{value}"),
                    None => write!(f, "{number}"),
                }
            }
        }
    }
}
