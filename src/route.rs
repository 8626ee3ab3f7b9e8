//! Page addressing: `/` for the listing, `/product/{id}` for a detail page.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Listing,
    Product(ProductId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route '{path}'")]
    Unknown { path: String },

    #[error("Invalid product id '{raw}' in route")]
    InvalidId { raw: String },
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Listing);
        }

        let Some(raw) = trimmed.strip_prefix("/product/") else {
            return Err(RouteError::Unknown {
                path: path.to_string(),
            });
        };

        match raw.parse::<ProductId>() {
            Ok(id) if id > 0 => Ok(Route::Product(id)),
            _ => Err(RouteError::InvalidId {
                raw: raw.to_string(),
            }),
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Route::Product(id) => Some(*id),
            Route::Listing => None,
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => write!(f, "/"),
            Route::Product(id) => write!(f, "/product/{}", id),
        }
    }
}
