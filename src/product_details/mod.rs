mod fallback;
mod product;

pub(crate) use fallback::{first_match, trimmed_text, Step};
pub use product::{
    ProductRecord, PRICE_SENTINEL, RATING_SENTINEL, SELLER_SENTINEL, TITLE_SENTINEL,
};
