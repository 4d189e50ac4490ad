mod handler;

pub use handler::get_crypto_news;
