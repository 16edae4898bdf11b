mod token_codec;
mod token_config;

pub use token_codec::{TokenClaims, TokenCodec, TokenError};
pub use token_config::TokenConfig;
