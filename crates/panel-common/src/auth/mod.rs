//! Staff session tokens

mod jwt;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
