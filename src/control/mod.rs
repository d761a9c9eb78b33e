//! Value containers for partial results.
//!
//! - [`IOption`]: zero or one present value
//! - [`Either`]: a value that is one of two alternatives
//!
//! # Examples
//!
//! ```rust
//! use iimmutable::control::{Either, IOption};
//!
//! fn parse_port(text: &str) -> Either<String, u16> {
//!     IOption::of_nullable(text.parse::<u16>().ok())
//!         .filter(|port| *port != 0)
//!         .to_either(|| format!("invalid port: {text}"))
//! }
//!
//! assert_eq!(parse_port("443"), Either::Right(443));
//! assert_eq!(parse_port("0"), Either::Left("invalid port: 0".to_string()));
//! ```

mod either;
mod option;

pub use either::Either;
pub use option::IOption;
