//! Safe console input.
//!
//! Blocking readers that loop until the user supplies something valid:
//! non-empty strings, integers and doubles (optionally bounded), yes/no
//! answers and pattern-matched strings. Also renders the fixed-width
//! banners used for headings.
//!
//! # Example
//!
//! ```
//! use safe_input::SafeInput;
//! use std::io::Cursor;
//!
//! let mut input = SafeInput::new(Cursor::new(b"9\n2\n".to_vec()), Vec::<u8>::new());
//! assert_eq!(input.ranged_int("Enter row (1-3)", 1, 3).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod banner;
mod error;
mod input;

pub use banner::{HEADER_WIDTH, pretty_header};
pub use error::InputError;
pub use input::SafeInput;
