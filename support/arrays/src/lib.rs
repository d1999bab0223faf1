//! Small helpers for working with sequences.
//!
//! - [`to_record`] indexes a sequence by a key extracted from each item.
//! - [`as_array`] turns an optional single value or vector into a vector.
//! - [`is_same`] compares two slices, ignoring order, by their `Display` output.
//!
//! # Example
//!
//! ```
//! use orion_arrays::{OneOrMany, as_array, is_same, to_record};
//!
//! struct Flow { id: u32, name: &'static str }
//!
//! let flows = [Flow { id: 1, name: "etl" }, Flow { id: 2, name: "report" }];
//! let by_id = to_record(&flows, |flow| flow.id);
//! assert_eq!(by_id[&2].name, "report");
//!
//! assert_eq!(as_array(Some(OneOrMany::One("tag"))), ["tag"]);
//! assert_eq!(as_array::<&str>(None), Vec::<&str>::new());
//!
//! assert!(is_same(&[1, 2], &[2, 1]));
//! ```

#![no_std]
extern crate alloc;

mod one_or_many;
mod record;
mod same;

pub use one_or_many::{OneOrMany, as_array};
pub use record::{RecordError, to_record, try_to_record};
pub use same::is_same;
