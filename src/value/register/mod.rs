//! Register values: the scalar lattice element.
//!
//! A [`RegisterValue`] describes what the engine knows about one register or stack slot at one
//! instruction. [`RegisterValueRaw`] and [`RegisterValueWithConfidenceRaw`] are the engine's
//! fixed-layout records; `to_owned` decodes them and [`RegisterValue::to_raw`] is the exact
//! inverse for every state in the closed set.
//!
//! # Examples
//!
//! ```rust
//! use valscope::value::{RegisterValue, RegisterValueRaw, RegisterValueType};
//!
//! let raw = RegisterValueRaw {
//!     state: RegisterValueType::ConstantPointerValue.as_raw(),
//!     value: 0x40_1000,
//!     offset: 0,
//! };
//! let value = raw.to_owned(None)?;
//! assert_eq!(value, RegisterValue::constant_pointer(0x40_1000));
//! assert_eq!(value.to_raw(), raw);
//! # Ok::<(), valscope::Error>(())
//! ```

mod owned;
mod raw;

pub use owned::{RegisterState, RegisterValue};
pub(crate) use raw::entry_register_name;
pub use raw::{RegisterValueRaw, RegisterValueWithConfidenceRaw};
