use thiserror::Error;

use crate::variable::CoreVariable;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every entity in this crate is a value object, so errors only arise at the boundary with the
/// analysis engine: decoding raw records, resolving handles the engine refers to, and issuing
/// write requests to a variable owner.
///
/// # Error Categories
///
/// ## Representation Defects
/// - [`Error::UnknownValueType`] - A value record carries a tag outside the closed set
/// - [`Error::UnknownSourceType`] - A variable record carries an unknown source kind
/// - [`Error::Malformed`] - A raw record is internally inconsistent
///
/// These indicate a version mismatch between this library and the engine that produced the
/// record. They must never be absorbed into an `Undetermined` value; a wrongly interpreted value
/// kind is worse than a failed decode.
///
/// ## Resolution Errors
/// - [`Error::UnknownArchitecture`] - A record references an architecture that is not registered
/// - [`Error::MissingVariableType`] - The owning function reports no type for a variable
/// - [`Error::IdentifierOverflow`] - A variable identity does not fit the packed identifier
/// - [`Error::OutOfBounds`] - A positional write past the end of a parameter list
///
/// # Examples
///
/// ```rust
/// use valscope::{Error, value::RegisterValueRaw};
///
/// let raw = RegisterValueRaw { state: 0x4242, value: 0, offset: 0 };
/// match raw.to_owned(None) {
///     Err(Error::UnknownValueType(state)) => assert_eq!(state, 0x4242),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A value record carries a state tag that is not part of the closed tag set.
    ///
    /// The associated value is the raw state as reported by the engine.
    #[error("Unknown register value type - {0}")]
    UnknownValueType(u32),

    /// A variable record carries a source type that is not part of the closed set.
    ///
    /// The associated value is the raw source type as reported by the engine.
    #[error("Unknown variable source type - {0}")]
    UnknownSourceType(u32),

    /// A raw record is damaged and could not be decoded.
    ///
    /// This error indicates that a record does not conform to its fixed layout, for
    /// example a `count` field that disagrees with the length of the payload it describes.
    /// The error includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A record references an architecture id that the lookup does not know.
    #[error("Failed to resolve architecture - {0}")]
    UnknownArchitecture(u32),

    /// The owning function has no type for the variable.
    ///
    /// Raised by setters which must preserve the current type while renaming.
    #[error("No type recorded for variable - {0}")]
    MissingVariableType(CoreVariable),

    /// The variable identity cannot be packed into a single identifier.
    ///
    /// The packed layout reserves 30 bits for the index and 32 bits for the storage.
    #[error("Variable does not fit into a packed identifier - {0}")]
    IdentifierOverflow(CoreVariable),

    /// An out of bound access was attempted on a positional collection.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,
}
