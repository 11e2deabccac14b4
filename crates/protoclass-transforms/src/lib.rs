//! Class conversion pass.
//!
//! Rewrites prototype-based class encodings into native class declarations,
//! one script at a time:
//!
//! ```javascript
//! /** @constructor */
//! function A() {}
//! A.prototype.foo = function() { return 1; };
//! A.create = function() { return new A(); };
//! ```
//!
//! becomes
//!
//! ```javascript
//! class A {
//!     constructor() {}
//!     foo() { return 1; }
//!     static create() { return new A(); }
//! }
//! ```
//!
//! Problems that do not stop the pass (a class defined twice, a prototype
//! assignment naming an unknown class) are reported as diagnostics.

pub mod base_type;
pub mod binding;
pub mod class_conversion;
pub mod class_registry;
pub mod constructor_promoter;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod member_merger;
pub mod options;
pub mod qualified_name;

pub use class_conversion::{ClassConversionPass, convert_script};
pub use class_registry::ClassRegistry;
pub use context::{ConversionContext, ConversionResult, ConversionStats};
pub use diagnostics::{ConversionDiagnostic, ConversionDiagnosticKind, DiagnosticReporter};
pub use error::ConversionError;
pub use member_merger::MemberAssignmentView;
pub use options::ConversionOptions;
