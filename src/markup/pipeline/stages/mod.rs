//! Default pipeline stages.
//!
//! The standard rewrite pipeline consists of:
//!
//! 1. **HeadingStage** - `= Title =` lines to `<h1>` .. `<h6>`
//! 2. **BoldStage** - `'''text'''` to `<b>`
//! 3. **ItalicStage** - `''text''` to `<i>`
//! 4. **InternalLinkStage** - `[[PageName]]` to a page anchor
//! 5. **ExternalLinkStage** - `[https://…]` to an external anchor
//!
//! **EscapeStage** is optional and runs before all of them.

mod emphasis;
mod escape;
mod heading;
mod links;

pub use emphasis::{BoldStage, ItalicStage};
pub use escape::EscapeStage;
pub use heading::HeadingStage;
pub use links::{ExternalLinkStage, InternalLinkStage};
