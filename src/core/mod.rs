// Page controller exports
pub mod controller;
pub mod form;
pub mod lookup;
pub mod submission;
pub mod view;

pub use controller::{PageController, PageLoad};
pub use form::{build_request, parse_float_prefix, parse_int_prefix, FormError};
pub use lookup::{apply_lookup, load_lookup, resolve_options, with_sentinel, LookupError};
pub use submission::{format_price, handle_submission, result_text, SubmissionError};
pub use view::{ConsoleView, MemoryView, PageView};
