// Export formatting: variants to CSV/Markdown/HTML, posting history to CSV,
// site directory to pretty JSON. All formatters are pure and total.

pub mod formats;
pub mod handlers;
