use colored::*;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::print::PRINT_TARGET;

/// A span that shows a spinner with `message` while something runs inside it.
///
/// Attach it with [`tracing::Instrument::instrument`]; the spinner disappears
/// when the span closes. The span uses the print target so the default
/// filter, which silences most info events, keeps it enabled.
pub fn loading_span(message: &str) -> Span {
    let span: Span = info_span!(target: PRINT_TARGET, "loading", indicatif.pb_show = true);
    span.pb_set_message(&format!("{}", message.italic().white()));
    span
}
