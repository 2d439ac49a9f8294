use std::fmt::Write;

use crate::query::Operator;

use super::SubfilterRegistry;

/// Renders help text for the query syntax and every registered filter.
pub fn render_usage(registry: &SubfilterRegistry) -> String {
    let operators = Operator::ALL
        .iter()
        .map(|operator| operator.symbol())
        .collect::<Vec<_>>()
        .join(" ");

    let mut usage = String::new();
    usage.push_str("Search terms are separated by spaces and must all match.\n");
    usage.push_str("A bare word or \"quoted phrase\" searches card names.\n");
    usage.push_str("Prefix a term with - or ! to exclude matches.\n");
    let _ = writeln!(usage, "Filter terms are written key<operator>value, operators: {operators}");

    let subfilters = registry.subfilters();
    if subfilters.is_empty() {
        return usage;
    }

    usage.push_str("\nFilters:\n");
    for subfilter in subfilters {
        let _ = match subfilter.shorthand().filter(|value| !value.is_empty()) {
            Some(shorthand) => writeln!(
                usage,
                "  {} ({}): {}",
                subfilter.key(),
                shorthand,
                subfilter.description()
            ),
            None => writeln!(usage, "  {}: {}", subfilter.key(), subfilter.description()),
        };
    }
    usage
}
