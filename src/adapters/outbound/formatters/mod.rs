/// Formatter adapters for the health report output formats
mod csv_formatter;
mod json_formatter;
mod markdown_formatter;

#[cfg(test)]
mod test_fixtures;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
