/// Pipe table block type with owned delimiter constants.
pub struct TablePipe;

impl TablePipe {
    pub const PIPE: char = '|';
    /// Characters a separator row (`|---|:--:|`) is made of.
    pub const SEPARATOR_CHARS: [char; 4] = ['|', '-', ':', ' '];

    /// Whether a trimmed line opens a table: it starts with a pipe and has
    /// at least one more.
    pub fn opens(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PIPE) && trimmed.matches(Self::PIPE).count() >= 2
    }

    /// Whether a line continues an open table.
    pub fn continues(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Separator rows carry alignment only and are not data.
    pub fn is_separator(line: &str) -> bool {
        line.trim_end_matches('\r')
            .chars()
            .all(|c| Self::SEPARATOR_CHARS.contains(&c))
    }

    /// Splits a data row into trimmed cell strings.
    ///
    /// One empty field at each end (from a leading or trailing pipe) is
    /// dropped; empty fields between pipes are kept as empty cells.
    pub fn split_row(line: &str) -> Vec<String> {
        let mut fields: Vec<&str> = line.trim().split(Self::PIPE).map(str::trim).collect();
        if fields.first().is_some_and(|f| f.is_empty()) {
            fields.remove(0);
        }
        if fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        fields.into_iter().map(str::to_string).collect()
    }
}
