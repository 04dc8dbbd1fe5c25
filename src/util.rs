/// Source position helpers.
///
/// Tokens and errors carry byte offsets. These helpers turn an offset back
/// into the line and column a person reading the file expects.
pub mod position;
