/// The function module implements the keypad's single-operand functions.
///
/// Square root, square, reciprocal and the three trigonometric functions
/// read the current input as one literal, check their domain, and apply a
/// fixed transformation. They share no code with the expression grammar.
///
/// # Responsibilities
/// - Parses plain numeric literals.
/// - Rejects negative square roots and reciprocals of zero.
/// - Converts degrees to radians for the trigonometric functions.
pub mod function;
/// The lexer module tokenizes expressions for the parser.
///
/// The lexer reads the raw expression and produces numbers, operators and
/// parentheses, skipping spaces. A cursor wraps it with one token of
/// lookahead and the byte position of that token.
///
/// # Responsibilities
/// - Converts the input into tokens with their byte offsets.
/// - Reports characters outside the expression alphabet.
/// - Tracks whether the input is exhausted.
pub mod lexer;
/// The parser module evaluates expressions by recursive descent.
///
/// Each grammar level is one function that returns the value of what it
/// parsed, so evaluation happens while parsing and no syntax tree is kept.
///
/// # Responsibilities
/// - Implements precedence and associativity of `+ - * / ^` and unary signs.
/// - Requires the whole input to be consumed.
/// - Reports malformed input with the position where it was detected.
pub mod parser;
