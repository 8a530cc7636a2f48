use std::str::FromStr;

use tracing::debug;

use crate::{
    apply_function, calculate, error::CalcError, interpreter::function::UnaryFunction,
    util::num::format_result,
};

/// What the display shows after any failed calculation.
pub const ERROR_DISPLAY: &str = "Error";

/// The button grid of the calculator window, row by row.
///
/// Every label parses as a [`Key`].
pub const KEYPAD_LAYOUT: [[&str; 6]; 4] = [["7", "8", "9", "/", "C", "CE"],
                                           ["4", "5", "6", "*", "sqrt", "x^2"],
                                           ["1", "2", "3", "-", "1/x", "sin"],
                                           ["0", ".", "+", "=", "cos", "tan"]];

/// A single key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// A character appended to the input buffer.
    Input(char),
    /// `=`: evaluates the buffer as an expression.
    Equals,
    /// One of the single-operand function keys.
    Function(UnaryFunction),
    /// `C`: clears the buffer and the display.
    ClearEntry,
    /// `CE`: clears the buffer, the display and the pending fresh state.
    ClearAll,
}

impl FromStr for Key {
    type Err = CalcError;

    /// Parses a button label.
    ///
    /// Besides the labels of [`KEYPAD_LAYOUT`], any single character the
    /// expression grammar accepts (`^`, `(`, `)`, space) is an input key.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "=" => return Ok(Self::Equals),
            "C" => return Ok(Self::ClearEntry),
            "CE" => return Ok(Self::ClearAll),
            _ => {},
        }

        if let Some(function) = UnaryFunction::from_label(label) {
            return Ok(Self::Function(function));
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_input_char(c) => Ok(Self::Input(c)),
            _ => Err(CalcError::UnknownKey { label: label.to_string() }),
        }
    }
}

const fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')' | ' ')
}

/// Renders the outcome of a calculation for the display.
///
/// # Example
/// ```
/// use calcpad::{calculate, keypad::render};
///
/// assert_eq!(render(&calculate("7*8")), "56");
/// assert_eq!(render(&calculate("1/0")), "Error");
/// ```
#[must_use]
pub fn render(result: &Result<f64, CalcError>) -> String {
    match result {
        Ok(value) => format_result(*value),
        Err(_) => ERROR_DISPLAY.to_string(),
    }
}

/// A headless calculator session.
///
/// Holds the characters typed since the last clear and the current display
/// text. After `=` or a function key the session is *fresh*: the next key
/// starts a new buffer, so a result is never edited in place.
///
/// # Example
/// ```
/// use calcpad::keypad::Calculator;
///
/// let mut calc = Calculator::new();
/// for label in ["1", "+", "2", "*", "3"] {
///     calc.press_label(label).unwrap();
/// }
/// assert_eq!(calc.display(), "1+2*3");
/// assert_eq!(calc.press_label("=").unwrap(), "7");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    input:   String,
    display: String,
    fresh:   bool,
}

impl Calculator {
    /// Creates a session with an empty buffer and display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The characters typed since the last clear or computation.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text currently on the display.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns `true` if the next key press starts a new buffer.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Handles one key press and returns the new display text.
    pub fn press(&mut self, key: Key) -> &str {
        debug!(?key, input = %self.input, fresh = self.fresh, "key pressed");

        if self.fresh {
            self.input.clear();
            self.fresh = false;
        }

        match key {
            Key::Input(c) => {
                self.input.push(c);
                self.display.clone_from(&self.input);
            },
            Key::Equals => {
                let result = calculate(&self.input);
                self.show(&result);
            },
            Key::Function(function) => {
                let result = apply_function(function, &self.input);
                self.show(&result);
            },
            Key::ClearEntry | Key::ClearAll => {
                self.input.clear();
                self.display.clear();
            },
        }

        &self.display
    }

    /// Parses `label` as a [`Key`] and presses it.
    ///
    /// # Errors
    /// Returns `CalcError::UnknownKey` for labels that are not on the keypad.
    /// The session is left untouched in that case.
    pub fn press_label(&mut self, label: &str) -> Result<&str, CalcError> {
        let key: Key = label.parse()?;
        Ok(self.press(key))
    }

    fn show(&mut self, result: &Result<f64, CalcError>) {
        match result {
            Ok(value) => debug!(input = %self.input, value, "calculation succeeded"),
            Err(e) => debug!(input = %self.input, error = %e, "calculation failed"),
        }
        self.display = render(result);
        self.fresh = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(labels: &[&str]) -> Calculator {
        let mut calc = Calculator::new();
        for label in labels {
            calc.press_label(label).unwrap();
        }
        calc
    }

    #[test]
    fn layout_labels_are_keys() {
        for label in KEYPAD_LAYOUT.iter().flatten() {
            assert!(label.parse::<Key>().is_ok(), "{label} should be a key");
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for label in ["", "x", "12", "sqrt2", "=="] {
            assert_eq!(label.parse::<Key>(),
                       Err(CalcError::UnknownKey { label: label.to_string() }));
        }
    }

    #[test]
    fn typing_echoes_the_buffer() {
        let calc = run(&["4", ".", "5", "*", "2"]);
        assert_eq!(calc.display(), "4.5*2");
        assert_eq!(calc.input(), "4.5*2");
        assert!(!calc.is_fresh());
    }

    #[test]
    fn equals_shows_result_and_starts_fresh() {
        let mut calc = run(&["7", "*", "8", "="]);
        assert_eq!(calc.display(), "56");
        assert!(calc.is_fresh());

        assert_eq!(calc.press(Key::Input('2')), "2");
        assert_eq!(calc.input(), "2");
    }

    #[test]
    fn syntax_error_shows_error() {
        let calc = run(&["2", "+", "="]);
        assert_eq!(calc.display(), ERROR_DISPLAY);
        assert!(calc.is_fresh());
    }

    #[test]
    fn division_by_zero_shows_error() {
        let calc = run(&["1", "/", "0", "="]);
        assert_eq!(calc.display(), ERROR_DISPLAY);
    }

    #[test]
    fn function_keys_use_the_raw_input() {
        assert_eq!(run(&["1", "6", "sqrt"]).display(), "4");
        assert_eq!(run(&["-", "4", "sqrt"]).display(), ERROR_DISPLAY);
        assert_eq!(run(&["0", "1/x"]).display(), ERROR_DISPLAY);
        assert_eq!(run(&["5", "x^2"]).display(), "25");
        assert_eq!(run(&["0", "cos"]).display(), "1");
        assert_eq!(run(&["2", "+", "2", "sqrt"]).display(), ERROR_DISPLAY);
    }

    #[test]
    fn domain_error_still_starts_fresh() {
        let mut calc = run(&["-", "4", "sqrt"]);
        assert!(calc.is_fresh());
        assert_eq!(calc.press(Key::Input('9')), "9");
    }

    #[test]
    fn function_after_result_sees_an_empty_buffer() {
        let calc = run(&["8", "+", "8", "=", "sqrt"]);
        assert_eq!(calc.display(), ERROR_DISPLAY);
    }

    #[test]
    fn clear_keys_empty_everything() {
        let mut calc = run(&["1", "2"]);
        assert_eq!(calc.press(Key::ClearEntry), "");
        assert_eq!(calc.input(), "");

        let mut calc = run(&["3", "="]);
        assert_eq!(calc.press(Key::ClearAll), "");
        assert!(!calc.is_fresh());
        assert_eq!(calc.press(Key::Input('5')), "5");
    }
}
