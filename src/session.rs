use std::io::{self, BufRead, Write};

use crate::{
    calculator::{
        confirm::parse_confirmation,
        evaluator::evaluate,
        format::format_result,
        number::parse_number,
        operator::{parse_operator, Operator},
    },
    error::ComputationError,
};

/// An interactive calculator session over a pair of I/O streams.
///
/// The session owns a line-oriented input and an output sink. Each iteration
/// prompts for two operands and an operator, prints the outcome, and asks
/// whether to continue. It is generic over [`BufRead`] and [`Write`] so the
/// same loop runs against stdin/stdout in the binary and against in-memory
/// buffers in tests.
pub struct Session<R, W> {
    input:  R,
    output: W,
}

/// The lifecycle of a session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The loop keeps prompting for calculations.
    Running,
    /// The user declined to continue.
    Terminated,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the session until the user declines to continue.
    ///
    /// Prints the banner, then loops: read the first operand, the operator
    /// and the second operand, evaluate, report the outcome, and ask whether
    /// to go again. Computation failures are reported and never end the
    /// session; only a "no" answer does, after which the farewell is
    /// printed.
    ///
    /// # Errors
    /// Returns an `io::Error` if a stream fails, including `UnexpectedEof`
    /// when input ends while a prompt is still awaiting an answer.
    ///
    /// # Example
    /// ```
    /// use numera::session::Session;
    ///
    /// let input = &b"6\n/\n4\nn\n"[..];
    /// let mut output = Vec::new();
    ///
    /// Session::new(input, &mut output).run().unwrap();
    ///
    /// let transcript = String::from_utf8(output).unwrap();
    /// assert!(transcript.contains("Result: 1.5"));
    /// assert!(transcript.ends_with("Goodbye!\n"));
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== CLI Calculator ===")?;
        writeln!(self.output, "Tip: '**' is power (e.g., 2 ** 3 = 8).")?;
        writeln!(self.output)?;

        let mut state = State::Running;

        while state == State::Running {
            let a = self.prompt_number("Enter the first number: ")?;
            let op = self.prompt_operator()?;
            let b = self.prompt_number("Enter the second number: ")?;

            match evaluate(a, op, b) {
                Ok(result) => {
                    writeln!(self.output, "Result: {}", format_result(result))?;
                },
                Err(error @ ComputationError::DivisionByZero) => {
                    writeln!(self.output, "Error: {error}")?;
                },
                Err(error) => writeln!(self.output, "Unexpected error: {error}")?,
            }

            writeln!(self.output)?;

            if !self.prompt_confirmation()? {
                state = State::Terminated;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Prompts until a line parses as a finite number.
    fn prompt_number(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_number(&line) {
                Ok(value) => return Ok(value),
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }

    /// Prompts until a line parses as an operator.
    fn prompt_operator(&mut self) -> io::Result<Operator> {
        loop {
            let line = self.prompt_line("Choose an operator (+, -, *, /, **): ")?;
            match parse_operator(&line) {
                Ok(operator) => return Ok(operator),
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }

    /// Prompts until a line parses as a yes/no answer.
    fn prompt_confirmation(&mut self) -> io::Result<bool> {
        loop {
            let line = self.prompt_line("Do you want to perform another calculation? (y/n): ")?;
            match parse_confirmation(&line) {
                Ok(answer) => return Ok(answer),
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }

    /// Writes `prompt`, flushes, and reads one line of input.
    ///
    /// The prompt carries no trailing newline, so the output is flushed
    /// before blocking on the read. End of input while a prompt is pending
    /// surfaces as `UnexpectedEof`.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                                      "input ended while awaiting an answer"));
        }
        Ok(line)
    }
}
