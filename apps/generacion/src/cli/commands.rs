//! # CLI Command Implementations
//!
//! The prompt, the input read and the three-pass transcript.

use generacion_core::{AGE_PROMPT, Age, ClassificationReport, GeneracionError, Strategy};
use std::io::{BufRead, Write};

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Prompt for an age, classify it and print every pass.
///
/// Nothing after the prompt is written when the input is rejected.
pub fn cmd_classify<R, W>(
    input: &mut R,
    output: &mut W,
) -> Result<ClassificationReport, GeneracionError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", AGE_PROMPT)?;
    output.flush()?;

    let age = read_age(input)?;
    let report = ClassificationReport::classify(age);

    tracing::debug!(
        age = %age,
        birth_year = %report.birth_year,
        "Derived birth year"
    );

    if !report.is_consistent() {
        tracing::warn!(
            birth_year = report.birth_year.value(),
            "Classification strategies disagree: {:?}",
            report
        );
    }

    render_report(&report, output)?;
    Ok(report)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Read one line and parse it as an age.
///
/// End of input counts as an empty line, which is not a valid age.
pub fn read_age<R: BufRead>(input: &mut R) -> Result<Age, GeneracionError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        tracing::debug!("Input closed before an age was entered");
    }
    line.parse()
}

/// Print each pass: blank line, section header, one message per bucket.
pub fn render_report<W: Write>(
    report: &ClassificationReport,
    output: &mut W,
) -> Result<(), GeneracionError> {
    for strategy in Strategy::ALL {
        writeln!(output)?;
        writeln!(output, "{}", strategy.header())?;

        let results = report.results_for(strategy);
        for generation in results {
            writeln!(output, "{}", generation.message())?;
        }

        tracing::debug!(strategy = %strategy, matches = results.len(), "Pass complete");
    }

    output.flush()?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use generacion_core::{BirthYear, Generation};

    #[test]
    fn read_age_from_line() {
        let age = read_age(&mut "42\n".as_bytes()).expect("age");
        assert_eq!(age.value(), 42);
    }

    #[test]
    fn read_age_only_consumes_first_line() {
        let mut input = "18\n99\n".as_bytes();
        let age = read_age(&mut input).expect("age");
        assert_eq!(age.value(), 18);
        assert_eq!(input, b"99\n");
    }

    #[test]
    fn read_age_at_eof() {
        let result = read_age(&mut "".as_bytes());
        assert!(matches!(result, Err(GeneracionError::InvalidAge(_))));
    }

    #[test]
    fn render_prints_three_sections() {
        let age = Age::new(50).expect("age");
        let report = ClassificationReport::classify_birth_year(age, BirthYear(1975));
        let mut out = Vec::new();
        render_report(&report, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "\n=== Usando estructura IF ===\n\
             Perteneces a la Generación X\n\
             \n=== Usando estructura IF...ELSE ===\n\
             Perteneces a la Generación X\n\
             \n=== Usando estructura SWITCH ===\n\
             Perteneces a la Generación X\n"
        );
    }

    #[test]
    fn render_prints_every_independent_match() {
        let age = Age::new(0).expect("age");
        let mut report = ClassificationReport::classify_birth_year(age, BirthYear(2000));
        report.independent.push(Generation::Unclassified);

        let mut out = Vec::new();
        render_report(&report, &mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("Perteneces a las Generaciones Z y Alpha").count(), 3);
        assert_eq!(
            text.matches(Generation::Unclassified.message()).count(),
            1
        );
    }

    #[test]
    fn classify_writes_prompt_first() {
        let mut out = Vec::new();
        let report = cmd_classify(&mut "30\n".as_bytes(), &mut out).expect("classify");
        assert_eq!(report.generation(), Some(Generation::ZAndAlpha));

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Por favor, ingresa tu edad: \n=== Usando estructura IF ===\n"));
    }

    #[test]
    fn classify_rejects_before_printing_sections() {
        let mut out = Vec::new();
        let result = cmd_classify(&mut "abc\n".as_bytes(), &mut out);
        assert!(matches!(result, Err(GeneracionError::InvalidAge(_))));
        assert_eq!(out, AGE_PROMPT.as_bytes());
    }
}
