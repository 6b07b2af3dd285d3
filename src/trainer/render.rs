//! Plain-text rendering for terminals

use std::fmt::Write;

use super::messages::Labels;
use super::response::{LevelSummary, TestResponse, TrainingSetup};

/// Level listing, one block per level
pub fn render_levels(levels: &[LevelSummary<'_>], labels: &Labels) -> String {
    let mut out = String::new();
    for level in levels {
        let _ = writeln!(out, "{}", level.title);
        let _ = writeln!(out, "  {}", level.description);
        let _ = writeln!(out, "  {}: {}", labels.product, level.product_name);
        for (j, label) in level.input_labels.iter().enumerate() {
            let _ = writeln!(out, "  X{} {}", j + 1, label);
        }
        out.push('\n');
    }
    out
}

/// Level details followed by the target truth table
pub fn render_setup(setup: &TrainingSetup<'_>, labels: &Labels) -> String {
    let level = &setup.level;
    let mut out = String::new();

    let _ = writeln!(out, "{}", level.title);
    let _ = writeln!(out, "{}: {}", labels.product, level.product_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} ({})",
        level.activation.name, level.activation.scientific_name
    );
    for line in level.activation.formula.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out, "{}: {}", labels.threshold, level.threshold);
    let _ = writeln!(out, "{}: {}", labels.weights, format_weights(&setup.weights));
    let _ = writeln!(out);

    for (j, label) in level.input_labels.iter().enumerate() {
        let _ = writeln!(out, "X{}: {}", j + 1, label);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>3}  {:<24}  {}",
        labels.number, labels.inputs, labels.expected
    );
    for (i, example) in setup.training_examples.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<24}  {}",
            i + 1,
            format_inputs(example.inputs.as_slice(), labels),
            labels.decision(example.expected_output)
        );
    }
    out
}

/// Test response as a results table
pub fn render_response(response: &TestResponse, labels: &Labels) -> String {
    let mut out = String::new();

    if response.is_correct {
        let _ = writeln!(out, "{}", response.message);
        let _ = writeln!(out, "{}", labels.all_correct);
    } else {
        let _ = writeln!(
            out,
            "{}",
            labels.tally(response.correct_count, response.total_count)
        );
        let _ = writeln!(out, "{}", response.message);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>3}  {:<24}  {:>7}  {:<12}  {:<12}  {}",
        labels.number, labels.inputs, labels.sum, labels.answer, labels.expected, labels.verdict
    );
    for (i, example) in response.results.iter().enumerate() {
        let verdict = if example.is_correct() {
            labels.correct
        } else {
            labels.wrong
        };
        let _ = writeln!(
            out,
            "{:>3}  {:<24}  {:>7.2}  {:<12}  {:<12}  {}",
            i + 1,
            format_inputs(example.inputs.as_slice(), labels),
            example.sum,
            labels.decision(example.actual_output),
            labels.decision(example.expected_output),
            verdict
        );
    }
    out
}

fn format_inputs(bits: &[u8], labels: &Labels) -> String {
    bits.iter()
        .map(|&b| labels.flag(b))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format!("{:.1}", w))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::trainer::Trainer;

    #[test]
    fn test_render_response_rows() {
        let trainer = Trainer::builtin(Language::En).unwrap();
        let response = trainer.submit_test(1, &[0.0, 0.0]).unwrap();
        let text = render_response(&response, &Labels::for_language(Language::En));

        assert!(text.starts_with("3 of 4 correct"));
        assert!(text.contains("Yes, No"));
        assert!(text.contains("0.00"));
        assert_eq!(text.matches("Wrong").count(), 1);
    }

    #[test]
    fn test_render_response_tally_ru() {
        let trainer = Trainer::builtin(Language::Ru).unwrap();
        let response = trainer.submit_test(2, &[0.0, 0.0, 0.0]).unwrap();
        let text = render_response(&response, &Labels::for_language(Language::Ru));
        assert!(text.starts_with("4 из 8 правильных"));
    }

    #[test]
    fn test_render_setup_lists_labels() {
        let trainer = Trainer::builtin(Language::En).unwrap();
        let setup = trainer.training_setup(2).unwrap();
        let text = render_setup(&setup, &Labels::for_language(Language::En));

        assert!(text.contains("X3: Good game reviews?"));
        assert!(text.contains("Weights: 0.0, 0.0, 0.0"));
    }

    #[test]
    fn test_render_levels() {
        let trainer = Trainer::builtin(Language::Ru).unwrap();
        let levels = trainer.list_levels();
        let text = render_levels(&levels, &Labels::for_language(Language::Ru));
        assert!(text.contains("Level 3: Advanced"));
        assert!(text.contains("Товар: Gaming laptop"));
    }
}
