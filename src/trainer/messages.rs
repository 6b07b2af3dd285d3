//! User-facing message catalog (English and Russian)

use crate::config::Language;

/// Headline message of a test response
pub fn result_message(language: Language, correct: usize, total: usize) -> String {
    match (language, correct == total) {
        (Language::En, true) => {
            "Congratulations! You configured the neural network correctly! 🎉".to_string()
        }
        (Language::Ru, true) => "Поздравляем! Вы правильно настроили нейросеть! 🎉".to_string(),
        (Language::En, false) => format!(
            "Correct answers: {} of {}. Try changing the weights!",
            correct, total
        ),
        (Language::Ru, false) => format!(
            "Правильных ответов: {} из {}. Попробуйте изменить веса!",
            correct, total
        ),
    }
}

/// Fixed labels used by the text renderer
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub number: &'static str,
    pub inputs: &'static str,
    pub sum: &'static str,
    pub answer: &'static str,
    pub expected: &'static str,
    pub verdict: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub buy: &'static str,
    pub dont_buy: &'static str,
    pub correct: &'static str,
    pub wrong: &'static str,
    pub all_correct: &'static str,
    pub weights: &'static str,
    pub threshold: &'static str,
    pub product: &'static str,
    /// Template for the failure headline, `{c}` correct of `{t}` total
    pub tally: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Labels {
                number: "#",
                inputs: "Inputs",
                sum: "S",
                answer: "Answer",
                expected: "Expected",
                verdict: "Result",
                yes: "Yes",
                no: "No",
                buy: "Buy",
                dont_buy: "Don't buy",
                correct: "Correct",
                wrong: "Wrong",
                all_correct: "You trained the neural network! All answers are correct!",
                weights: "Weights",
                threshold: "Threshold",
                product: "Product",
                tally: "{c} of {t} correct",
            },
            Language::Ru => Labels {
                number: "№",
                inputs: "Входы",
                sum: "S",
                answer: "Ответ",
                expected: "Ожидаемый",
                verdict: "Результат",
                yes: "Да",
                no: "Нет",
                buy: "Купить",
                dont_buy: "Не покупать",
                correct: "Правильно",
                wrong: "Неправильно",
                all_correct: "Ты успешно обучил нейросеть! Все ответы правильные!",
                weights: "Веса",
                threshold: "Порог",
                product: "Товар",
                tally: "{c} из {t} правильных",
            },
        }
    }

    /// Failure headline, e.g. "3 of 4 correct"
    pub fn tally(&self, correct: usize, total: usize) -> String {
        self.tally
            .replace("{c}", &correct.to_string())
            .replace("{t}", &total.to_string())
    }

    /// Decision label for an output bit
    pub fn decision(&self, output: u8) -> &'static str {
        if output == 1 {
            self.buy
        } else {
            self.dont_buy
        }
    }

    /// Yes/No label for an input bit
    pub fn flag(&self, bit: u8) -> &'static str {
        if bit == 1 {
            self.yes
        } else {
            self.no
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let msg = result_message(Language::En, 4, 4);
        assert!(msg.starts_with("Congratulations!"));
    }

    #[test]
    fn test_partial_message() {
        assert_eq!(
            result_message(Language::En, 2, 4),
            "Correct answers: 2 of 4. Try changing the weights!"
        );
        assert_eq!(
            result_message(Language::Ru, 5, 8),
            "Правильных ответов: 5 из 8. Попробуйте изменить веса!"
        );
    }

    #[test]
    fn test_labels() {
        let labels = Labels::for_language(Language::Ru);
        assert_eq!(labels.flag(1), "Да");
        assert_eq!(labels.decision(0), "Не покупать");
        assert_eq!(
            Labels::for_language(Language::En).tally(3, 4),
            "3 of 4 correct"
        );
    }
}
