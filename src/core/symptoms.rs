use crate::domain::model::{Likelihood, Symptom};
use std::collections::BTreeSet;

pub fn likelihood(selected_symptoms: &BTreeSet<Symptom>) -> Likelihood {
    match selected_symptoms.len() {
        0 => Likelihood::Low,
        1..=2 => Likelihood::Moderate,
        3..=4 => Likelihood::High,
        _ => Likelihood::VeryHigh,
    }
}

pub fn likelihood_sentence(likelihood: Likelihood) -> String {
    let mut sentence = format!(
        "Based on your selection, the likelihood is **{}**.",
        likelihood.label()
    );
    if let Some(advisory) = likelihood.advisory() {
        sentence.push(' ');
        sentence.push_str(advisory);
    }
    sentence
}
