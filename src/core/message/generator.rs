//! Copy templates. Every function is total: empty fields leave empty slots.

use crate::core::form::FormState;

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn positioning(s: &FormState) -> String {
    format!(
        "For {} who struggle with {}, {} offers {} called \"{}\" that delivers {}. \
         We're different because of {}, and you can trust it because of {}. Start here: {}.",
        s.audience,
        s.problem,
        s.brand,
        s.category,
        s.offer,
        s.outcome,
        s.differentiator,
        s.proof,
        s.cta,
    )
}

pub fn tagline(s: &FormState) -> String {
    format!("{} in minutes a day — not more noise.", capitalize(&s.outcome))
}

pub fn headlines(s: &FormState) -> [String; 3] {
    [
        format!(
            "How {} get {} (without {})",
            capitalize(&s.audience),
            s.outcome,
            s.problem
        ),
        format!(
            "{} in 30 days with a {} you'll actually use",
            capitalize(&s.outcome),
            s.category
        ),
        format!("Stop {}. Start {}.", s.problem, s.outcome),
    ]
}

pub fn aida(s: &FormState) -> [String; 4] {
    let [hook, ..] = headlines(s);
    [
        format!("Attention: {hook}"),
        format!(
            "Interest: Most {} struggle with {}, leading to missed opportunities and stress.",
            s.audience, s.problem
        ),
        format!(
            "Desire: Imagine {}. With {}, you'll get {}. Proof: {}.",
            s.outcome, s.offer, s.differentiator, s.proof
        ),
        format!("Action: {}.", s.cta),
    ]
}

pub fn four_ps(s: &FormState) -> [String; 4] {
    [
        format!(
            "Product: {} — {}. Differentiator: {}.",
            s.offer, s.category, s.differentiator
        ),
        format!("Price: {}.", s.price),
        format!("Place: Delivered via {}.", s.place),
        format!("Promotion: Lead with proof ({}). CTA: {}.", s.proof, s.cta),
    ]
}

pub fn dm_opener(s: &FormState) -> String {
    format!(
        "Saw your post about {}. I help {} get {}. Want a 2-step outline?",
        s.problem, s.audience, s.outcome
    )
}
