use crate::error::FormError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The closed set of form inputs. No other field names exist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Brand,
    Audience,
    Problem,
    Outcome,
    Category,
    Differentiator,
    Proof,
    Offer,
    Price,
    Place,
    Cta,
}

impl FormField {
    /// Parse a user-supplied field name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, FormError> {
        name.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| FormError::UnknownField(name.to_string()))
    }

    /// Form label, e.g. `Differentiator`.
    pub fn label(self) -> String {
        crate::core::message::capitalize(self.as_ref())
    }
}

/// The business facts a user types into the form.
///
/// Keys missing from a stored object fall back to the preset value for that
/// key; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub brand: String,
    pub audience: String,
    pub problem: String,
    pub outcome: String,
    pub category: String,
    pub differentiator: String,
    pub proof: String,
    pub offer: String,
    pub price: String,
    pub place: String,
    pub cta: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            brand: "columbianxchange.com".into(),
            audience: "spiritual entrepreneurs and creators".into(),
            problem: "inconsistent sales and fuzzy messaging".into(),
            outcome: "consistent inquiries and a clear offer".into(),
            category: "practical marketing coaching".into(),
            differentiator: "daily 20-minute habit + receipts-first approach".into(),
            proof: "client screenshots showing 2–5 bookings/week in 30 days".into(),
            offer: "Marketing Pow Wow – Starter Sprint".into(),
            price: "$97 intro or $0 community tier".into(),
            place: "live Zoom + templates via Notion".into(),
            cta: "DM 'START' or book a 10-min intro call".into(),
        }
    }
}

impl FormState {
    /// A state with every field empty.
    pub fn blank() -> Self {
        Self {
            brand: String::new(),
            audience: String::new(),
            problem: String::new(),
            outcome: String::new(),
            category: String::new(),
            differentiator: String::new(),
            proof: String::new(),
            offer: String::new(),
            price: String::new(),
            place: String::new(),
            cta: String::new(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Brand => &self.brand,
            FormField::Audience => &self.audience,
            FormField::Problem => &self.problem,
            FormField::Outcome => &self.outcome,
            FormField::Category => &self.category,
            FormField::Differentiator => &self.differentiator,
            FormField::Proof => &self.proof,
            FormField::Offer => &self.offer,
            FormField::Price => &self.price,
            FormField::Place => &self.place,
            FormField::Cta => &self.cta,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Brand => &mut self.brand,
            FormField::Audience => &mut self.audience,
            FormField::Problem => &mut self.problem,
            FormField::Outcome => &mut self.outcome,
            FormField::Category => &mut self.category,
            FormField::Differentiator => &mut self.differentiator,
            FormField::Proof => &mut self.proof,
            FormField::Offer => &mut self.offer,
            FormField::Price => &mut self.price,
            FormField::Place => &mut self.place,
            FormField::Cta => &mut self.cta,
        }
    }

    /// Copy of `self` with exactly one field replaced. Any string is accepted.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::iter().map(move |field| (field, self.get(field)))
    }
}
