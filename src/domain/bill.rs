use super::{amount::parse_amount, Amount, BillError};

/// Number of people the splits are divided among when nothing else is configured.
pub(crate) const DEFAULT_NUM_PEOPLE: i8 = 1;

/// The inputs of a single bill calculation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BillRequest {
    principal: Option<String>,
    splits: Vec<f32>,
    num_people: i8,
}

impl BillRequest {
    pub fn new(principal: Option<String>, splits: Vec<f32>, num_people: i8) -> BillRequest {
        BillRequest {
            principal,
            splits,
            num_people,
        }
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn splits(&self) -> &[f32] {
        &self.splits
    }

    pub fn num_people(&self) -> i8 {
        self.num_people
    }

    /// Rejects a request that carries neither a principal nor any splits.
    pub fn validate(&self) -> Result<(), BillError> {
        if self.principal.is_none() && self.splits.is_empty() {
            return Err(BillError::MissingInput);
        }
        Ok(())
    }

    /// `principal + sum(splits) / num_people`.
    ///
    /// A zero head count is not guarded against: with splits present the
    /// division follows IEEE-754 and yields `+Inf`, `-Inf` or `NaN`.
    pub fn amount_owed(&self) -> Result<Amount, BillError> {
        let principal = match self.principal.as_deref() {
            Some(raw) => parse_principal(raw)?,
            None => 0.0,
        };

        let mut split = 0f32;
        if !self.splits.is_empty() {
            split = self.splits.iter().sum::<f32>() / f32::from(self.num_people);
        }

        Ok(Amount::new(principal + split))
    }
}

/// Parses a principal amount as a 32-bit float.
pub(crate) fn parse_principal(raw: &str) -> Result<f32, BillError> {
    parse_amount(raw).map_err(|reason| BillError::InvalidPrincipal {
        value: raw.to_string(),
        reason,
    })
}
