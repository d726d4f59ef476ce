use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Admin-controlled lifecycle stage of a submitted design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DesignStatus {
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Approved")]
    Approved,
}

impl DesignStatus {
    pub const ALL: [DesignStatus; 3] = [
        DesignStatus::UnderReview,
        DesignStatus::InProgress,
        DesignStatus::Approved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DesignStatus::UnderReview => "Under Review",
            DesignStatus::InProgress => "In Progress",
            DesignStatus::Approved => "Approved",
        }
    }
}

impl fmt::Display for DesignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown design status '{s}'")))
    }
}

/// Identity of the customer a design is submitted for.
///
/// Captured by value at submission time; it is not a live reference into
/// the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl CustomerIdentity {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let identity = Self {
            id,
            name: name.into(),
            email: email.into(),
        };
        identity.validate()?;
        Ok(identity)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id < 0 {
            return Err(DomainError::InvalidInput(format!(
                "customer id {} is negative",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("customer name is empty".into()));
        }
        if !self.email.contains('@') {
            return Err(DomainError::InvalidInput(format!(
                "customer email '{}' is not an address",
                self.email
            )));
        }
        Ok(())
    }
}

/// A submitted configuration, flattened. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDesign {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub budget: String,
    pub engine_type: String,
    pub transmission: String,
    pub tyres: String,
    pub wheels: String,
    pub exhaust_type: String,
    pub body_style: String,
    pub exterior_color: String,
    pub interior_layout: String,
    pub features: Vec<String>,
    pub status: DesignStatus,
    pub submitted_at: DateTime<Utc>,
    pub total_price: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignStats {
    pub total: usize,
    pub under_review: usize,
    pub in_progress: usize,
    pub approved: usize,
}

impl DesignStats {
    pub fn of(designs: &[CarDesign]) -> Self {
        designs.iter().fold(
            DesignStats {
                total: designs.len(),
                ..DesignStats::default()
            },
            |mut stats, design| {
                match design.status {
                    DesignStatus::UnderReview => stats.under_review += 1,
                    DesignStatus::InProgress => stats.in_progress += 1,
                    DesignStatus::Approved => stats.approved += 1,
                }
                stats
            },
        )
    }
}

/// Per-customer activity derived from the design list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total_designs: usize,
    pub last_active: DateTime<Utc>,
}

/// Groups designs by customer id, keeping first-appearance order. Name and
/// email come from the customer's first design.
pub fn summarize_customers(designs: &[CarDesign]) -> Vec<CustomerSummary> {
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut summaries: Vec<CustomerSummary> = Vec::new();

    for design in designs {
        match positions.get(&design.customer_id) {
            Some(&idx) => {
                let summary = &mut summaries[idx];
                summary.total_designs += 1;
                if design.submitted_at > summary.last_active {
                    summary.last_active = design.submitted_at;
                }
            }
            None => {
                positions.insert(design.customer_id, summaries.len());
                summaries.push(CustomerSummary {
                    id: design.customer_id,
                    name: design.customer_name.clone(),
                    email: design.customer_email.clone(),
                    total_designs: 1,
                    last_active: design.submitted_at,
                });
            }
        }
    }

    summaries
}

/// Admin list filter. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignFilter {
    /// Case-insensitive substring of customer name, engine type or body style.
    pub search: Option<String>,
    pub status: Option<DesignStatus>,
    /// Exact budget label.
    pub budget: Option<String>,
}

impl DesignFilter {
    pub fn matches(&self, design: &CarDesign) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                [&design.customer_name, &design.engine_type, &design.body_style]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
        };
        let matches_status = self.status.map_or(true, |s| design.status == s);
        let matches_budget = self
            .budget
            .as_deref()
            .map_or(true, |b| design.budget == b);

        matches_search && matches_status && matches_budget
    }
}
