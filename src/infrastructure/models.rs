use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::design::{CarDesign, CustomerIdentity};
use crate::domain::errors::DomainError;
use crate::domain::ports::Session;
use crate::schema::slots;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = slots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SlotRow {
    pub name: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = slots)]
pub struct NewSlotRow<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub updated_at: NaiveDateTime,
}

// ── Stored JSON shapes ───────────────────────────────────────────────────────

/// One element of the JSON array kept in the designs slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
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
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub total_price: i64,
}

impl From<&CarDesign> for DesignRecord {
    fn from(d: &CarDesign) -> Self {
        Self {
            id: d.id,
            customer_id: d.customer_id,
            customer_name: d.customer_name.clone(),
            customer_email: d.customer_email.clone(),
            budget: d.budget.clone(),
            engine_type: d.engine_type.clone(),
            transmission: d.transmission.clone(),
            tyres: d.tyres.clone(),
            wheels: d.wheels.clone(),
            exhaust_type: d.exhaust_type.clone(),
            body_style: d.body_style.clone(),
            exterior_color: d.exterior_color.clone(),
            interior_layout: d.interior_layout.clone(),
            features: d.features.clone(),
            status: d.status.as_str().to_string(),
            submitted_at: d.submitted_at,
            total_price: d.total_price,
        }
    }
}

impl TryFrom<DesignRecord> for CarDesign {
    type Error = DomainError;

    fn try_from(r: DesignRecord) -> Result<Self, Self::Error> {
        let status = r.status.parse().map_err(|_| {
            DomainError::CorruptStorage(format!("design {} has status '{}'", r.id, r.status))
        })?;
        Ok(CarDesign {
            id: r.id,
            customer_id: r.customer_id,
            customer_name: r.customer_name,
            customer_email: r.customer_email,
            budget: r.budget,
            engine_type: r.engine_type,
            transmission: r.transmission,
            tyres: r.tyres,
            wheels: r.wheels,
            exhaust_type: r.exhaust_type,
            body_style: r.body_style,
            exterior_color: r.exterior_color,
            interior_layout: r.interior_layout,
            features: r.features,
            status,
            submitted_at: r.submitted_at,
            total_price: r.total_price,
        })
    }
}

/// The JSON object kept in the session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user: CustomerIdentity,
    pub is_admin: bool,
}

impl From<&Session> for SessionRecord {
    fn from(s: &Session) -> Self {
        Self {
            user: s.user.clone(),
            is_admin: s.is_admin,
        }
    }
}

impl From<SessionRecord> for Session {
    fn from(r: SessionRecord) -> Self {
        Self {
            user: r.user,
            is_admin: r.is_admin,
        }
    }
}
