use crate::domain::design::CarDesign;
use crate::domain::errors::DomainError;

pub const CSV_FILE_NAME: &str = "car-designs.csv";

const HEADER: [&str; 9] = [
    "ID",
    "Customer",
    "Email",
    "Budget",
    "Engine",
    "Body Style",
    "Status",
    "Total Price",
    "Submitted Date",
];

/// Renders designs as CSV, one row per design in the given order.
pub fn designs_to_csv(designs: &[CarDesign]) -> Result<String, DomainError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER).map_err(csv_error)?;

    for d in designs {
        writer
            .write_record([
                d.id.to_string(),
                d.customer_name.clone(),
                d.customer_email.clone(),
                d.budget.clone(),
                d.engine_type.clone(),
                d.body_style.clone(),
                d.status.to_string(),
                format_price(d.total_price),
                d.submitted_at.format("%Y-%m-%d").to_string(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DomainError::Internal(e.to_string()))
}

fn csv_error(e: csv::Error) -> DomainError {
    DomainError::Internal(format!("csv export failed: {e}"))
}

/// `775000` becomes `₹775,000`.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{grouped}")
}
