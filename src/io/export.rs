use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::application::UserReport;
use crate::domain::{BalanceRecord, Garden};

/// Write a user report as CSV (header plus one row).
pub fn write_user_csv<W: Write>(writer: W, report: &UserReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["address", "expiry", "unit", "status"])?;
    csv_writer.write_record(&[
        report.user.address.clone(),
        report.user.expiry.to_string(),
        report.user.unit.to_string(),
        report.status.to_string(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

/// Write a balance record as CSV (header plus one row).
pub fn write_balance_csv<W: Write>(writer: W, balance: &BalanceRecord) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["confirmed", "unconfirmed", "total"])?;
    csv_writer.write_record(&[
        balance.confirmed.to_string(),
        balance.unconfirmed.to_string(),
        balance.total.to_string(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

/// Write a garden entry as CSV (header plus one row).
pub fn write_garden_csv<W: Write>(writer: W, garden: &Garden) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["name", "age", "status"])?;
    csv_writer.write_record(&[
        garden.name.clone(),
        garden.age.to_string(),
        garden.status().to_string(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

/// Write any serializable value as pretty-printed JSON.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}
