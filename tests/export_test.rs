mod common;

use anyhow::Result;
use common::{test_service, SAMPLE_ADDRESS};
use serde_json::Value;
use vigilo::domain::ExpiryUnit;
use vigilo::io::{write_balance_csv, write_garden_csv, write_json, write_user_csv};

#[test]
fn test_user_report_csv() -> Result<()> {
    let service = test_service();
    let report = service.check_user(SAMPLE_ADDRESS, 2700, ExpiryUnit::Seconds)?;

    let mut buf = Vec::new();
    write_user_csv(&mut buf, &report)?;
    let csv = String::from_utf8(buf)?;

    assert!(csv.starts_with("address,expiry,unit,status"));
    assert!(csv.contains(SAMPLE_ADDRESS));
    assert!(csv.contains("2700"));
    assert!(csv.contains("seconds"));
    assert!(csv.contains("healthy"));

    Ok(())
}

#[test]
fn test_balance_csv() -> Result<()> {
    let service = test_service();
    let balance = service.check_balance(10, 5, 15)?;

    let mut buf = Vec::new();
    write_balance_csv(&mut buf, &balance)?;
    let csv = String::from_utf8(buf)?;

    assert_eq!(csv, "confirmed,unconfirmed,total\n10,5,15\n");

    Ok(())
}

#[test]
fn test_garden_csv() -> Result<()> {
    let service = test_service();
    let garden = service.build_garden("Rose", 3, SAMPLE_ADDRESS, 500, ExpiryUnit::Seconds)?;

    let mut buf = Vec::new();
    write_garden_csv(&mut buf, &garden)?;
    let csv = String::from_utf8(buf)?;

    assert_eq!(csv, "name,age,status\nRose,3,expiring\n");

    Ok(())
}

#[test]
fn test_user_report_json() -> Result<()> {
    let service = test_service();
    let report = service.check_user(SAMPLE_ADDRESS, 500, ExpiryUnit::Minutes)?;

    let mut buf = Vec::new();
    write_json(&mut buf, &report)?;
    let value: Value = serde_json::from_slice(&buf)?;

    assert_eq!(value["user"]["address"], SAMPLE_ADDRESS);
    assert_eq!(value["user"]["expiry"], 500);
    assert_eq!(value["user"]["unit"], "minutes");
    assert_eq!(value["status"], "expiring");

    Ok(())
}

#[test]
fn test_balance_json() -> Result<()> {
    let service = test_service();
    let balance = service.check_balance(10, 5, 15)?;

    let mut buf = Vec::new();
    write_json(&mut buf, &balance)?;
    let value: Value = serde_json::from_slice(&buf)?;

    assert_eq!(value["confirmed"], 10);
    assert_eq!(value["unconfirmed"], 5);
    assert_eq!(value["total"], 15);

    Ok(())
}
