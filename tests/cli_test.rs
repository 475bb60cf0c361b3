use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn cut_planner(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cut_planner"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn test_plan_then_show_and_export() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("plan_store.json");

    let plan = cut_planner(&store, &["plan", "--budget", "150"]);
    assert!(plan.status.success(), "{}", String::from_utf8_lossy(&plan.stderr));
    let stdout = String::from_utf8_lossy(&plan.stdout);
    assert!(stdout.contains("Saved plan"));
    assert!(store.exists());

    let show = cut_planner(&store, &["show"]);
    assert!(show.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("Grocery List"));

    let csv_path = dir.path().join("groceries.csv");
    let export = cut_planner(
        &store,
        &["export", "csv", "--out", csv_path.to_str().unwrap()],
    );
    assert!(export.status.success());
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Item,Aisle,Qty,Unit"));
    assert!(csv.lines().count() > 1);

    let json = cut_planner(&store, &["export", "json"]);
    assert!(json.status.success());
    let record: serde_json::Value = serde_json::from_slice(&json.stdout).unwrap();
    assert!(record.get("id").is_some());
    assert!(record.get("total_cost").is_some());
}

#[test]
fn test_export_without_plan_fails() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("plan_store.json");

    let export = cut_planner(&store, &["export", "csv"]);
    assert!(!export.status.success());
    assert!(String::from_utf8_lossy(&export.stderr).contains("No plan generated"));
}

#[test]
fn test_invalid_budget_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("plan_store.json");

    let plan = cut_planner(&store, &["plan", "--budget", "nan"]);
    assert!(!plan.status.success());
    assert!(String::from_utf8_lossy(&plan.stderr).contains("Invalid input"));
    assert!(!store.exists());
}
